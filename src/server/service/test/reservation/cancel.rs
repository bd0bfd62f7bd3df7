use super::*;

/// Tests cancelling frees the rooms and makes the dates bookable again.
///
/// Expected: Ok with `Cancelled` status, then a new booking of the same room succeeds
#[tokio::test]
async fn frees_rooms_for_rebooking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let room = factory::create_room(db, branch.id, room_type.id).await?;
    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    let range = stay(date(2026, 3, 1), date(2026, 3, 4));

    let booked = service
        .create(by_type(branch.id, room_type.id, 1, range))
        .await?;
    let cancelled = service.cancel(booked.reservation.id).await?;

    assert_eq!(cancelled.reservation_status, ReservationStatus::Cancelled);
    assert_eq!(
        room_statuses(db, &[room.id]).await?,
        vec![RoomStatus::Available]
    );

    let rebooked = service
        .create(by_type(branch.id, room_type.id, 1, range))
        .await?;
    assert_eq!(rebooked.rooms[0].id, room.id);

    Ok(())
}

/// Tests a reservation can only be cancelled once.
///
/// Expected: Err(InvalidState) on the second cancellation
#[tokio::test]
async fn refuses_second_cancellation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let room = factory::create_room(db, branch.id, room_type.id).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = factory::create_reservation(
        db,
        branch.id,
        customer.id,
        vec![room.id],
        date(2026, 3, 1),
        date(2026, 3, 4),
    )
    .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    service.cancel(reservation.id).await?;

    assert!(matches!(
        service.cancel(reservation.id).await,
        Err(AppError::InvalidState(_))
    ));

    Ok(())
}

/// Tests completed stays cannot be cancelled.
///
/// Expected: Err(InvalidState)
#[tokio::test]
async fn refuses_completed_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .status(ReservationStatus::Completed)
        .build()
        .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);

    assert!(matches!(
        service.cancel(reservation.id).await,
        Err(AppError::InvalidState(_))
    ));

    Ok(())
}

/// Tests a failure while freeing rooms undoes the status change.
///
/// A trigger makes the room update fail after the reservation was marked cancelled.
///
/// Expected: Err(DbErr) with the reservation still confirmed and its room still occupied
#[tokio::test]
async fn failed_cancel_is_rolled_back() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let room = RoomFactory::new(db, branch.id, room_type.id)
        .status(RoomStatus::Occupied)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;
    let reservation = factory::create_reservation(
        db,
        branch.id,
        customer.id,
        vec![room.id],
        date(2026, 3, 1),
        date(2026, 3, 3),
    )
    .await?;
    db.execute_unprepared(
        "CREATE TRIGGER fail_room_update BEFORE UPDATE ON room \
         BEGIN SELECT RAISE(ABORT, 'simulated failure'); END;",
    )
    .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    let result = service.cancel(reservation.id).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(room_statuses(db, &[room.id]).await?, vec![RoomStatus::Occupied]);
    let stored = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.reservation_status, ReservationStatus::Confirmed);

    Ok(())
}
