use super::*;

/// Tests creating a reservation with its booked-room links.
///
/// Verifies that the reservation row carries the requested dates and status, starts with
/// a pending payment, and gets one link per room.
///
/// Expected: Ok with reservation and two links
#[tokio::test]
async fn creates_reservation_with_room_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let rooms = factory::helpers::create_rooms(db, branch.id, room_type.id, 2).await?;
    let customer = factory::create_customer(db).await?;
    let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(NewReservation {
            branch_id: branch.id,
            customer_id: customer.id,
            range: DateRange::new(date(2026, 5, 1), date(2026, 5, 4)).unwrap(),
            number_of_occupants: 3,
            reservation_status: ReservationStatus::Confirmed,
            room_ids: &room_ids,
        })
        .await?;

    assert_eq!(reservation.check_in_date, date(2026, 5, 1));
    assert_eq!(reservation.check_out_date, date(2026, 5, 4));
    assert_eq!(reservation.number_of_rooms, 2);
    assert_eq!(reservation.payment_status, PaymentStatus::Pending);
    assert_eq!(reservation.reservation_status, ReservationStatus::Confirmed);

    let links = entity::prelude::BookedRoom::find()
        .filter(entity::booked_room::Column::ReservationId.eq(reservation.id))
        .count(db)
        .await?;
    assert_eq!(links, 2);
    assert_eq!(repo.room_ids(reservation.id).await?, room_ids);

    Ok(())
}

/// Tests updating only the check-out date.
///
/// Expected: Ok with new check-out date and unchanged statuses
#[tokio::test]
async fn sets_check_out_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let room = factory::create_room(db, branch.id, room_type.id).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = factory::create_reservation(
        db,
        branch.id,
        customer.id,
        vec![room.id],
        date(2026, 5, 1),
        date(2026, 5, 4),
    )
    .await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .set_check_out_date(reservation.id, date(2026, 5, 6))
        .await?;

    assert_eq!(updated.check_in_date, date(2026, 5, 1));
    assert_eq!(updated.check_out_date, date(2026, 5, 6));
    assert_eq!(updated.reservation_status, reservation.reservation_status);
    assert_eq!(updated.payment_status, reservation.payment_status);

    Ok(())
}
