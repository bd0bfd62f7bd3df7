use super::*;

/// Tests extending a stay into nights another booking already holds.
///
/// Reservation A holds the room for Feb 10-15 and B takes it from Feb 16. Extending A to
/// Feb 16 only touches the turnover day; extending to Feb 17 overlaps B.
///
/// Expected: Ok for Feb 16, Err(InsufficientAvailability) for Feb 17
#[tokio::test]
async fn refuses_extension_into_next_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let room = factory::create_room(db, branch.id, room_type.id).await?;
    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);

    let first = service
        .create(explicit(
            branch.id,
            vec![room.id],
            stay(date(2026, 2, 10), date(2026, 2, 15)),
        ))
        .await?;
    service
        .create(explicit(
            branch.id,
            vec![room.id],
            stay(date(2026, 2, 16), date(2026, 2, 20)),
        ))
        .await?;

    let extended = service
        .update_checkout_date(first.reservation.id, date(2026, 2, 16))
        .await?;
    assert_eq!(extended.check_out_date, date(2026, 2, 16));

    let result = service
        .update_checkout_date(first.reservation.id, date(2026, 2, 17))
        .await;
    assert!(matches!(
        result,
        Err(AppError::InsufficientAvailability {
            requested: 1,
            available: 0
        })
    ));

    let unchanged = service.get_by_id(first.reservation.id).await?;
    assert_eq!(unchanged.reservation.check_out_date, date(2026, 2, 16));

    Ok(())
}

/// Tests the new check-out date must move the stay later.
///
/// Expected: Err(Validation) for the same or an earlier date
#[tokio::test]
async fn requires_later_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 3, 1), date(2026, 3, 5))
        .build()
        .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);

    for new_date in [date(2026, 3, 5), date(2026, 3, 3)] {
        assert!(matches!(
            service.update_checkout_date(reservation.id, new_date).await,
            Err(AppError::Validation(_))
        ));
    }

    Ok(())
}

/// Tests closed reservations cannot be extended.
///
/// Expected: Err(InvalidState)
#[tokio::test]
async fn refuses_closed_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);

    assert!(matches!(
        service
            .update_checkout_date(reservation.id, date(2026, 3, 9))
            .await,
        Err(AppError::InvalidState(_))
    ));

    Ok(())
}
