use super::*;

/// Tests charges accumulate on an unpaid bill.
///
/// Expected: Ok with other charges and total at 32.50 after two charges
#[tokio::test]
async fn accumulates_charges() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    service
        .add_optional_charge(reservation.id, Decimal::new(2000, 2), "Minibar")
        .await?;
    let billing = service
        .add_optional_charge(reservation.id, Decimal::new(1250, 2), "Laundry")
        .await?;

    assert_eq!(billing.other_charges, Decimal::new(3250, 2));
    assert_eq!(billing.total_amount, Decimal::new(3250, 2));
    assert_eq!(billing.status, BillingStatus::Unpaid);

    Ok(())
}

/// Tests non-positive amounts and blank descriptions are rejected.
///
/// Expected: Err(Validation) for each
#[tokio::test]
async fn validates_charge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);

    assert!(matches!(
        service
            .add_optional_charge(reservation.id, Decimal::ZERO, "Minibar")
            .await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service
            .add_optional_charge(reservation.id, Decimal::new(-500, 2), "Refund")
            .await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service
            .add_optional_charge(reservation.id, Decimal::new(500, 2), "   ")
            .await,
        Err(AppError::Validation(_))
    ));

    Ok(())
}

/// Tests cancelled reservations take no further charges.
///
/// Expected: Err(InvalidState)
#[tokio::test]
async fn refuses_cancelled_reservation() -> Result<(), AppError> {
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
            .add_optional_charge(reservation.id, Decimal::new(500, 2), "Minibar")
            .await,
        Err(AppError::InvalidState(_))
    ));

    Ok(())
}
