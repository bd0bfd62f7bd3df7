use super::*;

/// Tests the invoice pairs the reservation with its bill.
///
/// Expected: Ok with the stored amounts
#[tokio::test]
async fn returns_bill_with_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;
    BillingFactory::new(db, reservation.id, date(2026, 3, 5))
        .amounts(
            Decimal::new(22000, 2),
            Decimal::new(2000, 2),
            Decimal::ZERO,
        )
        .build()
        .await?;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    let invoice = service.get_invoice(reservation.id).await?;

    assert_eq!(invoice.reservation.reservation.id, reservation.id);
    assert_eq!(invoice.billing.total_amount, Decimal::new(22000, 2));
    assert_eq!(invoice.billing.tax_amount, Decimal::new(2000, 2));
    assert_eq!(invoice.billing.billing_date, date(2026, 3, 5));

    Ok(())
}

/// Tests reservations without a bill have no invoice.
///
/// Expected: Err(NotFound) for a reservation without a bill and for an unknown reservation
#[tokio::test]
async fn missing_bill_is_not_found() -> Result<(), AppError> {
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
        service.get_invoice(reservation.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_invoice(i32::MAX).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
