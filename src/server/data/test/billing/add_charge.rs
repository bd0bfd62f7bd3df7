use super::*;

/// Tests the first charge on a reservation opens an unpaid bill.
///
/// Expected: Ok with total and other charges equal to the amount, no tax
#[tokio::test]
async fn opens_unpaid_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;

    let repo = BillingRepository::new(db);
    let billing = repo
        .add_charge(reservation.id, Decimal::new(2550, 2), date(2026, 3, 2))
        .await?;

    assert_eq!(billing.reservation_id, reservation.id);
    assert_eq!(billing.total_amount, Decimal::new(2550, 2));
    assert_eq!(billing.other_charges, Decimal::new(2550, 2));
    assert_eq!(billing.tax_amount, Decimal::ZERO);
    assert_eq!(billing.billing_date, date(2026, 3, 2));
    assert_eq!(billing.status, BillingStatus::Unpaid);

    Ok(())
}

/// Tests further charges accumulate on the existing bill.
///
/// Expected: Ok with other charges and total incremented by each amount
#[tokio::test]
async fn accumulates_on_existing_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;

    let repo = BillingRepository::new(db);
    repo.add_charge(reservation.id, Decimal::new(1000, 2), date(2026, 3, 2))
        .await?;
    let billing = repo
        .add_charge(reservation.id, Decimal::new(525, 2), date(2026, 3, 3))
        .await?;

    assert_eq!(billing.other_charges, Decimal::new(1525, 2));
    assert_eq!(billing.total_amount, Decimal::new(1525, 2));
    assert_eq!(billing.billing_date, date(2026, 3, 2));

    Ok(())
}
