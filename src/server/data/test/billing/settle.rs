use super::*;

/// Tests settling a reservation without a bill creates a paid one.
///
/// Expected: Ok with the settled amounts and `Paid` status
#[tokio::test]
async fn creates_paid_bill() -> Result<(), DbErr> {
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
        .settle(
            reservation.id,
            Settlement {
                total_amount: Decimal::new(82500, 2),
                tax_amount: Decimal::new(7500, 2),
                other_charges: Decimal::ZERO,
                billing_date: date(2026, 3, 5),
            },
        )
        .await?;

    assert_eq!(billing.total_amount, Decimal::new(82500, 2));
    assert_eq!(billing.tax_amount, Decimal::new(7500, 2));
    assert_eq!(billing.status, BillingStatus::Paid);
    assert_eq!(
        repo.get_by_reservation(reservation.id).await?.map(|b| b.id),
        Some(billing.id)
    );

    Ok(())
}

/// Tests settling overwrites the amounts of an open bill instead of adding a second one.
///
/// Expected: Ok with the same bill ID, new amounts and `Paid` status
#[tokio::test]
async fn overwrites_existing_bill() -> Result<(), DbErr> {
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
    let open = BillingFactory::new(db, reservation.id, date(2026, 3, 2))
        .amounts(Decimal::new(2000, 2), Decimal::ZERO, Decimal::new(2000, 2))
        .status(BillingStatus::Unpaid)
        .build()
        .await?;

    let repo = BillingRepository::new(db);
    let billing = repo
        .settle(
            reservation.id,
            Settlement {
                total_amount: Decimal::new(46000, 2),
                tax_amount: Decimal::new(4000, 2),
                other_charges: Decimal::new(2000, 2),
                billing_date: date(2026, 3, 5),
            },
        )
        .await?;

    assert_eq!(billing.id, open.id);
    assert_eq!(billing.total_amount, Decimal::new(46000, 2));
    assert_eq!(billing.other_charges, Decimal::new(2000, 2));
    assert_eq!(billing.billing_date, date(2026, 3, 5));
    assert_eq!(billing.status, BillingStatus::Paid);

    Ok(())
}
