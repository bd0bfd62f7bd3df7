use super::*;

/// Tests only bills of the customer's own reservations are returned.
///
/// Expected: Ok with the customer's two bills, oldest first, and none for a customer
/// without bills
#[tokio::test]
async fn lists_bills_of_customer_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let other = factory::create_customer(db).await?;

    let later = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;
    BillingFactory::new(db, later.id, date(2026, 5, 2))
        .build()
        .await?;
    let earlier = ReservationFactory::new(db, branch.id, customer.id)
        .build()
        .await?;
    BillingFactory::new(db, earlier.id, date(2026, 4, 2))
        .status(BillingStatus::Unpaid)
        .build()
        .await?;
    let unrelated = ReservationFactory::new(db, branch.id, other.id)
        .build()
        .await?;
    BillingFactory::new(db, unrelated.id, date(2026, 4, 10))
        .build()
        .await?;

    let repo = BillingRepository::new(db);
    let bills = repo.get_by_customer(customer.id).await?;

    let ids: Vec<i32> = bills.iter().map(|b| b.reservation_id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);
    assert_eq!(bills[0].status, BillingStatus::Unpaid);

    let lonely = factory::create_customer(db).await?;
    assert!(repo.get_by_customer(lonely.id).await?.is_empty());

    Ok(())
}
