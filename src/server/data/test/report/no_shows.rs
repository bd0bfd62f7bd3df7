use super::*;

/// Tests no-show entries carry customer and branch names, latest check-in first.
///
/// Expected: Ok with the two no-shows and no other reservations
#[tokio::test]
async fn lists_no_shows_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = CustomerFactory::new(db)
        .full_name("Nadia Fernando")
        .build()
        .await?;

    let earlier = ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 3, 1), date(2026, 3, 3))
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    let later = ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 3, 10), date(2026, 3, 12))
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 3, 5), date(2026, 3, 6))
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let entries = repo.no_shows(None, None, None).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].reservation_id, later.id);
    assert_eq!(entries[1].reservation_id, earlier.id);
    assert_eq!(entries[0].customer_name, "Nadia Fernando");
    assert_eq!(entries[0].branch_name, branch.name);

    Ok(())
}

/// Tests the check-in date window and branch filter.
///
/// Expected: Ok with only the in-window no-show of the requested branch
#[tokio::test]
async fn filters_by_window_and_branch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let other_branch = factory::create_branch(db).await?;
    let customer = factory::create_customer(db).await?;

    let wanted = ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 3, 10), date(2026, 3, 12))
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 4, 10), date(2026, 4, 12))
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    ReservationFactory::new(db, other_branch.id, customer.id)
        .dates(date(2026, 3, 10), date(2026, 3, 12))
        .status(ReservationStatus::NoShow)
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let entries = repo
        .no_shows(
            Some(date(2026, 3, 1)),
            Some(date(2026, 3, 31)),
            Some(branch.id),
        )
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].reservation_id, wanted.id);

    Ok(())
}
