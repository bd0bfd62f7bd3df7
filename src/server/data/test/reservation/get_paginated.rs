use super::*;

/// Tests reservations are listed latest check-in first with an accurate total.
///
/// Expected: Ok with page of 2 out of 3, ordered by check-in descending
#[tokio::test]
async fn orders_by_check_in_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    for day in [3, 9, 6] {
        ReservationFactory::new(db, branch.id, customer.id)
            .dates(date(2026, 7, day), date(2026, 7, day + 1))
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let (page, total) = repo
        .get_paginated(&ReservationFilter {
            per_page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].check_in_date, date(2026, 7, 9));
    assert_eq!(page[1].check_in_date, date(2026, 7, 6));

    let (second_page, _) = repo
        .get_paginated(&ReservationFilter {
            page: 1,
            per_page: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].check_in_date, date(2026, 7, 3));

    Ok(())
}

/// Tests searching by customer name or email combined with a status filter.
///
/// Expected: Ok with only the matching confirmed reservation
#[tokio::test]
async fn filters_by_customer_text_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let alice = CustomerFactory::new(db)
        .full_name("Alice Perera")
        .email("alice@example.com")
        .build()
        .await?;
    let bob = CustomerFactory::new(db)
        .full_name("Bob Silva")
        .email("bob@example.com")
        .build()
        .await?;

    let wanted = ReservationFactory::new(db, branch.id, alice.id)
        .status(ReservationStatus::Confirmed)
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, alice.id)
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, bob.id)
        .status(ReservationStatus::Confirmed)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let (by_name, total) = repo
        .get_paginated(&ReservationFilter {
            search: Some("Perera".to_string()),
            status: Some(ReservationStatus::Confirmed),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(by_name[0].id, wanted.id);

    let (by_email, total) = repo
        .get_paginated(&ReservationFilter {
            search: Some("bob@".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(total, 1);
    assert_eq!(by_email[0].customer_id, bob.id);

    Ok(())
}

/// Tests the inclusive check-in date window.
///
/// Expected: Ok with reservations checking in on the bounds included
#[tokio::test]
async fn filters_by_check_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    for day in [1, 5, 10, 15] {
        ReservationFactory::new(db, branch.id, customer.id)
            .dates(date(2026, 8, day), date(2026, 8, day + 2))
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let (page, total) = repo
        .get_paginated(&ReservationFilter {
            check_in_from: Some(date(2026, 8, 5)),
            check_in_to: Some(date(2026, 8, 10)),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(page[0].check_in_date, date(2026, 8, 10));
    assert_eq!(page[1].check_in_date, date(2026, 8, 5));

    Ok(())
}
