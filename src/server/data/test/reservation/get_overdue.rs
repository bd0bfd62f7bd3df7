use super::*;

/// Tests reservations whose check-out date has passed are returned unless closed.
///
/// A reservation checking out today is not overdue yet.
///
/// Expected: Ok with the confirmed and no-show reservations that ended yesterday
#[tokio::test]
async fn returns_open_reservations_past_checkout() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let today = date(2026, 9, 10);

    let confirmed = ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 9, 5), date(2026, 9, 9))
        .build()
        .await?;
    let no_show = ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 9, 7), date(2026, 9, 9))
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 9, 5), date(2026, 9, 10))
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 9, 1), date(2026, 9, 3))
        .status(ReservationStatus::Completed)
        .build()
        .await?;
    ReservationFactory::new(db, branch.id, customer.id)
        .dates(date(2026, 9, 1), date(2026, 9, 3))
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let overdue = repo.get_overdue(today).await?;

    let ids: Vec<i32> = overdue.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![confirmed.id, no_show.id]);

    Ok(())
}
