use super::*;

/// Tests rooms are in-house from the check-in day up to the night before check-out.
///
/// Expected: Ok with 2 rooms on check-in and the last night, 0 on check-out day
#[tokio::test]
async fn counts_nights_not_checkout_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let rooms = factory::helpers::create_rooms(db, branch.id, room_type.id, 2).await?;
    let customer = factory::create_customer(db).await?;
    factory::create_reservation(
        db,
        branch.id,
        customer.id,
        rooms.iter().map(|r| r.id).collect(),
        date(2026, 3, 1),
        date(2026, 3, 5),
    )
    .await?;

    let repo = ReportRepository::new(db);

    assert_eq!(repo.occupied_room_count(date(2026, 2, 28), None).await?, 0);
    assert_eq!(repo.occupied_room_count(date(2026, 3, 1), None).await?, 2);
    assert_eq!(repo.occupied_room_count(date(2026, 3, 4), None).await?, 2);
    assert_eq!(repo.occupied_room_count(date(2026, 3, 5), None).await?, 0);

    Ok(())
}

/// Tests cancelled and no-show reservations leave their rooms unoccupied.
///
/// Expected: Ok with only the confirmed reservation's room counted
#[tokio::test]
async fn ignores_cancelled_and_no_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let rooms = factory::helpers::create_rooms(db, branch.id, room_type.id, 3).await?;
    let customer = factory::create_customer(db).await?;

    for (room, status) in rooms.iter().zip([
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
        ReservationStatus::NoShow,
    ]) {
        ReservationFactory::new(db, branch.id, customer.id)
            .rooms(vec![room.id])
            .status(status)
            .build()
            .await?;
    }

    let repo = ReportRepository::new(db);

    assert_eq!(repo.occupied_room_count(date(2026, 3, 2), None).await?, 1);

    Ok(())
}

/// Tests the branch filter restricts the count to that branch's reservations.
///
/// Expected: Ok with 1 room per branch and 2 overall
#[tokio::test]
async fn filters_by_branch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let other_branch = factory::create_branch(db).await?;
    let room = factory::create_room(db, branch.id, room_type.id).await?;
    let other_room = factory::create_room(db, other_branch.id, room_type.id).await?;
    let customer = factory::create_customer(db).await?;

    for (branch_id, room_id) in [(branch.id, room.id), (other_branch.id, other_room.id)] {
        ReservationFactory::new(db, branch_id, customer.id)
            .rooms(vec![room_id])
            .build()
            .await?;
    }

    let repo = ReportRepository::new(db);
    let day = date(2026, 3, 2);

    assert_eq!(repo.occupied_room_count(day, Some(branch.id)).await?, 1);
    assert_eq!(repo.occupied_room_count(day, Some(other_branch.id)).await?, 1);
    assert_eq!(repo.occupied_room_count(day, None).await?, 2);

    Ok(())
}
