use super::*;

/// Tests deleting a block removes the block and all of its room links.
///
/// Expected: Ok with no block or link rows left
#[tokio::test]
async fn deletes_block_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let rooms = factory::helpers::create_rooms(db, branch.id, room_type.id, 4).await?;
    let company = factory::create_travel_company(db).await?;
    let block = create_blocked_booking(
        db,
        company.id,
        branch.id,
        room_type.id,
        rooms.iter().map(|r| r.id).collect(),
        date(2026, 6, 1),
        date(2026, 6, 3),
    )
    .await?;

    let repo = BlockedBookingRepository::new(db);
    repo.delete(block.id).await?;

    assert!(repo.get_by_id(block.id).await?.is_none());
    assert_eq!(entity::prelude::BlockedBookingRoom::find().count(db).await?, 0);

    Ok(())
}
