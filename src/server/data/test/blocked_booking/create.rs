use super::*;

/// Tests creating a block stores its quote and room links.
///
/// Expected: Ok with `Unpaid` block holding the given rooms
#[tokio::test]
async fn creates_block_with_quote_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, room_type) = factory::helpers::create_hotel(db).await?;
    let rooms = factory::helpers::create_rooms(db, branch.id, room_type.id, 4).await?;
    let company = factory::create_travel_company(db).await?;
    let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();

    let params = CreateBlockedBookingParams {
        company_id: company.id,
        branch_id: branch.id,
        room_type_id: room_type.id,
        range: DateRange::new(date(2026, 6, 1), date(2026, 6, 3)).unwrap(),
        number_of_rooms: 4,
    };
    let quote = BlockQuote {
        room_charge: Decimal::new(80000, 2),
        discount_amount: Decimal::new(8000, 2),
        tax_amount: Decimal::new(7200, 2),
        total_amount: Decimal::new(79200, 2),
    };

    let repo = BlockedBookingRepository::new(db);
    let block = repo.create(&params, quote, &room_ids).await?;

    assert_eq!(block.number_of_rooms, 4);
    assert_eq!(block.room_ids, room_ids);
    assert_eq!(block.quote, quote);
    assert_eq!(block.billing_status, BillingStatus::Unpaid);

    let stored = repo.get_by_id(block.id).await?.unwrap();
    assert_eq!(stored.room_ids, room_ids);
    assert_eq!(stored.start_date, date(2026, 6, 1));
    assert_eq!(stored.end_date, date(2026, 6, 3));
    assert_eq!(stored.quote.total_amount, Decimal::new(79200, 2));

    Ok(())
}
