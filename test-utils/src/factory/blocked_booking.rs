//! Blocked booking factory for arranging existing travel-company holds.
//!
//! Like the reservation factory it writes rows directly without availability checks.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a blocked booking holding `room_ids` for `[start_date, end_date)`.
///
/// Billing amounts are zero and the billing status is `Unpaid`.
///
/// # Returns
/// - `Ok(entity::blocked_booking::Model)` - Created blocked booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blocked_booking(
    db: &DatabaseConnection,
    company_id: i32,
    branch_id: i32,
    room_type_id: i32,
    room_ids: Vec<i32>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<entity::blocked_booking::Model, DbErr> {
    let block = entity::blocked_booking::ActiveModel {
        company_id: ActiveValue::Set(company_id),
        branch_id: ActiveValue::Set(branch_id),
        room_type_id: ActiveValue::Set(room_type_id),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        number_of_rooms: ActiveValue::Set(room_ids.len() as i32),
        room_charge: ActiveValue::Set(Decimal::ZERO),
        discount_amount: ActiveValue::Set(Decimal::ZERO),
        tax_amount: ActiveValue::Set(Decimal::ZERO),
        total_amount: ActiveValue::Set(Decimal::ZERO),
        billing_status: ActiveValue::Set(BillingStatus::Unpaid),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for room_id in room_ids {
        entity::blocked_booking_room::ActiveModel {
            blocked_booking_id: ActiveValue::Set(block.id),
            room_id: ActiveValue::Set(room_id),
        }
        .insert(db)
        .await?;
    }

    Ok(block)
}
