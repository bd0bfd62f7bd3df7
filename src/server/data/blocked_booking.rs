use chrono::Utc;
use entity::sea_orm_active_enums::BillingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::blocked_booking::{
    BlockQuote, BlockedBooking, CreateBlockedBookingParams,
};

pub struct BlockedBookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlockedBookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a blocked booking with its price quote and one link per held room.
    ///
    /// Billing status starts `Unpaid`.
    pub async fn create(
        &self,
        params: &CreateBlockedBookingParams,
        quote: BlockQuote,
        room_ids: &[i32],
    ) -> Result<BlockedBooking, DbErr> {
        let block = entity::blocked_booking::ActiveModel {
            company_id: ActiveValue::Set(params.company_id),
            branch_id: ActiveValue::Set(params.branch_id),
            room_type_id: ActiveValue::Set(params.room_type_id),
            start_date: ActiveValue::Set(params.range.start()),
            end_date: ActiveValue::Set(params.range.end()),
            number_of_rooms: ActiveValue::Set(room_ids.len() as i32),
            room_charge: ActiveValue::Set(quote.room_charge),
            discount_amount: ActiveValue::Set(quote.discount_amount),
            tax_amount: ActiveValue::Set(quote.tax_amount),
            total_amount: ActiveValue::Set(quote.total_amount),
            billing_status: ActiveValue::Set(BillingStatus::Unpaid),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for room_id in room_ids {
            entity::blocked_booking_room::ActiveModel {
                blocked_booking_id: ActiveValue::Set(block.id),
                room_id: ActiveValue::Set(*room_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(BlockedBooking::from_entity(block, room_ids.to_vec()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BlockedBooking>, DbErr> {
        let Some(block) = entity::prelude::BlockedBooking::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let room_ids = self.room_ids(id).await?;

        Ok(Some(BlockedBooking::from_entity(block, room_ids)))
    }

    /// Gets the IDs of the rooms held by a block, ascending.
    pub async fn room_ids(&self, blocked_booking_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::BlockedBookingRoom::find()
            .filter(entity::blocked_booking_room::Column::BlockedBookingId.eq(blocked_booking_id))
            .order_by_asc(entity::blocked_booking_room::Column::RoomId)
            .select_only()
            .column(entity::blocked_booking_room::Column::RoomId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets every block of a travel company, latest start date first.
    pub async fn get_by_company(&self, company_id: i32) -> Result<Vec<BlockedBooking>, DbErr> {
        let blocks = entity::prelude::BlockedBooking::find()
            .filter(entity::blocked_booking::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::blocked_booking::Column::StartDate)
            .order_by_desc(entity::blocked_booking::Column::Id)
            .all(self.db)
            .await?;

        let block_ids: Vec<i32> = blocks.iter().map(|b| b.id).collect();
        let mut rooms_by_block: HashMap<i32, Vec<i32>> = HashMap::new();
        if !block_ids.is_empty() {
            let links = entity::prelude::BlockedBookingRoom::find()
                .filter(entity::blocked_booking_room::Column::BlockedBookingId.is_in(block_ids))
                .order_by_asc(entity::blocked_booking_room::Column::RoomId)
                .all(self.db)
                .await?;
            for link in links {
                rooms_by_block
                    .entry(link.blocked_booking_id)
                    .or_default()
                    .push(link.room_id);
            }
        }

        Ok(blocks
            .into_iter()
            .map(|block| {
                let room_ids = rooms_by_block.remove(&block.id).unwrap_or_default();
                BlockedBooking::from_entity(block, room_ids)
            })
            .collect())
    }

    pub async fn set_billing_status(
        &self,
        id: i32,
        status: BillingStatus,
    ) -> Result<(), DbErr> {
        entity::blocked_booking::ActiveModel {
            id: ActiveValue::Unchanged(id),
            billing_status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a block together with its room links.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BlockedBookingRoom::delete_many()
            .filter(entity::blocked_booking_room::Column::BlockedBookingId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::BlockedBooking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
