use chrono::NaiveDate;
use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::report::NoShowEntry;

/// Read-only queries behind the occupancy and no-show reports.
pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts distinct rooms in-house on `date`.
    ///
    /// A room is in-house when a reservation that is neither cancelled nor a no-show links
    /// it with `check_in_date <= date < check_out_date`.
    pub async fn occupied_room_count(
        &self,
        date: NaiveDate,
        branch_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::BookedRoom::find()
            .join(
                JoinType::InnerJoin,
                entity::booked_room::Relation::Reservation.def(),
            )
            .filter(entity::reservation::Column::ReservationStatus.is_not_in([
                ReservationStatus::Cancelled,
                ReservationStatus::NoShow,
            ]))
            .filter(entity::reservation::Column::CheckInDate.lte(date))
            .filter(entity::reservation::Column::CheckOutDate.gt(date));

        if let Some(branch_id) = branch_id {
            query = query.filter(entity::reservation::Column::BranchId.eq(branch_id));
        }

        let room_ids = query
            .select_only()
            .column(entity::booked_room::Column::RoomId)
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(room_ids.len() as u64)
    }

    /// Lists `No_show` reservations, latest check-in first.
    ///
    /// # Arguments
    /// - `from` - Optional inclusive lower bound on check-in date
    /// - `to` - Optional inclusive upper bound on check-in date
    /// - `branch_id` - Optional branch filter
    pub async fn no_shows(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        branch_id: Option<i32>,
    ) -> Result<Vec<NoShowEntry>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ReservationStatus.eq(ReservationStatus::NoShow));

        if let Some(from) = from {
            query = query.filter(entity::reservation::Column::CheckInDate.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::reservation::Column::CheckInDate.lte(to));
        }
        if let Some(branch_id) = branch_id {
            query = query.filter(entity::reservation::Column::BranchId.eq(branch_id));
        }

        let rows = query
            .find_also_related(entity::prelude::Customer)
            .order_by_desc(entity::reservation::Column::CheckInDate)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        let branch_names: HashMap<i32, String> = entity::prelude::Branch::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|b| (b.id, b.name))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(reservation, customer)| NoShowEntry {
                reservation_id: reservation.id,
                customer_name: customer.map(|c| c.full_name).unwrap_or_default(),
                check_in_date: reservation.check_in_date,
                number_of_rooms: reservation.number_of_rooms,
                branch_name: branch_names
                    .get(&reservation.branch_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect())
    }
}
