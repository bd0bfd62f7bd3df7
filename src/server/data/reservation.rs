use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{PaymentStatus, ReservationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    date_range::DateRange,
    reservation::{Reservation, ReservationFilter},
};

/// Row data for a new reservation.
pub struct NewReservation<'p> {
    pub branch_id: i32,
    pub customer_id: i32,
    pub range: DateRange,
    pub number_of_occupants: i32,
    pub reservation_status: ReservationStatus,
    pub room_ids: &'p [i32],
}

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a reservation and one booked-room link per room.
    ///
    /// Payment status starts `Pending` and `number_of_rooms` equals the number of links.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, new: NewReservation<'_>) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            branch_id: ActiveValue::Set(new.branch_id),
            customer_id: ActiveValue::Set(new.customer_id),
            check_in_date: ActiveValue::Set(new.range.start()),
            check_out_date: ActiveValue::Set(new.range.end()),
            number_of_occupants: ActiveValue::Set(new.number_of_occupants),
            number_of_rooms: ActiveValue::Set(new.room_ids.len() as i32),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            reservation_status: ActiveValue::Set(new.reservation_status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for room_id in new.room_ids {
            entity::booked_room::ActiveModel {
                reservation_id: ActiveValue::Set(reservation.id),
                room_id: ActiveValue::Set(*room_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(Reservation::from_entity(reservation))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        Ok(entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Reservation::from_entity))
    }

    /// Gets the IDs of the rooms linked to a reservation, ascending.
    pub async fn room_ids(&self, reservation_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::BookedRoom::find()
            .filter(entity::booked_room::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::booked_room::Column::RoomId)
            .select_only()
            .column(entity::booked_room::Column::RoomId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn set_reservation_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Reservation, DbErr> {
        let updated = entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            reservation_status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Reservation::from_entity(updated))
    }

    /// Sets both status fields in one update.
    pub async fn set_statuses(
        &self,
        id: i32,
        reservation_status: ReservationStatus,
        payment_status: PaymentStatus,
    ) -> Result<Reservation, DbErr> {
        let updated = entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            reservation_status: ActiveValue::Set(reservation_status),
            payment_status: ActiveValue::Set(payment_status),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Reservation::from_entity(updated))
    }

    pub async fn set_check_out_date(
        &self,
        id: i32,
        check_out_date: NaiveDate,
    ) -> Result<Reservation, DbErr> {
        let updated = entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            check_out_date: ActiveValue::Set(check_out_date),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Reservation::from_entity(updated))
    }

    /// Gets a page of reservations matching the filter, latest check-in first.
    ///
    /// # Arguments
    /// - `filter` - Search text, status, check-in bounds and 0-indexed page
    ///
    /// # Returns
    /// - `Ok((reservations, total))` - Page of reservations and the total matching count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &ReservationFilter,
    ) -> Result<(Vec<Reservation>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::reservation::Relation::Customer.def(),
                )
                .filter(
                    Condition::any()
                        .add(entity::customer::Column::FullName.contains(search))
                        .add(entity::customer::Column::Email.contains(search)),
                );
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::reservation::Column::ReservationStatus.eq(status));
        }
        if let Some(from) = filter.check_in_from {
            query = query.filter(entity::reservation::Column::CheckInDate.gte(from));
        }
        if let Some(to) = filter.check_in_to {
            query = query.filter(entity::reservation::Column::CheckInDate.lte(to));
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::CheckInDate)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, filter.per_page);
        let total = paginator.num_items().await?;
        let reservations = paginator
            .fetch_page(filter.page)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect();

        Ok((reservations, total))
    }

    /// Gets every reservation of a customer, latest check-in first.
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<Reservation>, DbErr> {
        Ok(entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CustomerId.eq(customer_id))
            .order_by_desc(entity::reservation::Column::CheckInDate)
            .order_by_desc(entity::reservation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Gets open reservations still awaiting payment that were created at or after `cutoff`.
    pub async fn get_pending_created_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DbErr> {
        Ok(entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::PaymentStatus.eq(PaymentStatus::Pending))
            .filter(entity::reservation::Column::ReservationStatus.is_not_in([
                ReservationStatus::Cancelled,
                ReservationStatus::Completed,
            ]))
            .filter(entity::reservation::Column::CreatedAt.gte(cutoff))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Gets open reservations whose check-out date is before `today`.
    pub async fn get_overdue(&self, today: NaiveDate) -> Result<Vec<Reservation>, DbErr> {
        Ok(entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CheckOutDate.lt(today))
            .filter(entity::reservation::Column::ReservationStatus.is_not_in([
                ReservationStatus::Cancelled,
                ReservationStatus::Completed,
            ]))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }
}
