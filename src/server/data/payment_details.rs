use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct PaymentDetailsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentDetailsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists_for_reservation(&self, reservation_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ReservationPaymentDetails::find()
            .filter(entity::reservation_payment_details::Column::ReservationId.eq(reservation_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stores the masked card details of a reservation.
    ///
    /// # Arguments
    /// - `reservation_id` - Reservation being paid for
    /// - `card_type` - Card brand as entered
    /// - `card_last_four` - Last four digits of the card number
    /// - `exp_month` - Expiry month (1-12)
    /// - `exp_year` - Expiry year
    pub async fn create(
        &self,
        reservation_id: i32,
        card_type: String,
        card_last_four: String,
        exp_month: i32,
        exp_year: i32,
    ) -> Result<entity::reservation_payment_details::Model, DbErr> {
        entity::reservation_payment_details::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            card_type: ActiveValue::Set(card_type),
            card_last_four: ActiveValue::Set(card_last_four),
            card_exp_month: ActiveValue::Set(exp_month),
            card_exp_year: ActiveValue::Set(exp_year),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
