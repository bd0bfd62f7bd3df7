use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::reservation::GuestDetails;

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    /// Finds the customer with this email or creates one from the guest details.
    ///
    /// Email matching ignores surrounding whitespace and letter case, including against rows
    /// stored with mixed case; new customers are stored with the normalized email.
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or newly created customer
    /// - `Err(DbErr)` - Database error, including a unique violation if another booking
    ///   created the same customer concurrently
    pub async fn find_or_create(
        &self,
        guest: &GuestDetails,
    ) -> Result<entity::customer::Model, DbErr> {
        let email = guest.email.trim().to_lowercase();

        let existing = entity::prelude::Customer::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::customer::Entity,
                    entity::customer::Column::Email,
                ))))
                .eq(email.as_str()),
            )
            .one(self.db)
            .await?;

        if let Some(customer) = existing {
            return Ok(customer);
        }

        entity::customer::ActiveModel {
            full_name: ActiveValue::Set(guest.full_name.trim().to_string()),
            email: ActiveValue::Set(email),
            phone: ActiveValue::Set(guest.phone.clone()),
            address: ActiveValue::Set(guest.address.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
