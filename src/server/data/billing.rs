use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::billing::Billing;

/// Settled amounts written at check-out.
pub struct Settlement {
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub other_charges: Decimal,
    pub billing_date: NaiveDate,
}

pub struct BillingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_reservation(&self, reservation_id: i32) -> Result<Option<Billing>, DbErr> {
        Ok(self
            .find_entity(reservation_id)
            .await?
            .map(Billing::from_entity))
    }

    /// Creates or overwrites the reservation's bill as `Paid`.
    pub async fn settle(
        &self,
        reservation_id: i32,
        settlement: Settlement,
    ) -> Result<Billing, DbErr> {
        let saved = match self.find_entity(reservation_id).await? {
            Some(billing) => {
                entity::billing::ActiveModel {
                    id: ActiveValue::Unchanged(billing.id),
                    total_amount: ActiveValue::Set(settlement.total_amount),
                    tax_amount: ActiveValue::Set(settlement.tax_amount),
                    other_charges: ActiveValue::Set(settlement.other_charges),
                    billing_date: ActiveValue::Set(settlement.billing_date),
                    status: ActiveValue::Set(BillingStatus::Paid),
                    ..Default::default()
                }
                .update(self.db)
                .await?
            }
            None => {
                entity::billing::ActiveModel {
                    reservation_id: ActiveValue::Set(reservation_id),
                    total_amount: ActiveValue::Set(settlement.total_amount),
                    tax_amount: ActiveValue::Set(settlement.tax_amount),
                    other_charges: ActiveValue::Set(settlement.other_charges),
                    billing_date: ActiveValue::Set(settlement.billing_date),
                    status: ActiveValue::Set(BillingStatus::Paid),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Billing::from_entity(saved))
    }

    /// Adds an extra charge to the reservation's bill.
    ///
    /// Creates an `Unpaid` bill with no tax when none exists yet, otherwise increments
    /// `other_charges` and `total_amount` of the existing one.
    pub async fn add_charge(
        &self,
        reservation_id: i32,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<Billing, DbErr> {
        let saved = match self.find_entity(reservation_id).await? {
            Some(billing) => {
                let other_charges = billing.other_charges + amount;
                let total_amount = billing.total_amount + amount;
                entity::billing::ActiveModel {
                    id: ActiveValue::Unchanged(billing.id),
                    other_charges: ActiveValue::Set(other_charges),
                    total_amount: ActiveValue::Set(total_amount),
                    ..Default::default()
                }
                .update(self.db)
                .await?
            }
            None => {
                entity::billing::ActiveModel {
                    reservation_id: ActiveValue::Set(reservation_id),
                    total_amount: ActiveValue::Set(amount),
                    tax_amount: ActiveValue::Set(Decimal::ZERO),
                    other_charges: ActiveValue::Set(amount),
                    billing_date: ActiveValue::Set(today),
                    status: ActiveValue::Set(BillingStatus::Unpaid),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Billing::from_entity(saved))
    }

    /// Gets bills dated within `[from, to]`, optionally restricted to one branch.
    ///
    /// Ordered by billing date, then ID.
    pub async fn get_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        branch_id: Option<i32>,
    ) -> Result<Vec<Billing>, DbErr> {
        let mut query = entity::prelude::Billing::find()
            .filter(entity::billing::Column::BillingDate.gte(from))
            .filter(entity::billing::Column::BillingDate.lte(to));

        if let Some(branch_id) = branch_id {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::billing::Relation::Reservation.def(),
                )
                .filter(entity::reservation::Column::BranchId.eq(branch_id));
        }

        Ok(query
            .order_by_asc(entity::billing::Column::BillingDate)
            .order_by_asc(entity::billing::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Billing::from_entity)
            .collect())
    }

    /// Gets every bill of a customer's reservations, oldest first.
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<Billing>, DbErr> {
        Ok(entity::prelude::Billing::find()
            .join(
                JoinType::InnerJoin,
                entity::billing::Relation::Reservation.def(),
            )
            .filter(entity::reservation::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::billing::Column::BillingDate)
            .order_by_asc(entity::billing::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Billing::from_entity)
            .collect())
    }

    async fn find_entity(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::billing::Model>, DbErr> {
        entity::prelude::Billing::find()
            .filter(entity::billing::Column::ReservationId.eq(reservation_id))
            .one(self.db)
            .await
    }
}
