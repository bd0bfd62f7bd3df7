use crate::server::data::billing::{BillingRepository, Settlement};
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, billing::BillingFactory, helpers::date, reservation::ReservationFactory},
};

mod add_charge;
mod get_by_customer;
mod settle;
