use crate::server::{
    data::blocked_booking::BlockedBookingRepository,
    model::{
        blocked_booking::{BlockQuote, CreateBlockedBookingParams},
        date_range::DateRange,
    },
};
use entity::sea_orm_active_enums::BillingStatus;
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, blocked_booking::create_blocked_booking, helpers::date},
};

mod create;
mod delete;
