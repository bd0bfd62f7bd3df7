use crate::server::{data::customer::CustomerRepository, model::reservation::GuestDetails};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::customer::CustomerFactory};

mod find_or_create;
