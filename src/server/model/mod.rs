//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types at the data-layer boundary via
//! `from_entity`, and services convert them into DTOs with `into_dto` when handing results
//! to callers.

pub mod billing;
pub mod blocked_booking;
pub mod date_range;
pub mod report;
pub mod reservation;
pub mod room;
