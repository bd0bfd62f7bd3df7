//! Database repository layer for all domain entities.
//!
//! Repositories handle queries, inserts, updates and deletes for each domain and convert
//! SeaORM entity models to domain models at the boundary. Every repository is generic over
//! `ConnectionTrait`, so the same code runs against the connection pool for reads and
//! against a `DatabaseTransaction` when a service needs several writes to commit together.

pub mod billing;
pub mod blocked_booking;
pub mod booking;
pub mod customer;
pub mod payment_details;
pub mod report;
pub mod reservation;
pub mod room;

#[cfg(test)]
mod test;
