//! Service layer for business logic and orchestration.
//!
//! Services sit on top of the repositories and are responsible for:
//!
//! - **Business Logic**: Validation, status rules and billing arithmetic
//! - **Orchestration**: Coordinating several repositories for one operation
//! - **Transaction Management**: Every operation that changes more than one entity runs in a
//!   single `DatabaseTransaction` and either commits fully or leaves no trace
//!
//! Services hold no state beyond the injected connection and booking policy.

pub mod availability;
pub mod blocked_booking;
pub mod report;
pub mod reservation;
pub mod sweep;

#[cfg(test)]
mod test;
