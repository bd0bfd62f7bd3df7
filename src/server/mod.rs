//! Server-side business logic for the reservation engine.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Reservation, blocked booking, availability, reporting
//!   and sweep operations; owns transaction boundaries
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and result-triple mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration and booking policy
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Scheduler** (`scheduler/`) - Cron jobs that trigger the sweep operations
//!
//! # Call Flow
//!
//! 1. **Caller** builds operation params (dates, owner, room selection)
//! 2. **Service** validates input, opens a transaction when more than one entity changes
//! 3. **Data** queries through the transaction handle and converts entities to domain models
//! 4. **Service** commits and returns the domain model
//! 5. **Caller** converts the domain model into a DTO or an `ApiResponse`

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
