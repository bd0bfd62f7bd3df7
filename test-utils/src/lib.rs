//! Hotelcore Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the hotel
//! reservation engine. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert branches, rooms, customers, reservations and more
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_room() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (branch, room_type) = factory::helpers::create_hotel(db).await?;
//!     let room = factory::create_room(db, branch.id, room_type.id).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
