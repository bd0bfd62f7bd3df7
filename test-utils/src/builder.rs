use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Branch, RoomType, Room};
///
/// let test = TestBuilder::new()
///     .with_table(Branch)
///     .with_table(RoomType)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to place and move reservations.
    ///
    /// Adds, in dependency order: Branch, RoomType, Room, Customer, Reservation,
    /// BookedRoom, Billing.
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Branch)
            .with_table(RoomType)
            .with_table(Room)
            .with_table(Customer)
            .with_table(Reservation)
            .with_table(BookedRoom)
            .with_table(Billing)
    }

    /// Adds every table of the hotel schema.
    ///
    /// Equivalent to `with_reservation_tables()` followed by the payment details,
    /// travel company and blocked booking tables. Availability checks consult both
    /// booking kinds, so most service tests start from this set.
    pub fn with_hotel_tables(self) -> Self {
        self.with_reservation_tables()
            .with_table(ReservationPaymentDetails)
            .with_table(TravelCompany)
            .with_table(BlockedBooking)
            .with_table(BlockedBookingRoom)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
