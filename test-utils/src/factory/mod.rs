//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (branch, room_type) = factory::helpers::create_hotel(&db).await?;
//! let rooms = factory::helpers::create_rooms(&db, branch.id, room_type.id, 3).await?;
//! let customer = factory::create_customer(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::reservation::ReservationFactory;
//!
//! let reservation = ReservationFactory::new(&db, branch.id, customer.id)
//!     .dates(date(2026, 3, 1), date(2026, 3, 5))
//!     .rooms(vec![room.id])
//!     .status(ReservationStatus::Confirmed)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `branch` - Hotel branches
//! - `room_type` - Room types with a base price
//! - `room` - Physical rooms
//! - `customer` - Guests
//! - `travel_company` - Travel companies making blocked bookings
//! - `reservation` - Reservations with their booked-room links
//! - `billing` - Billing records
//! - `blocked_booking` - Blocked bookings with their room links
//! - `helpers` - ID generation, date shorthand and multi-entity setups

pub mod billing;
pub mod blocked_booking;
pub mod branch;
pub mod customer;
pub mod helpers;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod travel_company;

pub use billing::create_billing;
pub use branch::create_branch;
pub use customer::create_customer;
pub use reservation::create_reservation;
pub use room::create_room;
pub use room_type::create_room_type;
pub use travel_company::create_travel_company;
