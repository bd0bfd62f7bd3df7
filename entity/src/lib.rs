//! SeaORM entities for the hotel reservation store.

pub mod prelude;

pub mod billing;
pub mod booked_room;
pub mod branch;
pub mod blocked_booking;
pub mod blocked_booking_room;
pub mod customer;
pub mod reservation;
pub mod reservation_payment_details;
pub mod room;
pub mod room_type;
pub mod sea_orm_active_enums;
pub mod travel_company;
