pub mod api;
pub mod blocked_booking;
pub mod report;
pub mod reservation;
