mod billing;
mod blocked_booking;
mod customer;
mod room;
