pub use super::billing::Entity as Billing;
pub use super::blocked_booking::Entity as BlockedBooking;
pub use super::blocked_booking_room::Entity as BlockedBookingRoom;
pub use super::booked_room::Entity as BookedRoom;
pub use super::branch::Entity as Branch;
pub use super::customer::Entity as Customer;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_payment_details::Entity as ReservationPaymentDetails;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::travel_company::Entity as TravelCompany;
