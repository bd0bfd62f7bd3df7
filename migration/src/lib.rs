pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_branch_table;
mod m20260101_000002_create_room_type_table;
mod m20260101_000003_create_room_table;
mod m20260101_000004_create_customer_table;
mod m20260101_000005_create_travel_company_table;
mod m20260101_000006_create_reservation_table;
mod m20260101_000007_create_booked_room_table;
mod m20260101_000008_create_billing_table;
mod m20260101_000009_create_blocked_booking_table;
mod m20260101_000010_create_blocked_booking_room_table;
mod m20260101_000011_create_reservation_payment_details_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_branch_table::Migration),
            Box::new(m20260101_000002_create_room_type_table::Migration),
            Box::new(m20260101_000003_create_room_table::Migration),
            Box::new(m20260101_000004_create_customer_table::Migration),
            Box::new(m20260101_000005_create_travel_company_table::Migration),
            Box::new(m20260101_000006_create_reservation_table::Migration),
            Box::new(m20260101_000007_create_booked_room_table::Migration),
            Box::new(m20260101_000008_create_billing_table::Migration),
            Box::new(m20260101_000009_create_blocked_booking_table::Migration),
            Box::new(m20260101_000010_create_blocked_booking_room_table::Migration),
            Box::new(m20260101_000011_create_reservation_payment_details_table::Migration),
        ]
    }
}
