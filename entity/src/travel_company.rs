use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "travel_company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
    pub contact_person: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    /// Percentage (0-100) taken off the room charge of the company's blocked bookings.
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub discount_rate: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blocked_booking::Entity")]
    BlockedBooking,
}

impl Related<super::blocked_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlockedBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
