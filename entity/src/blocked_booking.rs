use super::sea_orm_active_enums::BillingStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "blocked_booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub branch_id: i32,
    pub room_type_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub number_of_rooms: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub room_charge: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub discount_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub tax_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_amount: Decimal,
    pub billing_status: BillingStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::travel_company::Entity",
        from = "Column::CompanyId",
        to = "super::travel_company::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TravelCompany,
    #[sea_orm(
        belongs_to = "super::branch::Entity",
        from = "Column::BranchId",
        to = "super::branch::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Branch,
    #[sea_orm(
        belongs_to = "super::room_type::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    RoomType,
    #[sea_orm(has_many = "super::blocked_booking_room::Entity")]
    BlockedBookingRoom,
}

impl Related<super::travel_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TravelCompany.def()
    }
}

impl Related<super::branch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl Related<super::blocked_booking_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlockedBookingRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
