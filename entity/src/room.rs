use super::sea_orm_active_enums::RoomStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_number: String,
    pub room_type_id: i32,
    pub branch_id: i32,
    pub status: RoomStatus,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price_per_night: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
    #[sea_orm(has_many = "super::booked_room::Entity")]
    BookedRoom,
    #[sea_orm(has_many = "super::blocked_booking_room::Entity")]
    BlockedBookingRoom,
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

impl Related<super::booked_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedRoom.def()
    }
}

impl Related<super::blocked_booking_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlockedBookingRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
