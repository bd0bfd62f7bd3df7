use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "blocked_booking_room")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub blocked_booking_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blocked_booking::Entity",
        from = "Column::BlockedBookingId",
        to = "super::blocked_booking::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BlockedBooking,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Room,
}

impl Related<super::blocked_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlockedBooking.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
