use entity::sea_orm_active_enums::RoomStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::room::Room;

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets rooms by ID, ordered by ID.
    ///
    /// Unknown IDs are silently skipped; callers compare lengths to detect them. With `lock`
    /// set, the rows are selected `FOR UPDATE` where the backend supports row locks.
    pub async fn get_by_ids(&self, ids: &[i32], lock: bool) -> Result<Vec<Room>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::room::Column::Id);

        if lock {
            query = query.lock_exclusive();
        }

        let rooms = query.all(self.db).await?;

        self.with_rates(rooms).await
    }

    /// Gets the candidate pool for a booking: `Available` rooms of one type in one branch.
    ///
    /// Ordered by ascending ID so selection is stable. With `lock` set, the rows are
    /// selected `FOR UPDATE` on backends that support row locks, which holds them until the
    /// surrounding transaction ends.
    ///
    /// # Arguments
    /// - `branch_id` - Branch to search
    /// - `room_type_id` - Room type to search
    /// - `lock` - Whether to lock the candidate rows
    pub async fn get_candidates(
        &self,
        branch_id: i32,
        room_type_id: i32,
        lock: bool,
    ) -> Result<Vec<Room>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::BranchId.eq(branch_id))
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .filter(entity::room::Column::Status.eq(RoomStatus::Available))
            .order_by_asc(entity::room::Column::Id);

        if lock {
            query = query.lock_exclusive();
        }

        let rooms = query.all(self.db).await?;

        self.with_rates(rooms).await
    }

    /// Gets every `Available` room of a branch, ordered by ID.
    pub async fn get_available_in_branch(&self, branch_id: i32) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::BranchId.eq(branch_id))
            .filter(entity::room::Column::Status.eq(RoomStatus::Available))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        self.with_rates(rooms).await
    }

    /// Counts rooms, optionally restricted to a branch and/or a room type.
    pub async fn count(
        &self,
        branch_id: Option<i32>,
        room_type_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Room::find();

        if let Some(branch_id) = branch_id {
            query = query.filter(entity::room::Column::BranchId.eq(branch_id));
        }
        if let Some(room_type_id) = room_type_id {
            query = query.filter(entity::room::Column::RoomTypeId.eq(room_type_id));
        }

        query.count(self.db).await
    }

    /// Sets the status of every listed room.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rooms updated
    /// - `Err(DbErr)` - Database error
    pub async fn set_status(&self, ids: &[i32], status: RoomStatus) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Room::update_many()
            .set(entity::room::ActiveModel {
                status: ActiveValue::Set(status),
                ..Default::default()
            })
            .filter(entity::room::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Resolves nightly rates by loading the room types of `rooms`.
    async fn with_rates(&self, rooms: Vec<entity::room::Model>) -> Result<Vec<Room>, DbErr> {
        let mut type_ids: Vec<i32> = rooms.iter().map(|r| r.room_type_id).collect();
        type_ids.sort_unstable();
        type_ids.dedup();

        let room_types: HashMap<i32, entity::room_type::Model> = if type_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::RoomType::find()
                .filter(entity::room_type::Column::Id.is_in(type_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|rt| (rt.id, rt))
                .collect()
        };

        Ok(rooms
            .into_iter()
            .map(|room| {
                let room_type = room_types.get(&room.room_type_id);
                Room::from_entity(room, room_type)
            })
            .collect())
    }
}
