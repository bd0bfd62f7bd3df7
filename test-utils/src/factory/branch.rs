//! Branch factory for creating test branch entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test branches with customizable fields.
pub struct BranchFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
}

impl<'a> BranchFactory<'a> {
    /// Creates a new BranchFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Branch {id}"` where id is auto-incremented
    /// - address: `Some("1 Harbour Road")`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Branch {}", id),
            address: Some("1 Harbour Road".to_string()),
        }
    }

    /// Sets the branch name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the branch address.
    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    /// Builds and inserts the branch entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::branch::Model)` - Created branch entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::branch::Model, DbErr> {
        entity::branch::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a branch with default values.
pub async fn create_branch(db: &DatabaseConnection) -> Result<entity::branch::Model, DbErr> {
    BranchFactory::new(db).build().await
}
