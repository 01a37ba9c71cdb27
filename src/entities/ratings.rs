use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rating_id: i64,
    pub user_id: i64,
    /// Logical foreign key into the movies table; not enforced, the two
    /// tables live in separate database files.
    pub movie_id: i64,
    pub rating: i64,
    /// Unix seconds.
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
