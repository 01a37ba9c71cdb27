use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: i64,
    pub imdb_id: String,
    pub title: String,
    pub overview: Option<String>,
    /// JSON-encoded list of company objects, as shipped in the source data set.
    pub production_companies: Option<String>,
    /// ISO-ish "YYYY-MM-DD" date string.
    pub release_date: Option<String>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub runtime: Option<i64>,
    pub language: Option<String>,
    /// JSON-encoded list of {name} objects or plain strings, or a delimited string.
    pub genres: Option<String>,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
