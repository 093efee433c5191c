use common::Difficulty;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "problem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub difficulty: Difficulty,

    /// Sample run shown on the problem page, not used for judging.
    #[sea_orm(column_type = "Text")]
    pub example_input: String,
    #[sea_orm(column_type = "Text")]
    pub example_output: String,
    /// Language skeleton preloaded into the editor.
    #[sea_orm(column_type = "Text")]
    pub starter_code: String,

    #[sea_orm(has_many)]
    pub test_cases: HasMany<super::test_case::Entity>,

    #[sea_orm(has_many)]
    pub submissions: HasMany<super::submission::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
