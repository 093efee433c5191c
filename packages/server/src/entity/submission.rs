use common::{Difficulty, Language};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    /// NULL when the solved problem has since been deleted, or the
    /// submission was recorded against an ad-hoc problem.
    pub problem_id: Option<i32>,
    #[sea_orm(belongs_to, from = "problem_id", to = "id")]
    pub problem: BelongsTo<Option<super::problem::Entity>>,

    /// Denormalized so the record survives problem deletion.
    pub problem_title: String,
    pub difficulty: Difficulty,
    pub language: Language,

    pub total_cases: i32,
    pub passed_cases: i32,
    pub passed_all: bool,

    #[sea_orm(column_type = "Text")]
    pub code: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
