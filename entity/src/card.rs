use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub deck_id: Uuid,
    pub question: String,
    pub answer: String,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub source_fragment: Option<String>,
    pub job_id: Option<Uuid>,
    pub review_started_at: Option<DateTimeUtc>,
    pub review_finished_at: Option<DateTimeUtc>,
    pub time_spent: Option<i64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::deck::Entity",
        from = "Column::DeckId",
        to = "super::deck::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Deck,
    #[sea_orm(
        belongs_to = "super::ai_job::Entity",
        from = "Column::JobId",
        to = "super::ai_job::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    AiJob,
}

impl Related<super::deck::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deck.def()
    }
}

impl Related<super::ai_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiJob.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
