use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ai_job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub deck_id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub input_text: String,
    pub requested_card_count: i32,
    pub actual_card_count: Option<i32>,
    pub status: String,
    pub model: String,
    pub tokens_used: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error_message: Option<String>,
    pub started_at: Option<DateTimeUtc>,
    pub finished_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::card::Entity")]
    Card,
    #[sea_orm(has_one = "super::ai_metric::Entity")]
    AiMetric,
}

impl Related<super::deck::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deck.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl Related<super::ai_metric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiMetric.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
