use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "deck")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub card_limit: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
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
    #[sea_orm(has_many = "super::deck_category::Entity")]
    DeckCategory,
    #[sea_orm(has_many = "super::ai_job::Entity")]
    AiJob,
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

impl Related<super::deck_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeckCategory.def()
    }
}

impl Related<super::ai_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiJob.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::deck_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::deck_category::Relation::Deck.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
