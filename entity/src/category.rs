use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::deck_category::Entity")]
    DeckCategory,
}

impl Related<super::deck_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeckCategory.def()
    }
}

impl Related<super::deck::Entity> for Entity {
    fn to() -> RelationDef {
        super::deck_category::Relation::Deck.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::deck_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
