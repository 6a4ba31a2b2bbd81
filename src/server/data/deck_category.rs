use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Links between decks and categories.
pub struct DeckCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeckCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a deck to each of the given categories.
    pub async fn attach(&self, deck_id: Uuid, category_ids: &[Uuid]) -> Result<(), DbErr> {
        if category_ids.is_empty() {
            return Ok(());
        }

        let links = category_ids
            .iter()
            .map(|category_id| entity::deck_category::ActiveModel {
                deck_id: ActiveValue::Set(deck_id),
                category_id: ActiveValue::Set(*category_id),
            });

        entity::prelude::DeckCategory::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Replaces every category link of a deck.
    pub async fn replace(&self, deck_id: Uuid, category_ids: &[Uuid]) -> Result<(), DbErr> {
        self.delete_for_deck(deck_id).await?;
        self.attach(deck_id, category_ids).await
    }

    pub async fn delete_for_deck(&self, deck_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::DeckCategory::delete_many()
            .filter(entity::deck_category::Column::DeckId.eq(deck_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
