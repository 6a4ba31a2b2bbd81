use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        ai_job::AiJobRepository, ai_metric::AiMetricRepository, card::CardRepository,
        category::CategoryRepository, deck::DeckRepository,
        deck_category::DeckCategoryRepository,
    },
    error::AppError,
    model::deck::{
        CreateDeckParam, DeckDetail, DeckListParam, DeckSummary, PaginatedDecks, UpdateDeckParam,
    },
};

pub struct DeckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the user's decks, each with its card count
    pub async fn list(&self, param: DeckListParam) -> Result<PaginatedDecks, AppError> {
        let (decks, total) = DeckRepository::new(self.db).get_paginated(&param).await?;

        let ids: Vec<Uuid> = decks.iter().map(|d| d.id).collect();
        let counts = CardRepository::new(self.db).count_by_decks(&ids).await?;

        let decks = decks
            .into_iter()
            .map(|deck| DeckSummary {
                card_count: counts.get(&deck.id).copied().unwrap_or(0),
                deck,
            })
            .collect();

        Ok(PaginatedDecks { decks, total })
    }

    /// Creates a deck and its category links in one transaction.
    ///
    /// # Returns
    /// - `Ok(DeckDetail)` - The new deck with no cards
    /// - `Err(AppError::BadRequest)` - A category id does not exist
    pub async fn create(&self, param: CreateDeckParam) -> Result<DeckDetail, AppError> {
        let txn = self.db.begin().await?;

        let mut categories = CategoryRepository::new(&txn)
            .find_by_ids(&param.category_ids)
            .await?;
        if categories.len() != param.category_ids.len() {
            return Err(AppError::BadRequest("Unknown category".to_string()));
        }

        let deck = DeckRepository::new(&txn).create(&param).await?;
        DeckCategoryRepository::new(&txn)
            .attach(deck.id, &param.category_ids)
            .await?;

        txn.commit().await?;

        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(DeckDetail {
            deck,
            card_count: 0,
            categories,
        })
    }

    /// Gets a deck with its card count and categories
    pub async fn get(&self, deck_id: Uuid) -> Result<DeckDetail, AppError> {
        let deck = DeckRepository::new(self.db)
            .find_by_id(deck_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))?;

        let card_count = CardRepository::new(self.db).count_by_deck(deck_id).await?;
        let categories = CategoryRepository::new(self.db)
            .get_for_deck(deck_id)
            .await?;

        Ok(DeckDetail {
            deck,
            card_count,
            categories,
        })
    }

    /// Applies a partial update, replacing category links when given
    pub async fn update(
        &self,
        deck_id: Uuid,
        param: UpdateDeckParam,
    ) -> Result<DeckDetail, AppError> {
        let txn = self.db.begin().await?;

        if let Some(category_ids) = &param.category_ids {
            let found = CategoryRepository::new(&txn)
                .find_by_ids(category_ids)
                .await?;
            if found.len() != category_ids.len() {
                return Err(AppError::BadRequest("Unknown category".to_string()));
            }
        }

        DeckRepository::new(&txn)
            .update(deck_id, &param)
            .await?
            .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))?;

        if let Some(category_ids) = &param.category_ids {
            DeckCategoryRepository::new(&txn)
                .replace(deck_id, category_ids)
                .await?;
        }

        txn.commit().await?;

        self.get(deck_id).await
    }

    /// Deletes a deck with its cards, category links, jobs and metrics.
    ///
    /// Foreign keys cascade as well; the explicit deletes keep the operation
    /// independent of the backend's foreign key enforcement.
    pub async fn delete(&self, deck_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        AiMetricRepository::new(&txn).delete_by_deck(deck_id).await?;
        CardRepository::new(&txn).delete_by_deck(deck_id).await?;
        AiJobRepository::new(&txn).delete_by_deck(deck_id).await?;
        DeckCategoryRepository::new(&txn)
            .delete_for_deck(deck_id)
            .await?;

        let deleted = DeckRepository::new(&txn).delete(deck_id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Deck not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}
