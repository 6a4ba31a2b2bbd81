use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::card::CardStatus,
    server::{
        data::card::CardRepository,
        error::AppError,
        model::card::{
            Card, CardListParam, CreateCardParam, PaginatedCards, ReviewStamps, UpdateCardParam,
        },
    },
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of a deck's cards, newest first
    pub async fn list(
        &self,
        deck_id: Uuid,
        param: CardListParam,
    ) -> Result<PaginatedCards, AppError> {
        let (cards, total) = CardRepository::new(self.db)
            .get_paginated(deck_id, &param)
            .await?;

        Ok(PaginatedCards { cards, total })
    }

    /// Creates a manual card in `pending` status
    pub async fn create(&self, deck_id: Uuid, param: CreateCardParam) -> Result<Card, AppError> {
        Ok(CardRepository::new(self.db).create(deck_id, param).await?)
    }

    /// Changes a card's question and/or answer
    pub async fn update(
        &self,
        deck_id: Uuid,
        card_id: Uuid,
        param: UpdateCardParam,
    ) -> Result<Card, AppError> {
        let repo = CardRepository::new(self.db);

        repo.find_in_deck(deck_id, card_id)
            .await?
            .ok_or_else(card_not_found)?;

        repo.update_content(card_id, param)
            .await?
            .ok_or_else(card_not_found)
    }

    pub async fn delete(&self, deck_id: Uuid, card_id: Uuid) -> Result<(), AppError> {
        let repo = CardRepository::new(self.db);

        repo.find_in_deck(deck_id, card_id)
            .await?
            .ok_or_else(card_not_found)?;

        repo.delete(card_id).await?;

        Ok(())
    }

    /// Moves a card to `status`, stamping review times.
    ///
    /// Accepting or rejecting finishes the review and records the time spent.
    /// Returning to pending clears the finish time.
    pub async fn update_status(&self, card_id: Uuid, status: CardStatus) -> Result<Card, AppError> {
        let repo = CardRepository::new(self.db);

        let card = repo.find_by_id(card_id).await?.ok_or_else(card_not_found)?;

        let now = Utc::now();
        let stamps = ReviewStamps::for_transition(status, card.review_started_at, now);

        repo.update_status(card_id, status, stamps, now)
            .await?
            .ok_or_else(card_not_found)
    }

    /// Gets every card of a deck in review order.
    ///
    /// Pending cards come first, then rejected, then accepted. Each group keeps
    /// creation order.
    pub async fn study(&self, deck_id: Uuid) -> Result<Vec<Card>, AppError> {
        let mut cards = CardRepository::new(self.db).get_all_by_deck(deck_id).await?;

        cards.sort_by_key(|card| study_rank(card.status));

        Ok(cards)
    }
}

fn study_rank(status: CardStatus) -> u8 {
    match status {
        CardStatus::Pending => 0,
        CardStatus::Rejected => 1,
        CardStatus::Accepted => 2,
    }
}

fn card_not_found() -> AppError {
    AppError::NotFound("Card not found".to_string())
}
