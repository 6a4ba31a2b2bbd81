//! Deck factory for creating test deck entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

/// Factory for creating test decks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let deck = DeckFactory::new(&db, user.id)
///     .name("Spanish")
///     .categories(vec![category.id])
///     .build()
///     .await?;
/// ```
pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    name: String,
    description: Option<String>,
    card_limit: Option<i32>,
    created_at: DateTime<Utc>,
    category_ids: Vec<Uuid>,
}

impl<'a> DeckFactory<'a> {
    /// Creates a new DeckFactory for the given owner.
    ///
    /// Defaults:
    /// - name: `"Deck {id}"`
    /// - description: `None`
    /// - card_limit: `None`
    /// - created_at: now
    /// - no categories
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            name: format!("Deck {}", next_id()),
            description: None,
            card_limit: None,
            created_at: Utc::now(),
            category_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn card_limit(mut self, card_limit: Option<i32>) -> Self {
        self.card_limit = card_limit;
        self
    }

    /// Sets both timestamps, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Links the deck to existing categories.
    pub fn categories(mut self, category_ids: Vec<Uuid>) -> Self {
        self.category_ids = category_ids;
        self
    }

    /// Builds and inserts the deck and its category links.
    ///
    /// # Returns
    /// - `Ok(entity::deck::Model)` - Created deck entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        let deck = entity::deck::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            card_limit: ActiveValue::Set(self.card_limit),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        if !self.category_ids.is_empty() {
            entity::prelude::DeckCategory::insert_many(self.category_ids.into_iter().map(
                |category_id| entity::deck_category::ActiveModel {
                    deck_id: ActiveValue::Set(deck.id),
                    category_id: ActiveValue::Set(category_id),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(deck)
    }
}

/// Creates a deck with default values for the given owner.
pub async fn create_deck(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db, user_id).build().await
}
