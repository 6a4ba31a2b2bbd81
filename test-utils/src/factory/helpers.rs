//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a deck owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, deck))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_deck_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::deck::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let deck = crate::factory::deck::create_deck(db, user.id).await?;

    Ok((user, deck))
}

/// Creates a user, a deck and `count` pending cards in that deck.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of cards to create
///
/// # Returns
/// - `Ok((user, deck, cards))` - The created entities, cards in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_deck_with_cards(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::user::Model,
        entity::deck::Model,
        Vec<entity::card::Model>,
    ),
    DbErr,
> {
    let (user, deck) = create_deck_with_owner(db).await?;

    let mut cards = Vec::with_capacity(count);
    for _ in 0..count {
        cards.push(crate::factory::card::create_card(db, deck.id).await?);
    }

    Ok((user, deck, cards))
}
