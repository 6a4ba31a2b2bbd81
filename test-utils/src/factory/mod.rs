//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert into the
//! database; foreign key parents must already exist.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let deck = factory::deck::DeckFactory::new(db, user.id)
//!     .name("Spanish")
//!     .card_limit(Some(50))
//!     .build()
//!     .await?;
//! let card = factory::create_card(db, deck.id).await?;
//! ```

pub mod ai_job;
pub mod card;
pub mod category;
pub mod deck;
pub mod helpers;
pub mod user;

pub use ai_job::create_ai_job;
pub use card::create_card;
pub use category::create_category;
pub use deck::create_deck;
pub use user::create_user;
