pub use super::ai_job::Entity as AiJob;
pub use super::ai_metric::Entity as AiMetric;
pub use super::auth_session::Entity as AuthSession;
pub use super::card::Entity as Card;
pub use super::category::Entity as Category;
pub use super::deck::Entity as Deck;
pub use super::deck_category::Entity as DeckCategory;
pub use super::token_usage::Entity as TokenUsage;
pub use super::user::Entity as User;
