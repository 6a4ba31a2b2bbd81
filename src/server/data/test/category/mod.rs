use crate::server::data::{category::CategoryRepository, deck_category::DeckCategoryRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod find_by_ids;
mod get_for_deck;
