use crate::server::{
    data::deck::DeckRepository,
    model::{
        deck::{DeckListParam, DeckSort, DeckSortField, SortOrder, UpdateDeckParam},
        pagination::PageRequest,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod get_paginated;
mod update;

fn list_param(user_id: Uuid, page: u64, limit: u64) -> DeckListParam {
    DeckListParam {
        user_id,
        page: PageRequest { page, limit },
        sort: DeckSort::default(),
        category_ids: Vec::new(),
    }
}
