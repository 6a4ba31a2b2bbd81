use crate::{
    model::card::CardStatus,
    server::{
        data::card::CardRepository,
        model::card::{CardListParam, NewGeneratedCard, ReviewStamps},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_decks;
mod create_many;
mod get_paginated;
mod update_status;
