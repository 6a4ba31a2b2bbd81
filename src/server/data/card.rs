use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    model::card::CardStatus,
    server::model::card::{
        Card, CardListParam, CreateCardParam, NewGeneratedCard, ReviewStamps, UpdateCardParam,
    },
};

#[derive(FromQueryResult)]
struct DeckCardCount {
    deck_id: Uuid,
    card_count: i64,
}

pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a manually written card with status `pending` and no job.
    pub async fn create(&self, deck_id: Uuid, param: CreateCardParam) -> Result<Card, DbErr> {
        let now = Utc::now();
        let model = entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            deck_id: ActiveValue::Set(deck_id),
            question: ActiveValue::Set(param.question),
            answer: ActiveValue::Set(param.answer),
            status: ActiveValue::Set(CardStatus::Pending.as_str().to_string()),
            source_fragment: ActiveValue::Set(param.source_fragment),
            job_id: ActiveValue::Set(None),
            review_started_at: ActiveValue::Set(None),
            review_finished_at: ActiveValue::Set(None),
            time_spent: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Card::from_entity(model)
    }

    /// Inserts the cards produced by one generation job.
    ///
    /// Creation times are spaced one microsecond apart so the generated order survives
    /// sorting by `created_at`.
    pub async fn create_many(
        &self,
        deck_id: Uuid,
        job_id: Uuid,
        source_fragment: Option<String>,
        cards: Vec<NewGeneratedCard>,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        if cards.is_empty() {
            return Ok(0);
        }

        let count = cards.len() as u64;
        let models = cards.into_iter().enumerate().map(|(i, card)| {
            let created_at = now + Duration::microseconds(i as i64);
            entity::card::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                deck_id: ActiveValue::Set(deck_id),
                question: ActiveValue::Set(card.question),
                answer: ActiveValue::Set(card.answer),
                status: ActiveValue::Set(CardStatus::Pending.as_str().to_string()),
                source_fragment: ActiveValue::Set(source_fragment.clone()),
                job_id: ActiveValue::Set(Some(job_id)),
                review_started_at: ActiveValue::Set(None),
                review_finished_at: ActiveValue::Set(None),
                time_spent: ActiveValue::Set(None),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
            }
        });

        entity::prelude::Card::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, DbErr> {
        entity::prelude::Card::find_by_id(id)
            .one(self.db)
            .await?
            .map(Card::from_entity)
            .transpose()
    }

    /// Gets a card only if it belongs to the given deck.
    pub async fn find_in_deck(&self, deck_id: Uuid, card_id: Uuid) -> Result<Option<Card>, DbErr> {
        entity::prelude::Card::find_by_id(card_id)
            .filter(entity::card::Column::DeckId.eq(deck_id))
            .one(self.db)
            .await?
            .map(Card::from_entity)
            .transpose()
    }

    /// Gets one page of a deck's cards, newest first, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        deck_id: Uuid,
        param: &CardListParam,
    ) -> Result<(Vec<Card>, u64), DbErr> {
        let mut query =
            entity::prelude::Card::find().filter(entity::card::Column::DeckId.eq(deck_id));
        if let Some(status) = param.status {
            query = query.filter(entity::card::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::card::Column::CreatedAt)
            .order_by_desc(entity::card::Column::Id)
            .paginate(self.db, param.limit);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(param.page.saturating_sub(1)).await?;

        let cards = models
            .into_iter()
            .map(Card::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((cards, total))
    }

    /// Gets every card in a deck, oldest first.
    pub async fn get_all_by_deck(&self, deck_id: Uuid) -> Result<Vec<Card>, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::DeckId.eq(deck_id))
            .order_by_asc(entity::card::Column::CreatedAt)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Card::from_entity)
            .collect()
    }

    /// Gets the cards produced by a job, in generated order.
    pub async fn get_by_job(&self, job_id: Uuid) -> Result<Vec<Card>, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::JobId.eq(job_id))
            .order_by_asc(entity::card::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Card::from_entity)
            .collect()
    }

    pub async fn update_content(
        &self,
        card_id: Uuid,
        param: UpdateCardParam,
    ) -> Result<Option<Card>, DbErr> {
        let Some(model) = entity::prelude::Card::find_by_id(card_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(question) = param.question {
            active.question = ActiveValue::Set(question);
        }
        if let Some(answer) = param.answer {
            active.answer = ActiveValue::Set(answer);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Card::from_entity(active.update(self.db).await?).map(Some)
    }

    /// Writes a new status along with its review timestamps.
    pub async fn update_status(
        &self,
        card_id: Uuid,
        status: CardStatus,
        stamps: ReviewStamps,
        now: DateTime<Utc>,
    ) -> Result<Option<Card>, DbErr> {
        let Some(model) = entity::prelude::Card::find_by_id(card_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.review_started_at = ActiveValue::Set(stamps.review_started_at);
        active.review_finished_at = ActiveValue::Set(stamps.review_finished_at);
        active.time_spent = ActiveValue::Set(stamps.time_spent);
        active.updated_at = ActiveValue::Set(now);

        Card::from_entity(active.update(self.db).await?).map(Some)
    }

    pub async fn delete(&self, card_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Card::delete_by_id(card_id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete_by_deck(&self, deck_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Card::delete_many()
            .filter(entity::card::Column::DeckId.eq(deck_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_deck(&self, deck_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::DeckId.eq(deck_id))
            .count(self.db)
            .await
    }

    /// Counts cards for several decks in one query.
    ///
    /// Decks without cards are absent from the returned map.
    pub async fn count_by_decks(&self, deck_ids: &[Uuid]) -> Result<HashMap<Uuid, u64>, DbErr> {
        if deck_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Card::find()
            .select_only()
            .column(entity::card::Column::DeckId)
            .column_as(entity::card::Column::Id.count(), "card_count")
            .filter(entity::card::Column::DeckId.is_in(deck_ids.iter().copied()))
            .group_by(entity::card::Column::DeckId)
            .into_model::<DeckCardCount>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.deck_id, row.card_count.max(0) as u64))
            .collect())
    }
}
