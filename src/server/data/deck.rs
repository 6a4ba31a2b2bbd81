use chrono::Utc;
use migration::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::deck::{
    CreateDeckParam, Deck, DeckListParam, DeckSortField, SortOrder, UpdateDeckParam,
};

pub struct DeckRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeckRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the deck row. Category links are written separately.
    pub async fn create(&self, param: &CreateDeckParam) -> Result<Deck, DbErr> {
        let now = Utc::now();
        let model = entity::deck::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name.clone()),
            description: ActiveValue::Set(param.description.clone()),
            card_limit: ActiveValue::Set(param.card_limit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Deck::from_entity(model))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Deck>, DbErr> {
        let model = entity::prelude::Deck::find_by_id(id).one(self.db).await?;
        Ok(model.map(Deck::from_entity))
    }

    /// Gets one page of a user's decks with sorting and an any-match category filter.
    ///
    /// # Returns
    /// - `Ok((decks, total))` - Decks on the requested page and the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, param: &DeckListParam) -> Result<(Vec<Deck>, u64), DbErr> {
        let mut query =
            entity::prelude::Deck::find().filter(entity::deck::Column::UserId.eq(param.user_id));

        if !param.category_ids.is_empty() {
            query = query.filter(
                entity::deck::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::deck_category::Column::DeckId)
                        .from(entity::prelude::DeckCategory)
                        .and_where(
                            entity::deck_category::Column::CategoryId
                                .is_in(param.category_ids.iter().copied()),
                        )
                        .to_owned(),
                ),
            );
        }

        let column = match param.sort.field {
            DeckSortField::CreatedAt => entity::deck::Column::CreatedAt,
            DeckSortField::UpdatedAt => entity::deck::Column::UpdatedAt,
            DeckSortField::Name => entity::deck::Column::Name,
        };
        let order = match param.sort.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let paginator = query
            .order_by(column, order.clone())
            .order_by(entity::deck::Column::Id, order)
            .paginate(self.db, param.page.limit);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(param.page.index()).await?;

        Ok((models.into_iter().map(Deck::from_entity).collect(), total))
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(deck))` - The updated deck
    /// - `Ok(None)` - No deck with that id
    pub async fn update(&self, id: Uuid, param: &UpdateDeckParam) -> Result<Option<Deck>, DbErr> {
        let Some(model) = entity::prelude::Deck::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(name) = &param.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(description) = &param.description {
            active.description = ActiveValue::Set(description.clone());
        }
        if let Some(card_limit) = param.card_limit {
            active.card_limit = ActiveValue::Set(card_limit);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let model = active.update(self.db).await?;
        Ok(Some(Deck::from_entity(model)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Deck::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_user(&self, user_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Deck::find()
            .filter(entity::deck::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
