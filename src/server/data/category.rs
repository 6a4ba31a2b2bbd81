use migration::Query;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::category::Category;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<Category, DbErr> {
        let model = entity::category::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(model))
    }

    /// Gets all categories ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let models = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Category::from_entity).collect())
    }

    /// Gets the categories among `ids` that exist.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Category>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Category::from_entity).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let model = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(model.map(Category::from_entity))
    }

    /// Gets the categories linked to a deck, ordered by name.
    pub async fn get_for_deck(&self, deck_id: Uuid) -> Result<Vec<Category>, DbErr> {
        let models = entity::prelude::Category::find()
            .filter(
                entity::category::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::deck_category::Column::CategoryId)
                        .from(entity::prelude::DeckCategory)
                        .and_where(entity::deck_category::Column::DeckId.eq(deck_id))
                        .to_owned(),
                ),
            )
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Category::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Category::find().count(self.db).await
    }
}
