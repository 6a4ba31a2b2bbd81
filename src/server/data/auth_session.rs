use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

/// Hashed token pair with expiry times, as written for a new or rotated session.
pub struct SessionHashes {
    pub access_token_hash: String,
    pub refresh_token_hash: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

pub struct AuthSessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthSessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        hashes: SessionHashes,
    ) -> Result<entity::auth_session::Model, DbErr> {
        entity::auth_session::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            access_token_hash: ActiveValue::Set(hashes.access_token_hash),
            refresh_token_hash: ActiveValue::Set(hashes.refresh_token_hash),
            access_expires_at: ActiveValue::Set(hashes.access_expires_at),
            refresh_expires_at: ActiveValue::Set(hashes.refresh_expires_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_access_hash(
        &self,
        hash: &str,
    ) -> Result<Option<entity::auth_session::Model>, DbErr> {
        entity::prelude::AuthSession::find()
            .filter(entity::auth_session::Column::AccessTokenHash.eq(hash))
            .one(self.db)
            .await
    }

    pub async fn find_by_refresh_hash(
        &self,
        hash: &str,
    ) -> Result<Option<entity::auth_session::Model>, DbErr> {
        entity::prelude::AuthSession::find()
            .filter(entity::auth_session::Column::RefreshTokenHash.eq(hash))
            .one(self.db)
            .await
    }

    /// Replaces both tokens of an existing session.
    ///
    /// The previous tokens stop resolving as soon as this returns.
    pub async fn rotate(
        &self,
        session: entity::auth_session::Model,
        hashes: SessionHashes,
    ) -> Result<entity::auth_session::Model, DbErr> {
        let mut active = session.into_active_model();
        active.access_token_hash = ActiveValue::Set(hashes.access_token_hash);
        active.refresh_token_hash = ActiveValue::Set(hashes.refresh_token_hash);
        active.access_expires_at = ActiveValue::Set(hashes.access_expires_at);
        active.refresh_expires_at = ActiveValue::Set(hashes.refresh_expires_at);
        active.update(self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthSession::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Removes sessions whose refresh token expired before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthSession::delete_many()
            .filter(entity::auth_session::Column::RefreshExpiresAt.lt(now))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
