use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{api::PaginationMetaDto, category::CategoryDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeckSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub card_limit: Option<i32>,
    pub card_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeckDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub card_limit: Option<i32>,
    pub card_count: u64,
    pub categories: Vec<CategoryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedDecksDto {
    pub data: Vec<DeckSummaryDto>,
    pub meta: PaginationMetaDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateDeckDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub card_limit: Option<i32>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

/// Partial deck update.
///
/// Absent fields are left untouched. `description: null` and `card_limit: null`
/// clear the stored value, and `category_ids` replaces every category link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateDeckDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub card_limit: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Uuid>>,
}

/// Distinguishes an explicit `null` from a missing field.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_null_from_missing() {
        let missing: UpdateDeckDto = serde_json::from_str(r#"{"name":"Spanish"}"#).unwrap();
        assert_eq!(missing.name.as_deref(), Some("Spanish"));
        assert_eq!(missing.description, None);
        assert_eq!(missing.card_limit, None);

        let cleared: UpdateDeckDto =
            serde_json::from_str(r#"{"description":null,"card_limit":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert_eq!(cleared.card_limit, Some(None));
    }

    #[test]
    fn create_defaults_optional_fields() {
        let dto: CreateDeckDto = serde_json::from_str(r#"{"name":"Spanish"}"#).unwrap();
        assert!(dto.description.is_none());
        assert!(dto.card_limit.is_none());
        assert!(dto.category_ids.is_empty());
    }
}
