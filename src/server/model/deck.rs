use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    model::deck::{CreateDeckDto, DeckDto, DeckSummaryDto, UpdateDeckDto},
    server::model::{category::Category, pagination::PageRequest},
};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_CARD_LIMIT: i32 = 1000;

/// Deck row as stored, without aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub card_limit: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    pub fn from_entity(entity: entity::deck::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            description: entity.description,
            card_limit: entity.card_limit,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Deck with its card count, as shown in the deck list.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSummary {
    pub deck: Deck,
    pub card_count: u64,
}

impl DeckSummary {
    pub fn into_dto(self) -> DeckSummaryDto {
        DeckSummaryDto {
            id: self.deck.id,
            name: self.deck.name,
            description: self.deck.description,
            card_limit: self.deck.card_limit,
            card_count: self.card_count,
            created_at: self.deck.created_at,
            updated_at: self.deck.updated_at,
        }
    }
}

/// Deck with card count and linked categories.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckDetail {
    pub deck: Deck,
    pub card_count: u64,
    pub categories: Vec<Category>,
}

impl DeckDetail {
    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            id: self.deck.id,
            name: self.deck.name,
            description: self.deck.description,
            card_limit: self.deck.card_limit,
            card_count: self.card_count,
            categories: self.categories.into_iter().map(Category::into_dto).collect(),
            created_at: self.deck.created_at,
            updated_at: self.deck.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedDecks {
    pub decks: Vec<DeckSummary>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSortField {
    CreatedAt,
    UpdatedAt,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Deck list ordering written as `field:order`, e.g. `name:asc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSort {
    pub field: DeckSortField,
    pub order: SortOrder,
}

impl Default for DeckSort {
    fn default() -> Self {
        Self {
            field: DeckSortField::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

impl FromStr for DeckSort {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (field, order) = value
            .split_once(':')
            .ok_or_else(|| format!("Invalid sort '{}', expected field:order", value))?;

        let field = match field {
            "created_at" => DeckSortField::CreatedAt,
            "updated_at" => DeckSortField::UpdatedAt,
            "name" => DeckSortField::Name,
            other => return Err(format!("Invalid sort field '{}'", other)),
        };
        let order = match order {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => return Err(format!("Invalid sort order '{}'", other)),
        };

        Ok(Self { field, order })
    }
}

/// Validated deck list query.
#[derive(Debug, Clone)]
pub struct DeckListParam {
    pub user_id: Uuid,
    pub page: PageRequest,
    pub sort: DeckSort,
    /// Decks linked to any of these categories; empty means no filter.
    pub category_ids: Vec<Uuid>,
}

/// Parses a comma-separated list of category ids, ignoring empty segments.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Vec<Uuid>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Uuid::parse_str(s).map_err(|_| format!("Invalid category id '{}'", s)))
        .collect()
}

#[derive(Debug, Clone)]
pub struct CreateDeckParam {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub card_limit: Option<i32>,
    pub category_ids: Vec<Uuid>,
}

impl CreateDeckParam {
    pub fn from_dto(user_id: Uuid, dto: CreateDeckDto) -> Result<Self, String> {
        let mut category_ids = dto.category_ids;
        category_ids.sort();
        category_ids.dedup();

        Ok(Self {
            user_id,
            name: validate_name(&dto.name)?,
            description: validate_description(dto.description)?,
            card_limit: validate_card_limit(dto.card_limit)?,
            category_ids,
        })
    }
}

/// Validated partial update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateDeckParam {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub card_limit: Option<Option<i32>>,
    pub category_ids: Option<Vec<Uuid>>,
}

impl UpdateDeckParam {
    pub fn from_dto(dto: UpdateDeckDto) -> Result<Self, String> {
        Ok(Self {
            name: dto.name.as_deref().map(validate_name).transpose()?,
            description: dto.description.map(validate_description).transpose()?,
            card_limit: dto.card_limit.map(validate_card_limit).transpose()?,
            category_ids: dto.category_ids.map(|mut ids| {
                ids.sort();
                ids.dedup();
                ids
            }),
        })
    }

    /// Whether any column of the deck row itself changes.
    pub fn touches_row(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.card_limit.is_some()
    }
}

fn validate_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Deck name is required".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!(
            "Deck name must be at most {} characters",
            MAX_NAME_LEN
        ));
    }
    Ok(name.to_string())
}

fn validate_description(raw: Option<String>) -> Result<Option<String>, String> {
    let Some(description) = raw.map(|d| d.trim().to_string()) else {
        return Ok(None);
    };
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_LEN
        ));
    }
    Ok(Some(description).filter(|d| !d.is_empty()))
}

fn validate_card_limit(raw: Option<i32>) -> Result<Option<i32>, String> {
    match raw {
        Some(limit) if !(1..=MAX_CARD_LIMIT).contains(&limit) => Err(format!(
            "Card limit must be between 1 and {}",
            MAX_CARD_LIMIT
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parses_field_and_order() {
        assert_eq!(
            "name:asc".parse::<DeckSort>().unwrap(),
            DeckSort {
                field: DeckSortField::Name,
                order: SortOrder::Asc
            }
        );
        assert!("name".parse::<DeckSort>().is_err());
        assert!("size:asc".parse::<DeckSort>().is_err());
        assert!("name:up".parse::<DeckSort>().is_err());
    }

    #[test]
    fn category_filter_skips_blank_segments() {
        let id = Uuid::new_v4();
        let raw = format!("{}, ,", id);

        assert_eq!(parse_category_filter(Some(&raw)).unwrap(), vec![id]);
        assert!(parse_category_filter(None).unwrap().is_empty());
        assert!(parse_category_filter(Some("nope")).is_err());
    }

    #[test]
    fn create_rejects_blank_name() {
        let dto = CreateDeckDto {
            name: "   ".to_string(),
            description: None,
            card_limit: None,
            category_ids: vec![],
        };

        let err = CreateDeckParam::from_dto(Uuid::new_v4(), dto).unwrap_err();
        assert_eq!(err, "Deck name is required");
    }

    #[test]
    fn create_bounds_card_limit() {
        for (limit, ok) in [(0, false), (1, true), (1000, true), (1001, false)] {
            let dto = CreateDeckDto {
                name: "Deck".to_string(),
                description: None,
                card_limit: Some(limit),
                category_ids: vec![],
            };
            assert_eq!(CreateDeckParam::from_dto(Uuid::new_v4(), dto).is_ok(), ok);
        }
    }

    #[test]
    fn update_keeps_explicit_clear() {
        let param = UpdateDeckParam::from_dto(UpdateDeckDto {
            description: Some(None),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(param.description, Some(None));
        assert!(param.touches_row());
        assert!(!UpdateDeckParam::default().touches_row());
    }
}
