use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository, error::AppError, model::category::Category,
};

pub const MAX_CATEGORY_NAME_LEN: usize = 50;

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a category with a unique, trimmed name
    pub async fn create(&self, name: &str) -> Result<Category, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Category name is required".to_string()));
        }
        if name.chars().count() > MAX_CATEGORY_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Category name must be at most {} characters",
                MAX_CATEGORY_NAME_LEN
            )));
        }

        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(name).await?.is_some() {
            return Err(AppError::BadRequest("Category already exists".to_string()));
        }

        Ok(repo.create(name).await?)
    }

    /// Inserts `names` when no category exists yet.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of categories inserted, zero if the table was not empty
    pub async fn seed_defaults(&self, names: &[&str]) -> Result<usize, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(0);
        }

        for name in names {
            repo.create(name).await?;
        }

        Ok(names.len())
    }
}
