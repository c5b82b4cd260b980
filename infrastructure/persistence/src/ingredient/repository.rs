use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::{Ingredient, NewIngredient};
use business::domain::ingredient::repository::IngredientRepository;

use super::entity::IngredientEntity;

const COLUMNS: &str =
    "id, name, storage_location, quantity, unit, expiry_date, created_at, updated_at";

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {} FROM ingredients WHERE is_deleted = FALSE ORDER BY name",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {} FROM ingredients WHERE id = $1 AND is_deleted = FALSE",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {} FROM ingredients WHERE id = ANY($1) AND is_deleted = FALSE",
            COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Ingredient>, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {} FROM ingredients WHERE LOWER(name) = LOWER($1) AND is_deleted = FALSE",
            COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(&format!(
            "INSERT INTO ingredients (name, storage_location, quantity, unit, expiry_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            COLUMNS
        ))
        .bind(&ingredient.name)
        .bind(ingredient.storage_location.to_string())
        .bind(ingredient.quantity)
        .bind(&ingredient.unit)
        .bind(ingredient.expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(entity.into_domain())
    }

    async fn update(&self, ingredient: &Ingredient) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE ingredients
             SET name = $2, storage_location = $3, quantity = $4, unit = $5,
                 expiry_date = $6, updated_at = $7
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(ingredient.id)
        .bind(&ingredient.name)
        .bind(ingredient.storage_location.to_string())
        .bind(ingredient.quantity)
        .bind(&ingredient.unit)
        .bind(ingredient.expiry_date)
        .bind(ingredient.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE ingredients SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1 AND is_deleted = FALSE")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
