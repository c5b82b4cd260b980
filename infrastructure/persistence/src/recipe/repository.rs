use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::{NewRecipe, Recipe, RecipeIngredient};
use business::domain::recipe::repository::RecipeRepository;

use super::entity::{RecipeEntity, RecipeIngredientEntity};

const RECIPE_COLUMNS: &str = "id, name, description, instructions, prep_time, cook_time, \
                              servings, difficulty, created_at, updated_at";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads the ingredient associations for the given recipes, grouped by
    /// recipe id.
    async fn load_associations(
        &self,
        recipe_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<RecipeIngredient>>, RepositoryError> {
        if recipe_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, RecipeIngredientEntity>(
            "SELECT ri.recipe_id, ri.ingredient_id, i.name AS ingredient_name,
                    ri.quantity, ri.unit, ri.is_optional, ri.note
             FROM recipe_ingredients ri
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE ri.recipe_id = ANY($1)
             ORDER BY ri.id",
        )
        .bind(recipe_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut grouped: HashMap<i64, Vec<RecipeIngredient>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.recipe_id)
                .or_default()
                .push(row.into_domain());
        }
        Ok(grouped)
    }

    async fn hydrate(
        &self,
        entities: Vec<RecipeEntity>,
    ) -> Result<Vec<Recipe>, RepositoryError> {
        let ids: Vec<i64> = entities.iter().map(|e| e.id).collect();
        let mut associations = self.load_associations(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let ingredients = associations.remove(&e.id).unwrap_or_default();
                e.into_domain(ingredients)
            })
            .collect())
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Recipe>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes WHERE is_deleted = FALSE ORDER BY name",
            RECIPE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes WHERE id = $1 AND is_deleted = FALSE",
            RECIPE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        let mut recipes = self.hydrate(vec![entity]).await?;
        recipes.pop().ok_or(RepositoryError::NotFound)
    }

    async fn get_recipes_with_ingredients(
        &self,
        ingredient_ids: &[i64],
        min_match_count: u32,
    ) -> Result<Vec<Recipe>, RepositoryError> {
        if ingredient_ids.is_empty() {
            return Ok(vec![]);
        }

        let entities = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes r
             WHERE r.is_deleted = FALSE
               AND r.id IN (
                   SELECT ri.recipe_id
                   FROM recipe_ingredients ri
                   WHERE ri.ingredient_id = ANY($1)
                   GROUP BY ri.recipe_id
                   HAVING COUNT(ri.ingredient_id) >= $2
               )
             ORDER BY r.id",
            RECIPE_COLUMNS
        ))
        .bind(ingredient_ids)
        .bind(min_match_count as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.hydrate(entities).await
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "INSERT INTO recipes (name, description, instructions, prep_time, cook_time, servings, difficulty)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            RECIPE_COLUMNS
        ))
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(&recipe.instructions)
        .bind(recipe.prep_time.map(|t| t as i32))
        .bind(recipe.cook_time.map(|t| t as i32))
        .bind(recipe.servings as i32)
        .bind(recipe.difficulty.as_ref().map(|d| d.to_string()))
        .fetch_one(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        for line in &recipe.ingredients {
            sqlx::query(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, unit, is_optional, note)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(entity.id)
            .bind(line.ingredient_id)
            .bind(line.quantity)
            .bind(&line.unit)
            .bind(line.is_optional)
            .bind(&line.note)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        self.get_by_id(entity.id).await
    }

    async fn soft_delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE recipes SET is_deleted = TRUE, updated_at = NOW() WHERE id = $1 AND is_deleted = FALSE",
        )
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
