use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use business::domain::recipe::model::Difficulty;
use business::domain::suggestion::model::{
    GeneratedRecipe, GeneratedRecipeIngredient, UNRESOLVED_INGREDIENT_ID,
};
use business::domain::suggestion::services::{CompletionError, RecipeCompletionService};

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are a recipe generator for a pantry management app.
You receive the ingredients a user has on hand plus optional constraints, and you invent realistic recipes from them.

Core principles:
- Only propose dishes a home cook can actually make
- Use sensible quantities and units
- Honor every constraint you are given (time limits, difficulty, dietary restrictions)
- Return ONLY a valid JSON array, no additional text"#;

pub struct RecipeCompletionOpenAI {
    client: OpenAIClient,
    model: String,
}

impl RecipeCompletionOpenAI {
    pub fn new(client: OpenAIClient, model: String) -> Self {
        Self { client, model }
    }

    fn build_user_prompt(instructions: &str, context: &Value, n: usize) -> String {
        format!(
            r#"{}

CONTEXT:
{}

Return a JSON array with exactly {} recipe object(s), each with this EXACT structure:
[
  {{
    "name": "Recipe name",
    "description": "One-sentence description",
    "instructions": "Numbered cooking steps as a single string",
    "ingredients": [
      {{"name": "Ingredient name", "quantity": 100.0, "unit": "g"}}
    ],
    "prep_time_minutes": 10,
    "cook_time_minutes": 20,
    "servings": 2,
    "difficulty": "easy" | "medium" | "hard"
  }}
]"#,
            instructions, context, n
        )
    }

    /// Parses and validates the model output. Untrusted content: anything
    /// that fails structural validation is rejected rather than repaired.
    fn parse_response(content: &str) -> Result<Vec<GeneratedRecipe>, CompletionError> {
        // Remove markdown code blocks if present
        let mut json_text = content.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        let payloads: Vec<RecipePayload> = serde_json::from_str(&json_text)
            .map_err(|e| CompletionError(format!("malformed completion payload: {}", e)))?;

        payloads.into_iter().map(|p| p.into_domain()).collect()
    }
}

#[derive(Debug, Deserialize)]
struct IngredientPayload {
    name: String,
    quantity: f64,
    #[serde(default)]
    unit: String,
}

#[derive(Debug, Deserialize)]
struct RecipePayload {
    name: String,
    description: Option<String>,
    instructions: String,
    ingredients: Vec<IngredientPayload>,
    prep_time_minutes: Option<u32>,
    cook_time_minutes: Option<u32>,
    servings: Option<u32>,
    difficulty: Option<String>,
}

impl RecipePayload {
    fn into_domain(self) -> Result<GeneratedRecipe, CompletionError> {
        let ingredients = self
            .ingredients
            .into_iter()
            .map(|i| GeneratedRecipeIngredient {
                ingredient_id: UNRESOLVED_INGREDIENT_ID,
                name: i.name,
                quantity: i.quantity,
                unit: i.unit,
            })
            .collect();

        GeneratedRecipe::new(
            self.name,
            self.description,
            self.instructions,
            ingredients,
            self.prep_time_minutes,
            self.cook_time_minutes,
            self.servings,
            self.difficulty.and_then(|d| d.parse::<Difficulty>().ok()),
        )
        .map_err(|e| CompletionError(format!("invalid candidate: {}", e)))
    }
}

#[async_trait]
impl RecipeCompletionService for RecipeCompletionOpenAI {
    async fn complete(
        &self,
        instructions: &str,
        context: &Value,
        n: usize,
    ) -> Result<Vec<GeneratedRecipe>, CompletionError> {
        let prompt = Self::build_user_prompt(instructions, context, n);

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.7,
            "max_tokens": 2000,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CompletionError(format!(
                "completion endpoint returned status {}",
                response.status()
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| CompletionError(format!("unreadable response body: {}", e)))?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| CompletionError("response carries no completion choice".to_string()))?;

        Self::parse_response(content)
    }
}
