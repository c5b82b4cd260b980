use std::sync::Arc;

use logger::TracingLogger;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;

use openai::client::OpenAIClient;
use openai::recipe_completion::RecipeCompletionOpenAI;

use business::application::ingredient::create::CreateIngredientUseCaseImpl;
use business::application::ingredient::delete::DeleteIngredientUseCaseImpl;
use business::application::ingredient::get_all::GetAllIngredientsUseCaseImpl;
use business::application::ingredient::get_by_id::GetIngredientByIdUseCaseImpl;
use business::application::ingredient::update::UpdateIngredientUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::get_all::GetAllRecipesUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::suggestion::accept::AcceptSuggestionUseCaseImpl;
use business::application::suggestion::get_suggestions::GetSuggestionsUseCaseImpl;
use business::application::suggestion::heuristic::HeuristicMatcher;
use business::application::suggestion::synthesize::RecipeSynthesizer;
use business::domain::clock::SystemClock;
use business::domain::suggestion::cache::SuggestionCache;

use crate::config::openai_config::OpenAIConfig;
use crate::config::suggestion_config::SuggestionConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub ingredient_api: crate::api::ingredient::routes::IngredientApi,
    pub recipe_api: crate::api::recipe::routes::RecipeApi,
    pub suggestion_api: crate::api::suggestion::routes::SuggestionApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env();
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let recipe_completion = Arc::new(RecipeCompletionOpenAI::new(
            openai_client,
            openai_config.model,
        ));

        let suggestion_config = SuggestionConfig::from_env();
        let cache = Arc::new(SuggestionCache::new(
            suggestion_config.cache_config(),
            Arc::new(SystemClock),
        ));

        // Ingredient use cases
        let create_ingredient_use_case = Arc::new(CreateIngredientUseCaseImpl {
            repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_ingredients_use_case = Arc::new(GetAllIngredientsUseCaseImpl {
            repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let get_ingredient_by_id_use_case = Arc::new(GetIngredientByIdUseCaseImpl {
            repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let update_ingredient_use_case = Arc::new(UpdateIngredientUseCaseImpl {
            repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let delete_ingredient_use_case = Arc::new(DeleteIngredientUseCaseImpl {
            repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });

        // Recipe use cases
        let create_recipe_use_case = Arc::new(CreateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            ingredient_repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_recipes_use_case = Arc::new(GetAllRecipesUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_recipe_by_id_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let delete_recipe_use_case = Arc::new(DeleteRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });

        // Suggestion use cases
        let matcher = HeuristicMatcher {
            recipe_repository: recipe_repository.clone(),
            ingredient_repository: ingredient_repository.clone(),
            logger: logger.clone(),
        };
        let synthesizer = RecipeSynthesizer {
            ingredient_repository,
            completion: recipe_completion,
            logger: logger.clone(),
        };
        let get_suggestions_use_case = Arc::new(GetSuggestionsUseCaseImpl {
            matcher,
            synthesizer,
            cache,
            logger: logger.clone(),
        });
        let accept_suggestion_use_case = Arc::new(AcceptSuggestionUseCaseImpl {
            recipe_repository,
            logger,
        });

        let ingredient_api = crate::api::ingredient::routes::IngredientApi::new(
            create_ingredient_use_case,
            get_all_ingredients_use_case,
            get_ingredient_by_id_use_case,
            update_ingredient_use_case,
            delete_ingredient_use_case,
        );

        let recipe_api = crate::api::recipe::routes::RecipeApi::new(
            create_recipe_use_case,
            get_all_recipes_use_case,
            get_recipe_by_id_use_case,
            delete_recipe_use_case,
        );

        let suggestion_api = crate::api::suggestion::routes::SuggestionApi::new(
            get_suggestions_use_case,
            accept_suggestion_use_case,
        );

        Ok(Self {
            health_api,
            ingredient_api,
            recipe_api,
            suggestion_api,
        })
    }
}
