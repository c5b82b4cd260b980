pub mod client;
pub mod recipe_completion;
