pub mod use_form;
pub mod use_ingredient_filters;
pub mod use_ingredients;
pub mod use_mutation;
pub mod use_query;
pub mod use_recipes;

pub use use_form::{FormConfig, UseFormHandle, use_form};
pub use use_ingredient_filters::{
    IngredientFiltersHandle, use_ingredient_filters,
};
pub use use_ingredients::{UseIngredientsHandle, use_ingredients};
pub use use_mutation::{UseMutationHandle, use_mutation};
pub use use_query::{UseQueryHandle, use_query};
pub use use_recipes::{UseRecipesHandle, use_recipes};
