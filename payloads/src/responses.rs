use crate::{
    Difficulty, IngredientCategory, IngredientId, RecipeId,
    RecipeIngredientId,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// An ingredient as returned by the backend.
///
/// `quantity` may arrive as a JSON number or as a decimal string (the
/// backend stores decimals); both decode to `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<IngredientCategory>,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Ingredient {
    /// Expiry date parsed as a civil date, if present and well-formed.
    pub fn expiry(&self) -> Option<jiff::civil::Date> {
        self.expiry_date.as_deref()?.parse().ok()
    }
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Ingredient list responses come in two forms depending on the backend
/// version: a bare array, or a page envelope. Both decode here and callers
/// normalize via [`IngredientListResponse::into_page`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IngredientListResponse {
    Paged(IngredientPage),
    Plain(Vec<Ingredient>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IngredientPage {
    pub items: Vec<Ingredient>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_next: bool,
}

impl IngredientListResponse {
    /// Normalize to a page; the bare-array form is a single page with no
    /// further results.
    pub fn into_page(self) -> IngredientPage {
        match self {
            Self::Paged(page) => page,
            Self::Plain(items) => IngredientPage {
                total: items.len() as u64,
                page: 1,
                page_size: items.len().max(1) as u32,
                has_next: false,
                items,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub instructions: String,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub total_time: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: RecipeIngredientId,
    pub ingredient_id: IngredientId,
    pub ingredient_name: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<f64>,
    pub unit: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// A recipe with its ingredient list, as returned by the detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
}

impl std::ops::Deref for RecipeDetail {
    type Target = Recipe;

    fn deref(&self) -> &Self::Target {
        &self.recipe
    }
}

/// Recipe lists are always enveloped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeListResponse {
    pub items: Vec<Recipe>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_next: bool,
}

/// Body of a successful recipe delete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipeIngredient {
    pub ingredient_id: IngredientId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A recipe produced by the suggestion backend. Not persisted until
/// explicitly accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ingredients: Vec<GeneratedRecipeIngredient>,
    pub instructions: String,
    #[serde(default)]
    pub prep_time_minutes: Option<u32>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
}

/// One suggestion: either a reference to an existing recipe or a full
/// generated recipe carried inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    #[serde(default)]
    pub recipe_id: Option<RecipeId>,
    pub recipe_name: String,
    pub match_score: f64,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
    #[serde(default)]
    pub matched_ingredients: Vec<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub generated_recipe: Option<GeneratedRecipe>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<RecipeSuggestion>,
    pub source: String,
    #[serde(default)]
    pub cache_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShoppingListItem {
    pub ingredient_name: String,
    pub total_quantity: f64,
    pub unit: String,
    pub storage_location: String,
    #[serde(default)]
    pub recipes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShoppingListResponse {
    pub items_by_location: HashMap<String, Vec<ShoppingListItem>>,
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient_json(quantity: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "name": "Tomatoes",
            "quantity": quantity,
            "unit": "pieces",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "is_deleted": false
        })
    }

    #[test]
    fn quantity_decodes_from_number() {
        let ing: Ingredient =
            serde_json::from_value(ingredient_json(serde_json::json!(5)))
                .unwrap();
        assert_eq!(ing.quantity, Some(5.0));
    }

    #[test]
    fn quantity_decodes_from_string() {
        let ing: Ingredient =
            serde_json::from_value(ingredient_json(serde_json::json!("5.50")))
                .unwrap();
        assert_eq!(ing.quantity, Some(5.5));
    }

    #[test]
    fn quantity_decodes_from_null_or_absent() {
        let ing: Ingredient =
            serde_json::from_value(ingredient_json(serde_json::Value::Null))
                .unwrap();
        assert_eq!(ing.quantity, None);

        let mut value = ingredient_json(serde_json::Value::Null);
        value.as_object_mut().unwrap().remove("quantity");
        let ing: Ingredient = serde_json::from_value(value).unwrap();
        assert_eq!(ing.quantity, None);
    }

    #[test]
    fn expiry_parses_civil_date() {
        let mut value = ingredient_json(serde_json::json!(1));
        value
            .as_object_mut()
            .unwrap()
            .insert("expiry_date".into(), serde_json::json!("2025-06-01"));
        let ing: Ingredient = serde_json::from_value(value).unwrap();
        assert_eq!(ing.expiry(), Some(jiff::civil::date(2025, 6, 1)));
    }

    #[test]
    fn ingredient_list_decodes_bare_array() {
        let value = serde_json::json!([ingredient_json(serde_json::json!(2))]);
        let list: IngredientListResponse =
            serde_json::from_value(value).unwrap();
        let page = list.into_page();
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_next);
    }

    #[test]
    fn ingredient_list_decodes_envelope() {
        let value = serde_json::json!({
            "items": [ingredient_json(serde_json::json!(2))],
            "total": 42,
            "page": 1,
            "page_size": 1,
            "has_next": true
        });
        let list: IngredientListResponse =
            serde_json::from_value(value).unwrap();
        let page = list.into_page();
        assert_eq!(page.total, 42);
        assert!(page.has_next);
    }

    #[test]
    fn recipe_detail_flattens_recipe_fields() {
        let value = serde_json::json!({
            "id": 7,
            "name": "Carbonara",
            "instructions": "Boil pasta.",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z",
            "ingredients": [{
                "id": 1,
                "ingredient_id": 3,
                "ingredient_name": "Eggs",
                "quantity": "4",
                "unit": "pieces"
            }],
            "missing_ingredients": ["guanciale"]
        });
        let detail: RecipeDetail = serde_json::from_value(value).unwrap();
        assert_eq!(detail.name, "Carbonara");
        assert_eq!(detail.ingredients[0].quantity, Some(4.0));
        assert_eq!(detail.missing_ingredients, vec!["guanciale"]);
    }
}
