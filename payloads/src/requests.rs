use crate::{Difficulty, IngredientCategory, IngredientId, RecipeId};
use serde::{Deserialize, Serialize};

pub const INGREDIENT_NAME_MAX_LEN: usize = 100;
pub const QUANTITY_MAX: f64 = 999_999.0;

/// Validation result for ingredient names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Empty,
    TooLong,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Name is required"),
            Self::TooLong => Some("Name too long (max 100 chars)"),
        }
    }
}

/// Validate an ingredient or recipe name.
///
/// Rules:
/// - non-empty after trimming
/// - at most 100 characters
pub fn validate_name(name: &str) -> NameValidation {
    if name.trim().is_empty() {
        return NameValidation::Empty;
    }
    if name.chars().count() > INGREDIENT_NAME_MAX_LEN {
        return NameValidation::TooLong;
    }
    NameValidation::Valid
}

/// Validation result for ingredient quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityValidation {
    Valid,
    Negative,
    TooLarge,
    NotANumber,
}

impl QuantityValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Negative => Some("Quantity cannot be negative"),
            Self::TooLarge => Some("Quantity too large"),
            Self::NotANumber => Some("Quantity must be a number"),
        }
    }
}

/// Validate a quantity. Quantities are non-negative and bounded; NaN and
/// infinities are rejected rather than sent to the backend.
pub fn validate_quantity(quantity: f64) -> QuantityValidation {
    if !quantity.is_finite() {
        return QuantityValidation::NotANumber;
    }
    if quantity < 0.0 {
        return QuantityValidation::Negative;
    }
    if quantity > QUANTITY_MAX {
        return QuantityValidation::TooLarge;
    }
    QuantityValidation::Valid
}

/// Check that an expiry date string parses as a civil date (YYYY-MM-DD).
pub fn is_valid_expiry_date(value: &str) -> bool {
    value.parse::<jiff::civil::Date>().is_ok()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub category: Option<IngredientCategory>,
    pub storage_location: Option<String>,
    pub expiry_date: Option<String>,
    pub notes: Option<String>,
}

/// Partial update; only present fields are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<IngredientCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Filters for the ingredient list endpoint. All fields are optional;
/// absent fields never appear in the query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientFilters {
    pub name_contains: Option<String>,
    pub storage_location: Option<String>,
    pub expiring_before: Option<String>,
    pub category: Option<IngredientCategory>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl IngredientFilters {
    /// Query pairs for the list request, with absent filters compacted away.
    /// The backend expects sparse filtering: an absent key is not the same
    /// as a present-but-empty one.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "name_contains", self.name_contains.clone());
        push_pair(
            &mut pairs,
            "storage_location",
            self.storage_location.clone(),
        );
        push_pair(&mut pairs, "expiring_before", self.expiring_before.clone());
        push_pair(
            &mut pairs,
            "category",
            self.category.map(|c| c.as_str().to_string()),
        );
        push_pair(&mut pairs, "page", self.page.map(|p| p.to_string()));
        push_pair(
            &mut pairs,
            "page_size",
            self.page_size.map(|p| p.to_string()),
        );
        pairs
    }
}

/// Filters for the recipe list endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeFilters {
    pub cuisine: Option<String>,
    pub max_prep_time_minutes: Option<u32>,
    pub max_cook_time_minutes: Option<u32>,
    pub name_contains: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl RecipeFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "cuisine", self.cuisine.clone());
        push_pair(
            &mut pairs,
            "max_prep_time_minutes",
            self.max_prep_time_minutes.map(|v| v.to_string()),
        );
        push_pair(
            &mut pairs,
            "max_cook_time_minutes",
            self.max_cook_time_minutes.map(|v| v.to_string()),
        );
        push_pair(&mut pairs, "name_contains", self.name_contains.clone());
        push_pair(&mut pairs, "page", self.page.map(|p| p.to_string()));
        push_pair(
            &mut pairs,
            "page_size",
            self.page_size.map(|p| p.to_string()),
        );
        pairs
    }
}

fn push_pair(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<String>,
) {
    if let Some(value) = value {
        pairs.push((key, value));
    }
}

/// A fully resolved recipe ingredient entry as sent to the backend.
/// Entries always carry a valid ingredient id; unresolved form rows are
/// resolved or dropped before one of these is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientEntry {
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    pub unit: String,
    pub is_optional: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub name: String,
    pub description: Option<String>,
    pub instructions: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub ingredients: Vec<RecipeIngredientEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<RecipeIngredientEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub available_ingredients: Vec<IngredientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_prep_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cook_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    pub max_results: u32,
}

impl Default for SuggestionRequest {
    fn default() -> Self {
        Self {
            available_ingredients: Vec::new(),
            max_prep_time: None,
            max_cook_time: None,
            difficulty: None,
            dietary_restrictions: Vec::new(),
            max_results: 5,
        }
    }
}

/// Accept a generated recipe, persisting it server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionAcceptRequest {
    pub generated_recipe: crate::responses::GeneratedRecipe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListRequest {
    pub recipe_ids: Vec<RecipeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validation() {
        assert!(validate_name("Tomatoes").is_valid());
        assert_eq!(validate_name(""), NameValidation::Empty);
        assert_eq!(validate_name("   "), NameValidation::Empty);
        assert_eq!(validate_name(&"x".repeat(101)), NameValidation::TooLong);
        assert!(validate_name(&"x".repeat(100)).is_valid());
    }

    #[test]
    fn quantity_validation() {
        assert!(validate_quantity(0.0).is_valid());
        assert!(validate_quantity(5.5).is_valid());
        assert_eq!(validate_quantity(-1.0), QuantityValidation::Negative);
        assert_eq!(validate_quantity(1_000_000.0), QuantityValidation::TooLarge);
        assert_eq!(validate_quantity(f64::NAN), QuantityValidation::NotANumber);
    }

    #[test]
    fn expiry_date_validation() {
        assert!(is_valid_expiry_date("2025-01-01"));
        assert!(!is_valid_expiry_date("not a date"));
        assert!(!is_valid_expiry_date("2025-13-01"));
    }

    // Absent filters must not appear in the query at all (sparse filtering).
    #[test]
    fn ingredient_filters_compact_absent_values() {
        let filters = IngredientFilters {
            name_contains: Some("app".to_string()),
            storage_location: None,
            page: Some(1),
            page_size: Some(100),
            ..Default::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("name_contains", "app".to_string()),
                ("page", "1".to_string()),
                ("page_size", "100".to_string()),
            ]
        );
    }

    #[test]
    fn empty_filters_produce_no_pairs() {
        assert!(IngredientFilters::default().query_pairs().is_empty());
        assert!(RecipeFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn recipe_filters_include_present_values() {
        let filters = RecipeFilters {
            cuisine: Some("italian".to_string()),
            max_prep_time_minutes: Some(30),
            ..Default::default()
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("cuisine", "italian".to_string()),
                ("max_prep_time_minutes", "30".to_string()),
            ]
        );
    }

    #[test]
    fn ingredient_patch_skips_absent_fields() {
        let patch = IngredientPatch {
            quantity: Some(2.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "quantity": 2.0 }));
    }
}
