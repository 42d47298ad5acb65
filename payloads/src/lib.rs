use derive_more::Display;
use serde::{Deserialize, Serialize};

mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ApiError};

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
pub struct IngredientId(pub i64);

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
pub struct RecipeId(pub i64);

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct RecipeIngredientId(pub i64);

/// Grouping key used for ingredients without a storage location.
pub const UNSPECIFIED_LOCATION: &str = "unspecified";

/// Storage locations the backend knows about, in the order the storage
/// overview renders them. Ingredients may carry other free-form locations;
/// those render after these.
pub const DEFAULT_LOCATION_ORDER: [&str; 5] =
    ["fridge", "cupboard", "pantry", "counter", UNSPECIFIED_LOCATION];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Protein,
    Vegetable,
    Fruit,
    Grain,
    Dairy,
    Spice,
    Herb,
    Sauce,
    Condiment,
    FlavorEnhancer,
    OilFat,
    Sweetener,
    Liquid,
    #[default]
    Other,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 14] = [
        Self::Protein,
        Self::Vegetable,
        Self::Fruit,
        Self::Grain,
        Self::Dairy,
        Self::Spice,
        Self::Herb,
        Self::Sauce,
        Self::Condiment,
        Self::FlavorEnhancer,
        Self::OilFat,
        Self::Sweetener,
        Self::Liquid,
        Self::Other,
    ];

    /// The snake_case value sent over the wire, also used for select options.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Grain => "grain",
            Self::Dairy => "dairy",
            Self::Spice => "spice",
            Self::Herb => "herb",
            Self::Sauce => "sauce",
            Self::Condiment => "condiment",
            Self::FlavorEnhancer => "flavor_enhancer",
            Self::OilFat => "oil_fat",
            Self::Sweetener => "sweetener",
            Self::Liquid => "liquid",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}
