use payloads::UNSPECIFIED_LOCATION;
use payloads::responses::Ingredient;
use std::collections::HashMap;

/// Ingredients bucketed by storage location, remembering the order in
/// which locations were first seen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationGroups {
    groups: HashMap<String, Vec<Ingredient>>,
    encounter_order: Vec<String>,
}

impl LocationGroups {
    pub fn get(&self, location: &str) -> Option<&[Ingredient]> {
        self.groups.get(location).map(Vec::as_slice)
    }

    pub fn keys_in_encounter_order(&self) -> &[String] {
        &self.encounter_order
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The grouping key for an ingredient: its storage location, or the
/// sentinel for a missing/empty one.
pub fn location_key(ingredient: &Ingredient) -> &str {
    match ingredient.storage_location.as_deref() {
        Some(location) if !location.is_empty() => location,
        _ => UNSPECIFIED_LOCATION,
    }
}

pub fn group_by_location(items: &[Ingredient]) -> LocationGroups {
    let mut grouped = LocationGroups::default();
    for item in items {
        let key = location_key(item);
        if !grouped.groups.contains_key(key) {
            grouped.encounter_order.push(key.to_string());
        }
        grouped
            .groups
            .entry(key.to_string())
            .or_default()
            .push(item.clone());
    }
    grouped
}

/// Location keys to render, in order: preferred keys that actually have
/// items, then any remaining present keys in encounter order. Locations
/// with nothing in them are omitted rather than rendered empty.
pub fn ordered_locations(
    grouped: &LocationGroups,
    preferred: &[&str],
) -> Vec<String> {
    let mut ordered: Vec<String> = preferred
        .iter()
        .filter(|key| grouped.get(key).is_some_and(|g| !g.is_empty()))
        .map(|key| key.to_string())
        .collect();
    ordered.extend(
        grouped
            .keys_in_encounter_order()
            .iter()
            .filter(|key| !preferred.contains(&key.as_str()))
            .cloned(),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{DEFAULT_LOCATION_ORDER, IngredientId};

    fn ing(id: i64, location: Option<&str>) -> Ingredient {
        Ingredient {
            id: IngredientId(id),
            name: format!("ingredient {id}"),
            quantity: Some(1.0),
            unit: None,
            category: None,
            storage_location: location.map(str::to_string),
            expiry_date: None,
            notes: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            is_deleted: false,
        }
    }

    #[test]
    fn groups_cover_every_item_with_the_sentinel_for_missing() {
        let items = vec![
            ing(1, Some("fridge")),
            ing(2, Some("fridge")),
            ing(3, Some("pantry")),
            ing(4, None),
        ];
        let grouped = group_by_location(&items);

        assert_eq!(grouped.get("fridge").unwrap().len(), 2);
        assert_eq!(grouped.get("pantry").unwrap().len(), 1);
        assert_eq!(grouped.get(UNSPECIFIED_LOCATION).unwrap().len(), 1);
        assert_eq!(grouped.keys_in_encounter_order().len(), 3);
    }

    #[test]
    fn empty_string_location_maps_to_the_sentinel() {
        let grouped = group_by_location(&[ing(1, Some(""))]);
        assert_eq!(grouped.get(UNSPECIFIED_LOCATION).unwrap().len(), 1);
    }

    #[test]
    fn preferred_order_is_kept_and_empty_locations_are_omitted() {
        let items = vec![
            ing(1, Some("fridge")),
            ing(2, Some("fridge")),
            ing(3, Some("pantry")),
            ing(4, None),
        ];
        let grouped = group_by_location(&items);
        let ordered = ordered_locations(
            &grouped,
            &["fridge", "pantry", UNSPECIFIED_LOCATION],
        );
        assert_eq!(ordered, vec!["fridge", "pantry", UNSPECIFIED_LOCATION]);

        // "cupboard" and "counter" have no items and never show up
        let ordered = ordered_locations(&grouped, &DEFAULT_LOCATION_ORDER);
        assert_eq!(ordered, vec!["fridge", "pantry", UNSPECIFIED_LOCATION]);
    }

    #[test]
    fn unknown_locations_follow_in_encounter_order() {
        let items = vec![
            ing(1, Some("cellar")),
            ing(2, Some("fridge")),
            ing(3, Some("garage")),
        ];
        let grouped = group_by_location(&items);
        let ordered = ordered_locations(&grouped, &DEFAULT_LOCATION_ORDER);
        assert_eq!(ordered, vec!["fridge", "cellar", "garage"]);
    }

    #[test]
    fn no_items_means_no_locations() {
        let grouped = group_by_location(&[]);
        assert!(grouped.is_empty());
        assert!(ordered_locations(&grouped, &DEFAULT_LOCATION_ORDER).is_empty());
    }
}
