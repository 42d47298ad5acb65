use payloads::responses::Ingredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Quantity,
    StorageLocation,
    ExpiryDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// The header-click cycle: a fresh column starts ascending, a second click
/// flips to descending, a third clears the sort entirely.
pub fn next_sort(
    current: Option<(SortColumn, SortDirection)>,
    clicked: SortColumn,
) -> Option<(SortColumn, SortDirection)> {
    match current {
        Some((column, SortDirection::Asc)) if column == clicked => {
            Some((clicked, SortDirection::Desc))
        }
        Some((column, SortDirection::Desc)) if column == clicked => None,
        _ => Some((clicked, SortDirection::Asc)),
    }
}

/// Sort ingredients by a column without mutating the input.
///
/// No column means no reordering. String columns compare
/// case-insensitively, with a missing storage location as the empty string.
/// Quantity compares numerically; a missing quantity compares as zero, so
/// "none on hand" and "no quantity recorded" are deliberately
/// indistinguishable in sort order. A missing or unparseable expiry date
/// sorts before every real date. Ties keep their input order, and
/// descending is exactly the reversed comparator.
pub fn sort_ingredients(
    items: &[Ingredient],
    column: Option<SortColumn>,
    direction: SortDirection,
) -> Vec<Ingredient> {
    let Some(column) = column else {
        return items.to_vec();
    };

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => {
                a.name.to_lowercase().cmp(&b.name.to_lowercase())
            }
            SortColumn::Quantity => a
                .quantity
                .unwrap_or(0.0)
                .total_cmp(&b.quantity.unwrap_or(0.0)),
            SortColumn::StorageLocation => location_key(a).cmp(&location_key(b)),
            SortColumn::ExpiryDate => a.expiry().cmp(&b.expiry()),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn location_key(ingredient: &Ingredient) -> String {
    ingredient
        .storage_location
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::IngredientId;

    fn ing(
        id: i64,
        name: &str,
        quantity: Option<f64>,
        location: Option<&str>,
        expiry: Option<&str>,
    ) -> Ingredient {
        Ingredient {
            id: IngredientId(id),
            name: name.to_string(),
            quantity,
            unit: None,
            category: None,
            storage_location: location.map(str::to_string),
            expiry_date: expiry.map(str::to_string),
            notes: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            is_deleted: false,
        }
    }

    fn ids(items: &[Ingredient]) -> Vec<i64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn no_column_returns_input_order() {
        let items = vec![
            ing(1, "b", None, None, None),
            ing(2, "a", None, None, None),
        ];
        let sorted = sort_ingredients(&items, None, SortDirection::Asc);
        assert_eq!(ids(&sorted), ids(&items));
    }

    #[test]
    fn quantity_sorts_numerically_both_directions() {
        let items = vec![
            ing(1, "a", Some(5.0), None, None),
            ing(2, "b", Some(1.0), None, None),
            ing(3, "c", Some(3.0), None, None),
        ];
        let asc = sort_ingredients(
            &items,
            Some(SortColumn::Quantity),
            SortDirection::Asc,
        );
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        let desc = sort_ingredients(
            &items,
            Some(SortColumn::Quantity),
            SortDirection::Desc,
        );
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn sorting_is_idempotent_and_does_not_mutate_input() {
        let items = vec![
            ing(1, "Cherries", Some(2.0), None, None),
            ing(2, "apples", Some(2.0), None, None),
            ing(3, "Bananas", Some(1.0), None, None),
        ];
        let before = ids(&items);

        let once = sort_ingredients(
            &items,
            Some(SortColumn::Name),
            SortDirection::Asc,
        );
        let twice = sort_ingredients(
            &once,
            Some(SortColumn::Name),
            SortDirection::Asc,
        );
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&items), before);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let items = vec![
            ing(1, "banana", None, None, None),
            ing(2, "Apple", None, None, None),
        ];
        let sorted = sort_ingredients(
            &items,
            Some(SortColumn::Name),
            SortDirection::Asc,
        );
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn ties_preserve_relative_input_order() {
        let items = vec![
            ing(1, "a", Some(2.0), None, None),
            ing(2, "b", Some(2.0), None, None),
            ing(3, "c", Some(1.0), None, None),
            ing(4, "d", Some(2.0), None, None),
        ];
        let asc = sort_ingredients(
            &items,
            Some(SortColumn::Quantity),
            SortDirection::Asc,
        );
        assert_eq!(ids(&asc), vec![3, 1, 2, 4]);

        // descending reverses the comparator, not the tied group
        let desc = sort_ingredients(
            &items,
            Some(SortColumn::Quantity),
            SortDirection::Desc,
        );
        assert_eq!(ids(&desc), vec![1, 2, 4, 3]);
    }

    #[test]
    fn missing_expiry_sorts_before_any_real_date() {
        let items = vec![
            ing(1, "a", None, None, Some("2025-01-01")),
            ing(2, "b", None, None, None),
        ];
        let sorted = sort_ingredients(
            &items,
            Some(SortColumn::ExpiryDate),
            SortDirection::Asc,
        );
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn unparseable_expiry_sorts_as_missing() {
        let items = vec![
            ing(1, "a", None, None, Some("2025-01-01")),
            ing(2, "b", None, None, Some("soonish")),
        ];
        let sorted = sort_ingredients(
            &items,
            Some(SortColumn::ExpiryDate),
            SortDirection::Asc,
        );
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn missing_location_sorts_first_ascending() {
        let items = vec![
            ing(1, "a", None, Some("Fridge"), None),
            ing(2, "b", None, None, None),
            ing(3, "c", None, Some("counter"), None),
        ];
        let sorted = sort_ingredients(
            &items,
            Some(SortColumn::StorageLocation),
            SortDirection::Asc,
        );
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn missing_quantity_sorts_as_zero() {
        let items = vec![
            ing(1, "a", Some(1.0), None, None),
            ing(2, "b", None, None, None),
            ing(3, "c", Some(0.0), None, None),
        ];
        let sorted = sort_ingredients(
            &items,
            Some(SortColumn::Quantity),
            SortDirection::Asc,
        );
        // None and 0.0 tie; the tie keeps input order
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn header_click_cycles_asc_desc_clear() {
        let first = next_sort(None, SortColumn::Name);
        assert_eq!(first, Some((SortColumn::Name, SortDirection::Asc)));

        let second = next_sort(first, SortColumn::Name);
        assert_eq!(second, Some((SortColumn::Name, SortDirection::Desc)));

        let third = next_sort(second, SortColumn::Name);
        assert_eq!(third, None);

        // Clicking a different column restarts ascending
        let other = next_sort(second, SortColumn::Quantity);
        assert_eq!(other, Some((SortColumn::Quantity, SortDirection::Asc)));
    }
}
