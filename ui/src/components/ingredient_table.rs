use payloads::responses::Ingredient;
use yew::prelude::*;

use crate::listing::sort::{SortColumn, SortDirection};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ingredients: Vec<Ingredient>,
    pub sort: Option<(SortColumn, SortDirection)>,
    pub on_sort: Callback<SortColumn>,
    pub on_edit: Callback<Ingredient>,
    pub on_delete: Callback<Ingredient>,
    #[prop_or(false)]
    pub is_busy: bool,
}

#[function_component]
pub fn IngredientTable(props: &Props) -> Html {
    let header = |label: &str, column: SortColumn| {
        let indicator = match props.sort {
            Some((active, SortDirection::Asc)) if active == column => " ▲",
            Some((active, SortDirection::Desc)) if active == column => " ▼",
            _ => "",
        };
        let on_sort = props.on_sort.clone();
        let onclick =
            Callback::from(move |_: MouseEvent| on_sort.emit(column));
        html! {
            <th
                onclick={onclick}
                class="px-4 py-3 text-left text-xs font-medium uppercase \
                       tracking-wider text-neutral-500 dark:text-neutral-400 \
                       cursor-pointer select-none hover:text-neutral-700 \
                       dark:hover:text-neutral-200"
            >
                {format!("{label}{indicator}")}
            </th>
        }
    };

    html! {
        <div class="overflow-x-auto rounded-lg border border-neutral-200 \
                    dark:border-neutral-700">
            <table class="min-w-full divide-y divide-neutral-200 \
                          dark:divide-neutral-700">
                <thead class="bg-neutral-50 dark:bg-neutral-800">
                    <tr>
                        {header("Name", SortColumn::Name)}
                        {header("Quantity", SortColumn::Quantity)}
                        {header("Location", SortColumn::StorageLocation)}
                        {header("Expires", SortColumn::ExpiryDate)}
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 \
                              dark:divide-neutral-700">
                    {for props.ingredients.iter().map(|ingredient| {
                        html! {
                            <IngredientRow
                                key={ingredient.id.to_string()}
                                ingredient={ingredient.clone()}
                                on_edit={props.on_edit.clone()}
                                on_delete={props.on_delete.clone()}
                                is_busy={props.is_busy}
                            />
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RowProps {
    ingredient: Ingredient,
    on_edit: Callback<Ingredient>,
    on_delete: Callback<Ingredient>,
    is_busy: bool,
}

#[function_component]
fn IngredientRow(props: &RowProps) -> Html {
    let ingredient = &props.ingredient;

    let quantity = match (ingredient.quantity, ingredient.unit.as_deref()) {
        (Some(quantity), Some(unit)) => format!("{quantity} {unit}"),
        (Some(quantity), None) => quantity.to_string(),
        (None, _) => "-".to_string(),
    };

    let expires = ingredient
        .expiry()
        .map(|date| date.strftime("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string());

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let ingredient = ingredient.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(ingredient.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let ingredient = ingredient.clone();
        Callback::from(move |_: MouseEvent| {
            on_delete.emit(ingredient.clone())
        })
    };

    html! {
        <tr class="hover:bg-neutral-50 dark:hover:bg-neutral-800/50">
            <td class="px-4 py-3 text-sm font-medium text-neutral-900 \
                       dark:text-neutral-100">
                {&ingredient.name}
            </td>
            <td class="px-4 py-3 text-sm text-neutral-600 \
                       dark:text-neutral-400">
                {quantity}
            </td>
            <td class="px-4 py-3 text-sm text-neutral-600 \
                       dark:text-neutral-400">
                {ingredient.storage_location.clone().unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="px-4 py-3 text-sm text-neutral-600 \
                       dark:text-neutral-400">
                {expires}
            </td>
            <td class="px-4 py-3 text-sm text-right space-x-3">
                <button
                    onclick={on_edit}
                    disabled={props.is_busy}
                    class="text-neutral-600 dark:text-neutral-300 \
                           hover:text-neutral-900 dark:hover:text-neutral-100 \
                           font-medium"
                >
                    {"Edit"}
                </button>
                <button
                    onclick={on_delete}
                    disabled={props.is_busy}
                    class="text-red-600 dark:text-red-400 \
                           hover:text-red-800 dark:hover:text-red-300 \
                           font-medium"
                >
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}
