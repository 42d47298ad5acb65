use payloads::responses::Recipe;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: Recipe,
    pub on_edit: Callback<Recipe>,
    pub on_delete: Callback<Recipe>,
    #[prop_or(false)]
    pub is_busy: bool,
}

#[function_component]
pub fn RecipeCard(props: &Props) -> Html {
    let recipe = &props.recipe;

    let timing = match (recipe.prep_time, recipe.cook_time) {
        (Some(prep), Some(cook)) => {
            format!("{prep} min prep · {cook} min cook")
        }
        (Some(prep), None) => format!("{prep} min prep"),
        (None, Some(cook)) => format!("{cook} min cook"),
        (None, None) => String::new(),
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let recipe = recipe.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(recipe.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let recipe = recipe.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(recipe.clone()))
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md \
                    border border-neutral-200 dark:border-neutral-700 \
                    space-y-3">
            <div class="flex items-start justify-between">
                <h3 class="text-xl font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {&recipe.name}
                </h3>
                if let Some(difficulty) = recipe.difficulty {
                    <span class="text-xs font-medium uppercase px-2 py-1 \
                                 rounded bg-neutral-100 dark:bg-neutral-700 \
                                 text-neutral-600 dark:text-neutral-300">
                        {difficulty.as_str()}
                    </span>
                }
            </div>
            if let Some(description) = &recipe.description {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {description}
                </p>
            }
            <div class="text-sm text-neutral-600 dark:text-neutral-400">
                if !timing.is_empty() {
                    <p>{timing}</p>
                }
                if let Some(servings) = recipe.servings {
                    <p>{format!("Serves {servings}")}</p>
                }
            </div>
            if !recipe.tags.is_empty() {
                <div class="flex flex-wrap gap-1">
                    {for recipe.tags.iter().map(|tag| html! {
                        <span class="text-xs px-2 py-0.5 rounded-full \
                                     bg-neutral-100 dark:bg-neutral-700 \
                                     text-neutral-600 dark:text-neutral-300">
                            {tag}
                        </span>
                    })}
                </div>
            }
            <div class="flex justify-end space-x-3 pt-2">
                <button
                    onclick={on_edit}
                    disabled={props.is_busy}
                    class="text-sm font-medium text-neutral-600 \
                           dark:text-neutral-300 hover:text-neutral-900 \
                           dark:hover:text-neutral-100"
                >
                    {"Edit"}
                </button>
                <button
                    onclick={on_delete}
                    disabled={props.is_busy}
                    class="text-sm font-medium text-red-600 dark:text-red-400 \
                           hover:text-red-800 dark:hover:text-red-300"
                >
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}
