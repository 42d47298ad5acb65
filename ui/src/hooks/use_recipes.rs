use payloads::{
    ApiError, RecipeId,
    requests::{RecipeCreate, RecipeFilters, RecipeUpdate},
    responses,
};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{UseMutationHandle, use_mutation, use_query};

/// Hook return type for the recipe list plus its mutations.
#[derive(Clone)]
pub struct UseRecipesHandle {
    pub list: Option<responses::RecipeListResponse>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub refetch: Callback<()>,
    create: UseMutationHandle<RecipeCreate, responses::RecipeDetail>,
    update: UseMutationHandle<(RecipeId, RecipeUpdate), responses::RecipeDetail>,
    remove: UseMutationHandle<RecipeId, responses::DeleteMessage>,
}

impl PartialEq for UseRecipesHandle {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
            && self.loading == other.loading
            && self.error == other.error
            && self.is_submitting() == other.is_submitting()
    }
}

impl UseRecipesHandle {
    pub fn is_submitting(&self) -> bool {
        self.create.loading || self.update.loading || self.remove.loading
    }

    /// Create a recipe, then refetch the list from the source of truth.
    pub async fn create(
        &self,
        details: RecipeCreate,
    ) -> Result<responses::RecipeDetail, ApiError> {
        let created = self.create.mutate(details).await?;
        self.refetch.emit(());
        Ok(created)
    }

    pub async fn update(
        &self,
        id: RecipeId,
        details: RecipeUpdate,
    ) -> Result<responses::RecipeDetail, ApiError> {
        let updated = self.update.mutate((id, details)).await?;
        self.refetch.emit(());
        Ok(updated)
    }

    pub async fn remove(&self, id: RecipeId) -> Result<(), ApiError> {
        self.remove.mutate(id).await?;
        self.refetch.emit(());
        Ok(())
    }
}

/// Hook for the recipe list, refetching whenever the filters change.
#[hook]
pub fn use_recipes(filters: RecipeFilters) -> UseRecipesHandle {
    let query = {
        let filters = filters.clone();
        use_query(filters.clone(), move || {
            let filters = filters.clone();
            async move { get_api_client().list_recipes(&filters).await }
        })
    };

    let create = use_mutation(|details: RecipeCreate| async move {
        get_api_client().create_recipe(&details).await
    });
    let update =
        use_mutation(|(id, details): (RecipeId, RecipeUpdate)| async move {
            get_api_client().update_recipe(id, &details).await
        });
    let remove = use_mutation(|id: RecipeId| async move {
        get_api_client().delete_recipe(id).await
    });

    UseRecipesHandle {
        list: query.data,
        loading: query.loading,
        error: query.error,
        refetch: query.refetch,
        create,
        update,
        remove,
    }
}
