use payloads::{
    ApiError, IngredientId,
    requests::{IngredientCreate, IngredientFilters, IngredientPatch},
    responses,
};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{UseMutationHandle, use_mutation, use_query};

/// Hook return type for the ingredient list plus its mutations.
#[derive(Clone)]
pub struct UseIngredientsHandle {
    /// Current page of ingredients; `None` while loading or on error.
    pub page: Option<responses::IngredientPage>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub refetch: Callback<()>,
    create: UseMutationHandle<IngredientCreate, responses::Ingredient>,
    update: UseMutationHandle<
        (IngredientId, IngredientPatch),
        responses::Ingredient,
    >,
    remove: UseMutationHandle<IngredientId, ()>,
}

// Handles travel through Props; equality is over the visible state, so a
// settled fetch or mutation re-renders consumers.
impl PartialEq for UseIngredientsHandle {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page
            && self.loading == other.loading
            && self.error == other.error
            && self.is_submitting() == other.is_submitting()
    }
}

impl UseIngredientsHandle {
    pub fn is_submitting(&self) -> bool {
        self.create.loading || self.update.loading || self.remove.loading
    }

    /// Create an ingredient, then refetch the list. The list is always
    /// refetched from the backend rather than spliced locally.
    pub async fn create(
        &self,
        details: IngredientCreate,
    ) -> Result<responses::Ingredient, ApiError> {
        let created = self.create.mutate(details).await?;
        self.refetch.emit(());
        Ok(created)
    }

    pub async fn update(
        &self,
        id: IngredientId,
        patch: IngredientPatch,
    ) -> Result<responses::Ingredient, ApiError> {
        let updated = self.update.mutate((id, patch)).await?;
        self.refetch.emit(());
        Ok(updated)
    }

    pub async fn remove(&self, id: IngredientId) -> Result<(), ApiError> {
        self.remove.mutate(id).await?;
        self.refetch.emit(());
        Ok(())
    }
}

/// Hook for the ingredient list, refetching whenever the applied filters
/// change.
#[hook]
pub fn use_ingredients(filters: IngredientFilters) -> UseIngredientsHandle {
    let query = {
        let filters = filters.clone();
        use_query(filters.clone(), move || {
            let filters = filters.clone();
            async move { get_api_client().list_ingredients(&filters).await }
        })
    };

    let create = use_mutation(|details: IngredientCreate| async move {
        get_api_client().create_ingredient(&details).await
    });
    let update = use_mutation(
        |(id, patch): (IngredientId, IngredientPatch)| async move {
            get_api_client().update_ingredient(id, &patch).await
        },
    );
    let remove = use_mutation(|id: IngredientId| async move {
        get_api_client().delete_ingredient(id).await
    });

    UseIngredientsHandle {
        page: query.data,
        loading: query.loading,
        error: query.error,
        refetch: query.refetch,
        create,
        update,
        remove,
    }
}
