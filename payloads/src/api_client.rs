use crate::{IngredientId, RecipeId, requests, responses};
use serde::{Deserialize, Serialize};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// The uniform error shape every failed call resolves to.
///
/// HTTP errors carry the backend's `detail` and status; failures with no
/// response at all (connection refused, DNS, aborted) use `status_code: 0`.
/// Callers branch on this one type and never see a raw transport error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct ApiError {
    pub detail: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        self.status_code == 0
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            detail: err.to_string(),
            status_code: 0,
        }
    }
}

/// Error body the backend sends on non-2xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    detail: String,
    status_code: Option<u16>,
}

/// Recipe create/update payloads are wrapped in a `{"recipe": ...}`
/// envelope on the wire.
#[derive(Serialize)]
struct RecipeEnvelope<'a, T: Serialize> {
    recipe: &'a T,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/v1/{path}", &self.address)
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ReqwestResult {
        let mut request = self.inner_client.get(self.format_url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn patch(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request =
            self.inner_client.patch(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn list_ingredients(
        &self,
        filters: &requests::IngredientFilters,
    ) -> Result<responses::IngredientPage, ApiError> {
        let response =
            self.get("ingredients/", &filters.query_pairs()).await?;
        let list: responses::IngredientListResponse =
            ok_body(response).await?;
        Ok(list.into_page())
    }

    pub async fn get_ingredient(
        &self,
        id: IngredientId,
    ) -> Result<responses::Ingredient, ApiError> {
        let response = self.get(&format!("ingredients/{id}"), &[]).await?;
        ok_body(response).await
    }

    pub async fn create_ingredient(
        &self,
        details: &requests::IngredientCreate,
    ) -> Result<responses::Ingredient, ApiError> {
        let response = self.post("ingredients/", details).await?;
        ok_body(response).await
    }

    pub async fn update_ingredient(
        &self,
        id: IngredientId,
        patch: &requests::IngredientPatch,
    ) -> Result<responses::Ingredient, ApiError> {
        let response = self.patch(&format!("ingredients/{id}"), patch).await?;
        ok_body(response).await
    }

    /// Soft-deletes server-side; a 204 comes back on success.
    pub async fn delete_ingredient(
        &self,
        id: IngredientId,
    ) -> Result<(), ApiError> {
        let response = self.delete(&format!("ingredients/{id}")).await?;
        ok_empty(response).await
    }

    pub async fn list_recipes(
        &self,
        filters: &requests::RecipeFilters,
    ) -> Result<responses::RecipeListResponse, ApiError> {
        let response = self.get("recipes/", &filters.query_pairs()).await?;
        ok_body(response).await
    }

    pub async fn get_recipe(
        &self,
        id: RecipeId,
    ) -> Result<responses::RecipeDetail, ApiError> {
        let response = self.get(&format!("recipes/{id}"), &[]).await?;
        ok_body(response).await
    }

    pub async fn create_recipe(
        &self,
        details: &requests::RecipeCreate,
    ) -> Result<responses::RecipeDetail, ApiError> {
        let response = self
            .post("recipes/", &RecipeEnvelope { recipe: details })
            .await?;
        ok_body(response).await
    }

    pub async fn update_recipe(
        &self,
        id: RecipeId,
        details: &requests::RecipeUpdate,
    ) -> Result<responses::RecipeDetail, ApiError> {
        let response = self
            .patch(
                &format!("recipes/{id}"),
                &RecipeEnvelope { recipe: details },
            )
            .await?;
        ok_body(response).await
    }

    pub async fn delete_recipe(
        &self,
        id: RecipeId,
    ) -> Result<responses::DeleteMessage, ApiError> {
        let response = self.delete(&format!("recipes/{id}")).await?;
        ok_body(response).await
    }

    pub async fn suggest_recipes(
        &self,
        details: &requests::SuggestionRequest,
    ) -> Result<responses::SuggestionResponse, ApiError> {
        let response = self.post("suggestions/recipes", details).await?;
        ok_body(response).await
    }

    /// Persist a generated recipe; returns the stored recipe with its id.
    pub async fn accept_suggestion(
        &self,
        details: &requests::SuggestionAcceptRequest,
    ) -> Result<responses::RecipeDetail, ApiError> {
        let response = self.post("suggestions/accept", details).await?;
        ok_body(response).await
    }

    pub async fn shopping_list(
        &self,
        details: &requests::ShoppingListRequest,
    ) -> Result<responses::ShoppingListResponse, ApiError> {
        let response =
            self.post("suggestions/shopping-list", details).await?;
        ok_body(response).await
    }
}

/// Deserialize a successful response into the desired type, or normalize
/// the failure into an [`ApiError`].
async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty (or ignored-body) response is OK.
async fn ok_empty(response: reqwest::Response) -> Result<(), ApiError> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

/// Parse the backend's `{detail, status_code}` error body; if the body is
/// missing or not that shape, synthesize a message from the status line.
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => ApiError {
            detail: body.detail,
            status_code: body.status_code.unwrap_or(status.as_u16()),
        },
        Err(_) => ApiError {
            detail: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Error"),
            ),
            status_code: status.as_u16(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_prefixed_with_the_api_base() {
        let client = APIClient {
            address: "http://localhost:8000".to_string(),
            inner_client: reqwest::Client::new(),
        };
        assert_eq!(
            client.format_url("ingredients/"),
            "http://localhost:8000/api/v1/ingredients/"
        );
        assert_eq!(
            client.format_url("recipes/7"),
            "http://localhost:8000/api/v1/recipes/7"
        );
    }

    #[test]
    fn recipe_payloads_are_enveloped() {
        let create = requests::RecipeCreate {
            name: "Carbonara".to_string(),
            description: None,
            instructions: "Boil pasta.".to_string(),
            prep_time: Some(10),
            cook_time: Some(20),
            servings: Some(4),
            difficulty: None,
            ingredients: vec![],
        };
        let value =
            serde_json::to_value(RecipeEnvelope { recipe: &create }).unwrap();
        assert_eq!(value["recipe"]["name"], "Carbonara");
    }

    #[test]
    fn network_errors_normalize_to_status_zero() {
        let err = ApiError {
            detail: "connection refused".to_string(),
            status_code: 0,
        };
        assert!(err.is_network());
        assert_eq!(err.to_string(), "connection refused");
    }
}
