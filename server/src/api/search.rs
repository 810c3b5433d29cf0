use crate::api::{ErrorResponse, RecipeResponse};
use crate::AppState;
use axum::routing::post;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use recipes_core::RecipeSearch;
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesRequest {
    pub duration_from: Option<i64>,
    pub duration_to: Option<i64>,
}

impl From<SearchRecipesRequest> for RecipeSearch {
    fn from(request: SearchRecipesRequest) -> Self {
        RecipeSearch {
            duration_from: request.duration_from,
            duration_to: request.duration_to,
        }
    }
}

/// Returns the router for /search endpoints (mounted at /search)
pub fn router() -> Router<AppState> {
    Router::new().route("/recipe", post(search_recipes))
}

#[utoipa::path(
    post,
    path = "/search/recipe",
    tag = "search",
    request_body = SearchRecipesRequest,
    responses(
        (status = 200, description = "Recipes matching the duration range", body = [RecipeResponse]),
        (status = 404, description = "No recipes matched the search", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(store): State<AppState>,
    Json(request): Json<SearchRecipesRequest>,
) -> impl IntoResponse {
    let search = RecipeSearch::from(request);

    match store.find(&search) {
        Ok(recipes) if recipes.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No recipes matched the search".to_string(),
            }),
        )
            .into_response(),
        Ok(recipes) => {
            let recipes: Vec<RecipeResponse> =
                recipes.into_iter().map(RecipeResponse::from).collect();
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to search recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to search recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(search_recipes),
    components(schemas(SearchRecipesRequest))
)]
pub struct ApiDoc;
