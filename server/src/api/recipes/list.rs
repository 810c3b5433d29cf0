use crate::api::{ErrorResponse, RecipeResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, ordered by id", body = [RecipeResponse])
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> impl IntoResponse {
    match store.list_all() {
        Ok(recipes) => {
            let recipes: Vec<RecipeResponse> =
                recipes.into_iter().map(RecipeResponse::from).collect();
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
