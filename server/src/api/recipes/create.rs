use crate::api::{ErrorResponse, RecipeResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recipes_core::Recipe;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_in_minutes: Option<i64>,
}

impl From<CreateRecipeRequest> for Recipe {
    fn from(request: CreateRecipeRequest) -> Self {
        Recipe {
            id: None,
            name: request.name,
            description: request.description,
            duration_in_minutes: request.duration_in_minutes,
        }
    }
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Recipe is not valid", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    let recipe = Recipe::from(request);

    if !recipe.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe is not valid".to_string(),
            }),
        )
            .into_response();
    }

    match store.create(&recipe) {
        Ok(created) => (StatusCode::OK, Json(RecipeResponse::from(created))).into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
