use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use recipes_core::Recipe;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_in_minutes: Option<i64>,
}

impl From<UpdateRecipeRequest> for Recipe {
    fn from(request: UpdateRecipeRequest) -> Self {
        Recipe {
            id: None,
            name: request.name,
            description: request.description,
            duration_in_minutes: request.duration_in_minutes,
        }
    }
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 204, description = "Recipe updated successfully"),
        (status = 400, description = "Merged recipe is not valid", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    let patch = Recipe::from(request);

    // Fetch the stored recipe to merge the patch into
    let existing = match store.get_by_id(id) {
        Ok(Some(recipe)) => recipe,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    let merged = existing.merged(&patch);

    if !merged.is_valid() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe is not valid".to_string(),
            }),
        )
            .into_response();
    }

    match store.update(id, &merged) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
