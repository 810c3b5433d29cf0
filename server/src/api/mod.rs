pub mod recipes;
pub mod search;

use axum::Router;
use recipes_core::Recipe;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wire representation of a stored recipe.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_in_minutes: Option<i64>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            duration_in_minutes: recipe.duration_in_minutes,
        }
    }
}

/// Builds the application router over the given store.
pub fn app(store: AppState) -> Router {
    Router::new()
        .nest("/recipes", recipes::router())
        .nest("/search", search::router())
        .with_state(store)
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse, RecipeResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    for module_spec in [recipes::ApiDoc::openapi(), search::ApiDoc::openapi()] {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use recipes_store::memory::MemRecipeStore;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn stored(id: i64, name: &str, description: &str, duration: i64) -> Recipe {
        Recipe {
            id: Some(id),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            duration_in_minutes: Some(duration),
        }
    }

    fn seeded_app(recipes: Vec<Recipe>) -> Router {
        app(Arc::new(MemRecipeStore::with_recipes(recipes)))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_returns_the_recipe_with_its_generated_id() {
        let app = seeded_app(vec![]);

        let response = app
            .oneshot(json_request(
                "POST",
                "/recipes",
                json!({
                    "name": "Recipe 1",
                    "description": "Recipe 1 description",
                    "durationInMinutes": 50
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Recipe 1");
        assert_eq!(body["durationInMinutes"], 50);
    }

    #[tokio::test]
    async fn create_rejects_a_recipe_with_a_missing_field() {
        let app = seeded_app(vec![]);

        let response = app
            .oneshot(json_request(
                "POST",
                "/recipes",
                json!({
                    "description": "Recipe 1 description",
                    "durationInMinutes": 50
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_a_duration_over_one_day() {
        let app = seeded_app(vec![]);

        let response = app
            .oneshot(json_request(
                "POST",
                "/recipes",
                json!({
                    "name": "Recipe 1",
                    "description": "Recipe 1 description",
                    "durationInMinutes": 9950
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_returns_recipes_ordered_by_id() {
        let app = seeded_app(vec![
            stored(3, "Recipe 3", "Recipe 3 description", 50),
            stored(1, "Recipe 1", "Recipe 1 description", 50),
            stored(2, "Recipe 2", "Recipe 2 description", 50),
        ]);

        let response = app.oneshot(get_request("/recipes")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|recipe| recipe["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn get_of_a_missing_recipe_is_not_found() {
        let app = seeded_app(vec![]);

        let response = app.oneshot(get_request("/recipes/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_returns_the_recipe() {
        let app = seeded_app(vec![stored(1, "Recipe 1", "Recipe 1 description", 50)]);

        let response = app.oneshot(get_request("/recipes/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "Recipe 1");
        assert_eq!(body["description"], "Recipe 1 description");
    }

    #[tokio::test]
    async fn update_of_a_missing_recipe_is_not_found() {
        let app = seeded_app(vec![]);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/recipes/1",
                json!({"durationInMinutes": 90}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_merges_the_patch_into_the_stored_recipe() {
        let app = seeded_app(vec![stored(1, "Recipe 1", "d", 50)]);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/recipes/1",
                json!({"durationInMinutes": 90}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request("/recipes/1")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Recipe 1");
        assert_eq!(body["description"], "d");
        assert_eq!(body["durationInMinutes"], 90);
    }

    #[tokio::test]
    async fn update_rejects_a_merge_that_fails_validation() {
        let app = seeded_app(vec![stored(1, "Recipe 1", "d", 50)]);

        let response = app
            .oneshot(json_request(
                "PUT",
                "/recipes/1",
                json!({"durationInMinutes": 9950}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_of_a_missing_recipe_is_not_found() {
        let app = seeded_app(vec![]);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/recipes/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_removes_the_recipe() {
        let app = seeded_app(vec![stored(1, "Recipe 1", "d", 50)]);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/recipes/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request("/recipes/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_with_no_matches_is_not_found() {
        let app = seeded_app(vec![stored(1, "Recipe 1", "d", 50)]);

        let response = app
            .oneshot(json_request(
                "POST",
                "/search/recipe",
                json!({"durationFrom": 100, "durationTo": 200}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_returns_recipes_within_the_range() {
        let app = seeded_app(vec![
            stored(1, "Recipe 1", "d", 10),
            stored(2, "Recipe 2", "d", 50),
            stored(3, "Recipe 3", "d", 90),
        ]);

        let response = app
            .oneshot(json_request(
                "POST",
                "/search/recipe",
                json!({"durationFrom": 10, "durationTo": 50}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|recipe| recipe["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn search_without_both_bounds_returns_everything() {
        let app = seeded_app(vec![
            stored(1, "Recipe 1", "d", 10),
            stored(2, "Recipe 2", "d", 5000),
        ]);

        let response = app
            .oneshot(json_request("POST", "/search/recipe", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
