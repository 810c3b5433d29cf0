use recipes_core::{Recipe, RecipeSearch};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no recipe with id {0}")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Persistence boundary for recipes.
///
/// The store persists whatever recipe it is handed; validity is enforced
/// by callers (service layer and REST resources) before anything reaches
/// a store.
pub trait RecipeStore: Send + Sync {
    /// Inserts the recipe and returns it with the generated id.
    fn create(&self, recipe: &Recipe) -> Result<Recipe, StoreError>;

    fn get_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError>;

    /// Overwrites the recipe stored under `id`. A missing id is not an
    /// error here; existence checks belong to the update protocol.
    fn update(&self, id: i64, recipe: &Recipe) -> Result<(), StoreError>;

    /// Removes the recipe stored under `id`, failing with
    /// [`StoreError::NotFound`] when there is none.
    fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// All recipes, ordered by id.
    fn list_all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Recipes whose duration falls inside the inclusive search range.
    /// When either bound is absent, the unfiltered full set is returned.
    fn find(&self, search: &RecipeSearch) -> Result<Vec<Recipe>, StoreError>;
}
