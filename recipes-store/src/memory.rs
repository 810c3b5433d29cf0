//! In-memory [`RecipeStore`] used as a drop-in double for the relational
//! store in tests. Behavior mirrors [`crate::pg::PgRecipeStore`]: ids are
//! assigned sequentially on create, `list_all` is ordered by id, and the
//! store accepts whatever it is handed without validating.

use std::collections::BTreeMap;
use std::sync::Mutex;

use recipes_core::{Recipe, RecipeSearch};

use crate::store::{RecipeStore, StoreError};

#[derive(Default)]
pub struct MemRecipeStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Recipe>,
    next_id: i64,
}

impl MemRecipeStore {
    pub fn new() -> Self {
        MemRecipeStore::default()
    }

    /// Builds a store pre-populated with the given recipes, keeping their
    /// ids where present and assigning fresh ones otherwise.
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let store = MemRecipeStore::new();
        {
            let mut inner = store.lock();
            for recipe in recipes {
                let id = recipe.id.unwrap_or(inner.next_id + 1);
                inner.next_id = inner.next_id.max(id);
                inner.rows.insert(id, Recipe { id: Some(id), ..recipe });
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("recipe store mutex poisoned")
    }
}

impl RecipeStore for MemRecipeStore {
    fn create(&self, recipe: &Recipe) -> Result<Recipe, StoreError> {
        let mut inner = self.lock();

        inner.next_id += 1;
        let id = inner.next_id;

        let stored = Recipe {
            id: Some(id),
            ..recipe.clone()
        };
        inner.rows.insert(id, stored.clone());

        Ok(stored)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    fn update(&self, id: i64, recipe: &Recipe) -> Result<(), StoreError> {
        let mut inner = self.lock();

        if let Some(slot) = inner.rows.get_mut(&id) {
            *slot = Recipe {
                id: Some(id),
                ..recipe.clone()
            };
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        match self.lock().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    fn find(&self, search: &RecipeSearch) -> Result<Vec<Recipe>, StoreError> {
        let (Some(from), Some(to)) = (search.duration_from, search.duration_to) else {
            return self.list_all();
        };

        Ok(self
            .lock()
            .rows
            .values()
            .filter(|recipe| {
                recipe
                    .duration_in_minutes
                    .is_some_and(|duration| duration >= from && duration <= to)
            })
            .cloned()
            .collect())
    }
}
