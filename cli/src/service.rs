use recipes_core::{Recipe, RecipeSearch};
use recipes_store::{RecipeStore, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("recipe not found")]
    NotFound,

    #[error("recipe constraints violated")]
    Constraints,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Composes the create and update protocols over a [`RecipeStore`]:
/// existence checks, patch merging and validation happen here, before
/// anything is persisted.
pub struct RecipeService<S> {
    store: S,
}

impl<S: RecipeStore> RecipeService<S> {
    pub fn new(store: S) -> Self {
        RecipeService { store }
    }

    pub fn recipe(&self, id: i64) -> Result<Recipe, ServiceError> {
        self.store.get_by_id(id)?.ok_or(ServiceError::NotFound)
    }

    pub fn all_recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        Ok(self.store.list_all()?)
    }

    pub fn create_recipe(&self, recipe: &Recipe) -> Result<Recipe, ServiceError> {
        if !recipe.is_valid() {
            return Err(ServiceError::Constraints);
        }

        Ok(self.store.create(recipe)?)
    }

    pub fn update_recipe(&self, id: i64, patch: &Recipe) -> Result<(), ServiceError> {
        let existing = self.recipe(id)?;

        let merged = existing.merged(patch);

        if !merged.is_valid() {
            return Err(ServiceError::Constraints);
        }

        Ok(self.store.update(id, &merged)?)
    }

    pub fn delete_recipe(&self, id: i64) -> Result<(), ServiceError> {
        self.recipe(id)?;

        match self.store.delete(id) {
            Err(StoreError::NotFound(_)) => Err(ServiceError::NotFound),
            result => Ok(result?),
        }
    }

    pub fn find_recipes(&self, search: &RecipeSearch) -> Result<Vec<Recipe>, ServiceError> {
        Ok(self.store.find(search)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipes_store::memory::MemRecipeStore;

    fn recipe(
        id: Option<i64>,
        name: Option<&str>,
        description: Option<&str>,
        duration: Option<i64>,
    ) -> Recipe {
        Recipe {
            id,
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            duration_in_minutes: duration,
        }
    }

    fn service_with(recipes: Vec<Recipe>) -> RecipeService<MemRecipeStore> {
        RecipeService::new(MemRecipeStore::with_recipes(recipes))
    }

    #[test]
    fn all_recipes_returns_the_catalog_ordered_by_id() {
        let service = service_with(vec![
            recipe(Some(3), Some("Recipe 3"), Some("Recipe 3 description"), Some(50)),
            recipe(Some(1), Some("Recipe 1"), Some("Recipe 1 description"), Some(50)),
            recipe(Some(2), Some("Recipe 2"), Some("Recipe 2 description"), Some(50)),
        ]);

        let recipes = service.all_recipes().expect("list");

        assert_eq!(recipes.len(), 3);
        let first = &recipes[0];
        assert_eq!(first.id, Some(1));
        assert_eq!(first.name.as_deref(), Some("Recipe 1"));
        assert_eq!(first.description.as_deref(), Some("Recipe 1 description"));
        assert_eq!(first.duration_in_minutes, Some(50));
    }

    #[test]
    fn recipe_fails_with_not_found_when_absent() {
        let service = service_with(vec![]);

        assert!(matches!(service.recipe(1), Err(ServiceError::NotFound)));
    }

    #[test]
    fn recipe_returns_the_stored_recipe() {
        let service = service_with(vec![recipe(
            Some(1),
            Some("Recipe 1"),
            Some("Recipe 1 description"),
            Some(50),
        )]);

        let found = service.recipe(1).expect("recipe exists");

        assert_eq!(found.name.as_deref(), Some("Recipe 1"));
    }

    #[test]
    fn update_fails_with_not_found_when_absent() {
        let service = service_with(vec![]);

        let patch = recipe(None, Some("Foo"), Some("Bar"), Some(50));

        assert!(matches!(
            service.update_recipe(1, &patch),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn update_fails_when_the_merged_recipe_violates_constraints() {
        // Each stored recipe is itself incomplete (or overlong), so merging
        // an identical patch cannot repair it.
        let cases = [
            recipe(None, None, Some("Recipe 1 description"), Some(50)),
            recipe(None, Some("Recipe 1"), None, Some(50)),
            recipe(None, Some("Recipe 1"), Some("Recipe 1 description"), Some(9950)),
        ];

        for case in cases {
            let service = service_with(vec![Recipe {
                id: Some(1),
                ..case.clone()
            }]);

            assert!(
                matches!(
                    service.update_recipe(1, &case),
                    Err(ServiceError::Constraints)
                ),
                "expected constraints failure for {case:?}"
            );
        }
    }

    #[test]
    fn update_persists_the_merged_recipe() {
        let service = service_with(vec![recipe(Some(1), Some("Recipe 1"), Some("d"), Some(50))]);

        let patch = recipe(None, None, None, Some(90));
        service.update_recipe(1, &patch).expect("update");

        let updated = service.recipe(1).expect("recipe exists");
        assert_eq!(updated.name.as_deref(), Some("Recipe 1"));
        assert_eq!(updated.description.as_deref(), Some("d"));
        assert_eq!(updated.duration_in_minutes, Some(90));
    }

    #[test]
    fn create_fails_when_the_recipe_violates_constraints() {
        let service = service_with(vec![]);

        let cases = [
            recipe(None, None, Some("Recipe 1 description"), Some(50)),
            recipe(None, Some("Recipe 1"), None, Some(50)),
            recipe(None, Some("Recipe 1"), Some("Recipe 1 description"), Some(9950)),
        ];

        for case in cases {
            assert!(
                matches!(service.create_recipe(&case), Err(ServiceError::Constraints)),
                "expected constraints failure for {case:?}"
            );
        }
    }

    #[test]
    fn create_returns_the_recipe_with_its_id() {
        let service = service_with(vec![]);

        let created = service
            .create_recipe(&recipe(
                None,
                Some("Recipe 1"),
                Some("Recipe 1 description"),
                Some(50),
            ))
            .expect("create");

        assert_eq!(created.id, Some(1));
    }

    #[test]
    fn delete_fails_with_not_found_when_absent() {
        let service = service_with(vec![]);

        assert!(matches!(
            service.delete_recipe(1),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn delete_removes_the_recipe() {
        let service = service_with(vec![recipe(Some(1), Some("Recipe 1"), Some("d"), Some(50))]);

        service.delete_recipe(1).expect("delete");

        assert!(matches!(service.recipe(1), Err(ServiceError::NotFound)));
    }

    #[test]
    fn find_without_both_bounds_returns_everything() {
        let service = service_with(vec![
            recipe(Some(1), Some("Recipe 1"), Some("d"), Some(10)),
            recipe(Some(2), Some("Recipe 2"), Some("d"), Some(5000)),
        ]);

        let search = RecipeSearch {
            duration_from: None,
            duration_to: Some(100),
        };

        assert_eq!(service.find_recipes(&search).expect("find").len(), 2);
    }
}
