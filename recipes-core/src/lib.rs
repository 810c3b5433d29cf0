//! Domain model for the recipes catalog: the [`Recipe`] entity, the
//! [`RecipeSearch`] filter value, and the validation and partial-update
//! merge rules shared by every consumer (CLI service, REST resources).

mod domain;

pub use domain::{Recipe, RecipeSearch, MAX_RECIPE_DURATION_MINUTES};
