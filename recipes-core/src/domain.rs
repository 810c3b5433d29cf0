use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest allowed recipe duration: one day minus one minute.
pub const MAX_RECIPE_DURATION_MINUTES: i64 = 1439;

/// A named dish with a description and a duration in minutes.
///
/// All fields are optional so that a partially filled-in recipe (a create
/// request or an update patch) is representable; [`Recipe::is_valid`] decides
/// whether a recipe is complete enough to store. The id is assigned by the
/// store on creation and never settable through the merge path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_in_minutes: Option<i64>,
}

impl Recipe {
    /// Whether the recipe satisfies the storage constraints: name,
    /// description and duration all present, duration within a single day.
    ///
    /// Presence only. A blank-but-present string passes here; blankness is
    /// the merge rule's concern, not validation's.
    pub fn is_valid(&self) -> bool {
        let (Some(_), Some(_), Some(duration)) =
            (&self.name, &self.description, self.duration_in_minutes)
        else {
            return false;
        };

        duration <= MAX_RECIPE_DURATION_MINUTES
    }

    /// Combines this (stored) recipe with a caller-supplied patch.
    ///
    /// Text fields are taken from the patch only when present and non-blank,
    /// otherwise the existing value is kept. The duration only needs to be
    /// present. The result carries no id: record identity is supplied by the
    /// caller, never by the patch.
    pub fn merged(&self, patch: &Recipe) -> Recipe {
        Recipe {
            id: None,
            name: pick_text(&patch.name, &self.name),
            description: pick_text(&patch.description, &self.description),
            duration_in_minutes: patch.duration_in_minutes.or(self.duration_in_minutes),
        }
    }
}

fn pick_text(patch: &Option<String>, existing: &Option<String>) -> Option<String> {
    match patch {
        Some(value) if !value.trim().is_empty() => Some(value.clone()),
        _ => existing.clone(),
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let duration = self
            .duration_in_minutes
            .map_or_else(|| "-".to_string(), |duration| duration.to_string());

        write!(
            f,
            "id={}, name={}, description={}, duration={}",
            id,
            self.name.as_deref().unwrap_or("-"),
            self.description.as_deref().unwrap_or("-"),
            duration
        )
    }
}

/// Inclusive duration range filter for recipe searches.
///
/// When either bound is absent the search degrades to the unfiltered
/// full set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearch {
    #[serde(default)]
    pub duration_from: Option<i64>,
    #[serde(default)]
    pub duration_to: Option<i64>,
}
