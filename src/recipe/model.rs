//! Presentation record exchanged with callers of the registry

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// External representation of a recipe
///
/// A record without a key is a creation request; a record carrying a key
/// refers to a recipe already in the registry. `method` maps 1-based step
/// numbers to step text and serializes as a JSON object (`{"1": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub method: BTreeMap<u32, String>,
}

impl RecipeModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Append a step at the next free index after the current last step
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        let next = self.method.keys().next_back().map_or(1, |last| last + 1);
        self.method.insert(next, step.into());
        self
    }

    /// Insert a step at an explicit index
    pub fn with_step_at(mut self, number: u32, step: impl Into<String>) -> Self {
        self.method.insert(number, step.into());
        self
    }
}
