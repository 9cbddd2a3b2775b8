//! Recipe domain
//!
//! A recipe has a name, an unordered set of ingredients and an ordered method.
//! The module is split the same way the data flows through the service:
//!
//! - [`Recipe`] - the validated, logically immutable domain entity
//! - [`RecipeModel`] - the presentation record exchanged with callers
//! - [`RecipeMapper`] - translation between the two, assigning fresh keys
//! - [`RecipeRegistry`] - the keyed, insertion-ordered in-memory store

pub mod mapper;
pub mod model;
pub mod registry;

pub use mapper::{DefaultRecipeMapper, RecipeMapper};
pub use model::RecipeModel;
pub use registry::{InMemoryRecipeRegistry, RecipeRegistry};

use crate::error::{EatsyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Opaque identifier assigned to a recipe when its entity is constructed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeKey(String);

impl RecipeKey {
    /// Generate a fresh key. Keys never derive from recipe content.
    pub fn new() -> Self {
        Self(format!("recipe-{}", Uuid::new_v4()))
    }

    /// Create from an existing string
    pub fn from_string(key: String) -> Self {
        Self(key)
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecipeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// A validated recipe
///
/// Fields are private; the entity is never mutated after construction; an
/// update replaces it with a freshly built entity carrying a new key.
/// Equality and hashing cover name, ingredients and method only, so two
/// registrations of the same recipe compare equal.
#[derive(Clone)]
pub struct Recipe {
    key: RecipeKey,
    name: String,
    ingredients: BTreeSet<String>,
    method: Vec<String>,
}

impl Recipe {
    /// Build a recipe, trimming the name and ingredients and collapsing
    /// duplicate ingredients. `method[i]` is step `i + 1`.
    pub fn new<I, S>(
        key: RecipeKey,
        name: &str,
        ingredients: I,
        method: Vec<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(EatsyError::invalid_recipe("name must not be empty"));
        }

        let mut set = BTreeSet::new();
        for (index, ingredient) in ingredients.into_iter().enumerate() {
            let ingredient = ingredient.as_ref().trim();
            if ingredient.is_empty() {
                return Err(EatsyError::invalid_recipe(format!(
                    "ingredients[{index}] must not be empty"
                )));
            }
            set.insert(ingredient.to_string());
        }

        Ok(Self {
            key,
            name: name.to_string(),
            ingredients: set,
            method,
        })
    }

    pub fn key(&self) -> &RecipeKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &BTreeSet<String> {
        &self.ingredients
    }

    /// Preparation steps in order; position 0 holds step 1
    pub fn method(&self) -> &[String] {
        &self.method
    }

    /// Look up a step by its 1-based number
    pub fn step(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.method.get(index).map(String::as_str)
    }

    pub fn step_count(&self) -> usize {
        self.method.len()
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.ingredients == other.ingredients
            && self.method == other.method
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.ingredients.hash(state);
        self.method.hash(state);
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("key", &self.key.as_str())
            .field("name", &self.name)
            .field("ingredients", &self.ingredients)
            .field("method", &self.method)
            .finish()
    }
}
