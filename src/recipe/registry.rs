//! Keyed, insertion-ordered in-memory recipe store

use super::{DefaultRecipeMapper, Recipe, RecipeKey, RecipeMapper, RecipeModel};
use crate::error::{EatsyError, Result};
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// Recipe registry operations exposed to the transport layer
pub trait RecipeRegistry: Send + Sync {
    /// Validate and store a new recipe, returning it with its assigned key
    fn create(&self, model: &RecipeModel) -> Result<RecipeModel>;

    /// All stored recipes in insertion order
    fn list_all(&self) -> Vec<RecipeModel>;

    /// Look up a single recipe by key
    fn get(&self, key: &RecipeKey) -> Result<RecipeModel>;

    /// Replace the recipe at `key` with a new entity built from `model`.
    ///
    /// The replacement is born with a fresh key and moves to the end of the
    /// insertion order. When `key` is not present the new entity is still
    /// inserted.
    fn update(&self, key: &RecipeKey, model: &RecipeModel) -> Result<RecipeModel>;

    /// Remove the recipe at `key` if present and return the remaining recipes
    fn delete(&self, key: &RecipeKey) -> Vec<RecipeModel>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry holding recipes in process memory
///
/// Every operation runs under a single mutex, so a listing never observes the
/// remove half of an update without its insert. Validation and mapping of the
/// incoming record happen before the lock is taken.
pub struct InMemoryRecipeRegistry {
    mapper: Arc<dyn RecipeMapper>,
    recipes: Mutex<IndexMap<RecipeKey, Recipe>>,
}

impl InMemoryRecipeRegistry {
    /// Create an empty registry using the given mapper
    pub fn new(mapper: Arc<dyn RecipeMapper>) -> Self {
        Self {
            mapper,
            recipes: Mutex::new(IndexMap::new()),
        }
    }

    fn snapshot(&self, recipes: &IndexMap<RecipeKey, Recipe>) -> Vec<RecipeModel> {
        recipes
            .values()
            .map(|recipe| self.mapper.to_model(recipe))
            .collect()
    }
}

impl Default for InMemoryRecipeRegistry {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRecipeMapper::new()))
    }
}

impl RecipeRegistry for InMemoryRecipeRegistry {
    fn create(&self, model: &RecipeModel) -> Result<RecipeModel> {
        if model.name.trim().is_empty() {
            return Err(EatsyError::invalid_recipe("name must not be empty"));
        }

        debug!("Creating a new recipe called {}", model.name.trim());

        let recipe = self.mapper.to_domain(model)?;
        let created = self.mapper.to_model(&recipe);

        let mut recipes = self.recipes.lock();
        if recipes.contains_key(recipe.key()) {
            return Err(EatsyError::internal(format!(
                "generated key {} is already in use",
                recipe.key()
            )));
        }
        recipes.insert(recipe.key().clone(), recipe);

        Ok(created)
    }

    fn list_all(&self) -> Vec<RecipeModel> {
        debug!("Retrieving all recipes");

        let recipes = self.recipes.lock();
        self.snapshot(&recipes)
    }

    fn get(&self, key: &RecipeKey) -> Result<RecipeModel> {
        debug!("Retrieving recipe with key: {}", key);

        let recipes = self.recipes.lock();
        recipes
            .get(key)
            .map(|recipe| self.mapper.to_model(recipe))
            .ok_or_else(|| EatsyError::not_found(key))
    }

    fn update(&self, key: &RecipeKey, model: &RecipeModel) -> Result<RecipeModel> {
        debug!("Replacing recipe with key: {} with an updated version", key);

        let updated = self.mapper.to_domain(model)?;
        let response = self.mapper.to_model(&updated);

        let mut recipes = self.recipes.lock();
        if recipes.contains_key(updated.key()) {
            return Err(EatsyError::internal(format!(
                "generated key {} is already in use",
                updated.key()
            )));
        }
        if recipes.shift_remove(key).is_none() {
            debug!("No recipe with key: {}; storing update as a new entry", key);
        }
        debug!("Recipe {} is now stored under {}", key, updated.key());
        recipes.insert(updated.key().clone(), updated);

        Ok(response)
    }

    fn delete(&self, key: &RecipeKey) -> Vec<RecipeModel> {
        debug!("Deleting recipe with key: {}", key);

        let mut recipes = self.recipes.lock();
        recipes.shift_remove(key);
        self.snapshot(&recipes)
    }

    fn len(&self) -> usize {
        self.recipes.lock().len()
    }
}
