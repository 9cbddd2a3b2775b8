//! Translation between the recipe entity and its presentation record

use super::{Recipe, RecipeKey, RecipeModel};
use crate::error::{EatsyError, Result};
use std::collections::BTreeMap;

/// Maps recipes between the domain entity and the presentation record
pub trait RecipeMapper: Send + Sync {
    /// Produce a detached presentation record carrying the entity's key
    fn to_model(&self, recipe: &Recipe) -> RecipeModel;

    /// Validate and normalize a record into a new entity with a fresh key.
    /// Any key present on the record is ignored.
    fn to_domain(&self, model: &RecipeModel) -> Result<Recipe>;
}

/// Mapper that generates a random key for every entity it builds
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRecipeMapper;

impl DefaultRecipeMapper {
    pub fn new() -> Self {
        Self
    }
}

impl RecipeMapper for DefaultRecipeMapper {
    fn to_model(&self, recipe: &Recipe) -> RecipeModel {
        RecipeModel {
            key: Some(recipe.key().to_string()),
            name: recipe.name().to_string(),
            ingredients: recipe.ingredients().iter().cloned().collect(),
            method: (1u32..).zip(recipe.method().iter().cloned()).collect(),
        }
    }

    fn to_domain(&self, model: &RecipeModel) -> Result<Recipe> {
        let method = ordered_steps(&model.method)?;
        Recipe::new(RecipeKey::new(), &model.name, &model.ingredients, method)
    }
}

/// Flatten a step map into an ordered list, requiring indices 1..=N
fn ordered_steps(method: &BTreeMap<u32, String>) -> Result<Vec<String>> {
    let mut steps = Vec::with_capacity(method.len());
    for (expected, (&number, step)) in (1u32..).zip(method) {
        if number == 0 {
            return Err(EatsyError::invalid_recipe(
                "method step indices start at 1; found 0",
            ));
        }
        if number != expected {
            return Err(EatsyError::invalid_recipe(format!(
                "method step indices must be contiguous from 1; found gap at {expected}"
            )));
        }
        steps.push(step.clone());
    }
    Ok(steps)
}
