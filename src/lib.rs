//! # Eatsy
//!
//! An in-memory recipe book with a keyed registry and a JSON API.
//!
//! ## Usage
//!
//! ```bash
//! eatsy serve [--config eatsy.toml] [--host 127.0.0.1] [--port 8080] [--cors]
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, logging setup and fatal error reporting
//! - `error` - Unified error type and error codes
//! - `recipe` - Recipe entity, presentation model, mapper and registry
//! - `server` - HTTP front-end driving the registry
pub mod app;
pub mod error;
pub mod recipe;
pub mod server;


pub use error::{EatsyError, Result};
pub use recipe::{
    DefaultRecipeMapper, InMemoryRecipeRegistry, Recipe, RecipeKey, RecipeMapper, RecipeModel,
    RecipeRegistry,
};
pub use server::RecipeServer;
