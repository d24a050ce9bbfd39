//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::Display;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
#[derive(Debug, Display)]
pub enum AppError {
    /// The parser output could not be decoded into the object model.
    #[display("Decode Error: {_0}")]
    Decode(String),

    /// A `$ref` points at a component that was never registered.
    #[display("Unresolved reference '{target}' in component '{from}'")]
    UnresolvedReference {
        /// Reference id of the component holding the `$ref`.
        from: String,
        /// The dangling `$ref` target.
        target: String,
    },

    /// Two routes resolved to the same generated function name.
    #[display("Duplicate function name '{name}' generated for route '{route}'")]
    DuplicateFunctionName {
        /// The colliding function name.
        name: String,
        /// The route that produced the collision.
        route: String,
    },

    /// Routes were classified before relaxed types were resolved.
    #[display("Schema registry must be classified before routes are processed")]
    RegistryNotClassified,
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
