//! Entity typer trait definition.

use crate::annotation::EntityLabel;
use crate::error::Result;

/// Entity typer trait.
///
/// Implementations of this trait decide whether a text span denotes a
/// person or an organization. The keyword-based typer and any adapter
/// over an upstream recognizer are interchangeable behind this contract.
pub trait EntityTyper: Send + Sync {
    /// Predict the entity label for a given text.
    ///
    /// # Arguments
    /// * `text` - The text span to type; callers guarantee it is non-empty
    ///
    /// # Returns
    /// The predicted `EntityLabel`
    fn predict(&self, text: &str) -> Result<EntityLabel>;

    /// Get the name of this typer for debugging and logging.
    fn name(&self) -> &str;
}
