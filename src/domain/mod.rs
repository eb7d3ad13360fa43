//! Read-only projections of the records served by the catalog API.

pub mod movie;
pub mod person;
pub mod types;

use crate::domain::types::EntityId;

/// Anything that can be rendered as a keyed card.
pub trait Entity {
    /// Stable identifier used as the element key.
    fn id(&self) -> EntityId;

    /// Associated labels rendered as an inner list keyed by position.
    fn labels(&self) -> &[String];
}
