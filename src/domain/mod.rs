//! Domain aggregates exposed by the event management service layer.

use chrono::NaiveDateTime;

pub mod event;
pub mod event_centre;
pub mod ticket;
pub mod types;

/// Record with a stable identity and a creation timestamp.
///
/// Every listable aggregate implements this so that generic repositories can
/// order and page it without knowing the concrete type.
pub trait Entity {
    /// Identifier type of the entity.
    type Key: Copy + Eq;

    fn id(&self) -> Self::Key;

    fn created_at(&self) -> NaiveDateTime;
}
