use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::Entity;
use crate::domain::types::{
    EmailAddress, EventCentreId, EventDescription, EventId, EventTitle, Price,
    TypeConstraintError,
};

/// Event registered by an organizer, optionally booked into a centre.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub centre_id: Option<EventCentreId>,
    pub title: EventTitle,
    pub description: Option<EventDescription>,
    pub organizer_email: EmailAddress,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub ticket_price: Price,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Event {
    /// Returns `true` when both events share at least one instant.
    pub fn overlaps(&self, starts_at: NaiveDateTime, ends_at: NaiveDateTime) -> bool {
        self.starts_at < ends_at && starts_at < self.ends_at
    }
}

impl Entity for Event {
    type Key = EventId;

    fn id(&self) -> Self::Key {
        self.id
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewEvent {
    pub title: EventTitle,
    pub description: Option<EventDescription>,
    pub organizer_email: EmailAddress,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub ticket_price: Price,
}

impl NewEvent {
    pub fn try_new(
        title: EventTitle,
        description: Option<EventDescription>,
        organizer_email: EmailAddress,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
        ticket_price: Price,
    ) -> Result<Self, TypeConstraintError> {
        if ends_at <= starts_at {
            return Err(TypeConstraintError::InvalidTimeRange);
        }
        Ok(Self {
            title,
            description,
            organizer_email,
            starts_at,
            ends_at,
            ticket_price,
        })
    }
}
