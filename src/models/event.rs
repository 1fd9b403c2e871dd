//! Diesel models for events.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::event::{Event as DomainEvent, NewEvent as DomainNewEvent};
use crate::domain::types::{
    EmailAddress, EventCentreId, EventDescription, EventId, EventTitle, Price,
    TypeConstraintError,
};
use crate::models::event_centre::EventCentre;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(EventCentre, foreign_key = centre_id))]
#[diesel(table_name = crate::schema::events)]
/// Diesel model for [`crate::domain::event::Event`].
pub struct Event {
    pub id: i32,
    pub centre_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub organizer_email: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub ticket_price: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::events)]
/// Insertable form of [`Event`].
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub organizer_email: &'a str,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub ticket_price: i64,
}

impl TryFrom<Event> for DomainEvent {
    type Error = TypeConstraintError;

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EventId::new(event.id)?,
            centre_id: event.centre_id.map(EventCentreId::new).transpose()?,
            title: EventTitle::new(event.title)?,
            description: event
                .description
                .filter(|text| !text.trim().is_empty())
                .map(EventDescription::new)
                .transpose()?,
            organizer_email: EmailAddress::new(event.organizer_email)?,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            ticket_price: Price::new(event.ticket_price)?,
            created_at: event.created_at,
            updated_at: event.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewEvent> for NewEvent<'a> {
    fn from(event: &'a DomainNewEvent) -> Self {
        Self {
            title: event.title.as_str(),
            description: event.description.as_ref().map(|d| d.as_str()),
            organizer_email: event.organizer_email.as_str(),
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            ticket_price: event.ticket_price.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn row() -> Event {
        let now = Utc::now().naive_utc();
        Event {
            id: 1,
            centre_id: Some(2),
            title: "Rust Meetup".to_string(),
            description: Some("   ".to_string()),
            organizer_email: "Org@Example.com".to_string(),
            starts_at: now,
            ends_at: now + Duration::hours(2),
            ticket_price: 1500,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_into_domain() {
        let domain: DomainEvent = row().try_into().unwrap();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.centre_id.map(EventCentreId::get), Some(2));
        assert_eq!(domain.description, None);
        assert_eq!(domain.organizer_email.as_str(), "org@example.com");
        assert_eq!(domain.ticket_price.get(), 1500);
    }

    #[test]
    fn row_with_invalid_centre_is_rejected() {
        let mut invalid = row();
        invalid.centre_id = Some(0);
        let result: Result<DomainEvent, _> = invalid.try_into();
        assert_eq!(result, Err(TypeConstraintError::NonPositiveId));
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let now = Utc::now().naive_utc();
        let domain = DomainNewEvent::try_new(
            EventTitle::new("Launch").unwrap(),
            Some(EventDescription::new("Product launch").unwrap()),
            EmailAddress::new("org@example.com").unwrap(),
            now,
            now + Duration::hours(1),
            Price::new(0).unwrap(),
        )
        .unwrap();
        let insertable: NewEvent = (&domain).into();
        assert_eq!(insertable.title, "Launch");
        assert_eq!(insertable.description, Some("Product launch"));
        assert_eq!(insertable.organizer_email, "org@example.com");
        assert_eq!(insertable.ticket_price, 0);
    }
}
