use crate::domain::event::{Event, NewEvent};
use crate::domain::types::{EventCentreId, EventId};
use crate::dto::api::EventListParams;
use crate::forms::events::{AddEventForm, BookCentreForm};
use crate::pagination::PagedList;
use crate::repository::{EventReader, EventWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates an event without a centre; centres are booked separately.
pub fn create_event<R>(repo: &R, form: AddEventForm) -> ServiceResult<Event>
where
    R: EventWriter + ?Sized,
{
    let new_event = NewEvent::try_from(form)?;
    let event = repo.create_event(&new_event)?;
    log::info!("Created event {} by {}", event.id, event.organizer_email);
    Ok(event)
}

pub fn get_event<R>(repo: &R, event_id: i32) -> ServiceResult<Event>
where
    R: EventReader + ?Sized,
{
    let event_id = EventId::new(event_id)?;
    repo.get_event_by_id(event_id)?
        .ok_or_else(|| ServiceError::NotFound("event".to_string()))
}

pub fn list_events<R>(repo: &R, params: EventListParams) -> ServiceResult<PagedList<Event>>
where
    R: EventReader + ?Sized,
{
    let query = params.into_query()?;
    Ok(repo.list_events(query)?)
}

/// Books a centre for the event.
///
/// Fails with [`ServiceError::Conflict`] when the centre already hosts an
/// overlapping event.
pub fn book_centre<R>(repo: &R, event_id: i32, form: BookCentreForm) -> ServiceResult<Event>
where
    R: EventWriter + ?Sized,
{
    let event_id = EventId::new(event_id)?;
    let centre_id = EventCentreId::try_from(form)?;
    let event = repo.book_centre(event_id, centre_id).map_err(|err| {
        log::warn!("Booking centre {centre_id} for event {event_id} failed: {err}");
        err
    })?;
    Ok(event)
}
