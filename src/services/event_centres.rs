use crate::domain::event_centre::{EventCentre, NewEventCentre};
use crate::domain::types::EventCentreId;
use crate::dto::api::CentreListParams;
use crate::forms::event_centres::AddEventCentreForm;
use crate::pagination::PagedList;
use crate::repository::{EventCentreReader, EventCentreWriter};
use crate::services::{ServiceError, ServiceResult};

/// Registers a new event centre from the submitted form.
pub fn create_centre<R>(repo: &R, form: AddEventCentreForm) -> ServiceResult<EventCentre>
where
    R: EventCentreWriter + ?Sized,
{
    let new_centre = NewEventCentre::try_from(form)?;
    let centre = repo.create_centre(&new_centre)?;
    log::info!("Registered event centre {} ({})", centre.id, centre.name);
    Ok(centre)
}

pub fn get_centre<R>(repo: &R, centre_id: i32) -> ServiceResult<EventCentre>
where
    R: EventCentreReader + ?Sized,
{
    let centre_id = EventCentreId::new(centre_id)?;
    repo.get_centre_by_id(centre_id)?
        .ok_or_else(|| ServiceError::NotFound("event centre".to_string()))
}

/// Returns one page of centres matching the listing parameters.
pub fn list_centres<R>(repo: &R, params: CentreListParams) -> ServiceResult<PagedList<EventCentre>>
where
    R: EventCentreReader + ?Sized,
{
    Ok(repo.list_centres(params.into_query())?)
}
