//! Forms for registering events and booking centres.

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::event::NewEvent;
use crate::domain::types::{
    EmailAddress, EventCentreId, EventDescription, EventTitle, Price,
};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddEventForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(email)]
    pub organizer_email: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub ticket_price: i64,
}

impl TryFrom<AddEventForm> for NewEvent {
    type Error = FormError;

    fn try_from(form: AddEventForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let description = form
            .description
            .filter(|text| !text.trim().is_empty())
            .map(EventDescription::new)
            .transpose()?;

        Ok(NewEvent::try_new(
            EventTitle::new(form.title)?,
            description,
            EmailAddress::new(form.organizer_email)?,
            form.starts_at,
            form.ends_at,
            Price::new(form.ticket_price)?,
        )?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCentreForm {
    pub centre_id: i32,
}

impl TryFrom<BookCentreForm> for EventCentreId {
    type Error = FormError;

    fn try_from(form: BookCentreForm) -> Result<Self, Self::Error> {
        Ok(EventCentreId::new(form.centre_id)?)
    }
}
