//! Forms for registering event centres.

use serde::Deserialize;
use validator::Validate;

use crate::domain::event_centre::NewEventCentre;
use crate::domain::types::{Capacity, CentreAddress, CentreName};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddEventCentreForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
}

impl TryFrom<AddEventCentreForm> for NewEventCentre {
    type Error = FormError;

    fn try_from(form: AddEventCentreForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewEventCentre::new(
            CentreName::new(form.name)?,
            CentreAddress::new(form.address)?,
            Capacity::new(form.capacity)?,
        ))
    }
}
