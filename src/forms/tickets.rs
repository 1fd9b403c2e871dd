//! Forms for issuing tickets.

use serde::Deserialize;
use validator::Validate;

use crate::domain::ticket::NewTicket;
use crate::domain::types::{EmailAddress, EventId, HolderName};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueTicketForm {
    #[validate(length(min = 1, max = 200))]
    pub holder_name: String,
    #[validate(email)]
    pub holder_email: String,
}

impl IssueTicketForm {
    /// Validates the form and binds it to the event the ticket admits to.
    pub fn into_new_ticket(self, event_id: EventId) -> Result<NewTicket, FormError> {
        self.validate()?;
        Ok(NewTicket::new(
            event_id,
            HolderName::new(self.holder_name)?,
            EmailAddress::new(self.holder_email)?,
        ))
    }
}
