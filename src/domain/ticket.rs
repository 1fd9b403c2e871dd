use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::Entity;
use crate::domain::types::{
    EmailAddress, EventId, HolderName, Price, TicketCode, TicketId, TypeConstraintError,
};

/// Admission ticket issued for a single event.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub event_id: EventId,
    pub holder_name: HolderName,
    pub holder_email: EmailAddress,
    pub code: TicketCode,
    /// Price paid, copied from the event when the ticket was issued.
    pub price: Price,
    pub created_at: NaiveDateTime,
}

impl Ticket {
    pub fn try_new(
        id: i32,
        event_id: i32,
        holder_name: String,
        holder_email: String,
        code: &str,
        price: i64,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: TicketId::new(id)?,
            event_id: EventId::new(event_id)?,
            holder_name: HolderName::new(holder_name)?,
            holder_email: EmailAddress::new(holder_email)?,
            code: code.parse()?,
            price: Price::new(price)?,
            created_at,
        })
    }
}

impl Entity for Ticket {
    type Key = TicketId;

    fn id(&self) -> Self::Key {
        self.id
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

/// Request to issue a ticket; the code and price are assigned on issue.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTicket {
    pub event_id: EventId,
    pub holder_name: HolderName,
    pub holder_email: EmailAddress,
}

impl NewTicket {
    #[must_use]
    pub fn new(event_id: EventId, holder_name: HolderName, holder_email: EmailAddress) -> Self {
        Self {
            event_id,
            holder_name,
            holder_email,
        }
    }
}
