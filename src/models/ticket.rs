//! Diesel models for issued tickets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::ticket::{NewTicket as DomainNewTicket, Ticket as DomainTicket};
use crate::domain::types::{Price, TicketCode, TypeConstraintError};
use crate::models::event::Event;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Event, foreign_key = event_id))]
#[diesel(table_name = crate::schema::tickets)]
/// Diesel model for [`crate::domain::ticket::Ticket`].
pub struct Ticket {
    pub id: i32,
    pub event_id: i32,
    pub holder_name: String,
    pub holder_email: String,
    pub code: String,
    pub price: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tickets)]
/// Insertable form of [`Ticket`].
pub struct NewTicket<'a> {
    pub event_id: i32,
    pub holder_name: &'a str,
    pub holder_email: &'a str,
    pub code: String,
    pub price: i64,
}

impl<'a> NewTicket<'a> {
    /// Builds the row for a ticket about to be issued at the given price.
    pub fn issue(ticket: &'a DomainNewTicket, code: TicketCode, price: Price) -> Self {
        Self {
            event_id: ticket.event_id.get(),
            holder_name: ticket.holder_name.as_str(),
            holder_email: ticket.holder_email.as_str(),
            code: code.to_string(),
            price: price.get(),
        }
    }
}

impl TryFrom<Ticket> for DomainTicket {
    type Error = TypeConstraintError;

    fn try_from(ticket: Ticket) -> Result<Self, Self::Error> {
        DomainTicket::try_new(
            ticket.id,
            ticket.event_id,
            ticket.holder_name,
            ticket.holder_email,
            &ticket.code,
            ticket.price,
            ticket.created_at,
        )
    }
}
