use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::ticket::{NewTicket, Ticket};
use crate::domain::types::{EmailAddress, Price, TicketCode};
use crate::models::event::Event as DbEvent;
use crate::models::ticket::{NewTicket as DbNewTicket, Ticket as DbTicket};
use crate::pagination::PagedList;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::table::QueryFilter;
use crate::repository::{DieselRepository, ListQuery, TicketFilter, TicketReader, TicketWriter};
use crate::schema::{event_centres, events, tickets};

crate::table_entity!(Ticket, DbTicket, tickets, TicketFilter);

impl QueryFilter<tickets::BoxedQuery<'static, Sqlite>> for TicketFilter {
    fn apply(
        &self,
        mut query: tickets::BoxedQuery<'static, Sqlite>,
    ) -> tickets::BoxedQuery<'static, Sqlite> {
        if let Some(event_id) = self.event_id {
            query = query.filter(tickets::event_id.eq(event_id.get()));
        }
        if let Some(email) = &self.holder_email {
            query = query.filter(tickets::holder_email.eq(email.as_str().to_owned()));
        }
        query
    }
}

impl TicketReader for DieselRepository {
    fn get_ticket_by_code(&self, code: TicketCode) -> RepositoryResult<Option<Ticket>> {
        let mut conn = self.conn()?;
        let ticket = tickets::table
            .filter(tickets::code.eq(code.to_string()))
            .first::<DbTicket>(&mut conn)
            .optional()?;

        Ok(ticket.map(Ticket::try_from).transpose()?)
    }

    fn list_tickets(&self, query: ListQuery<TicketFilter>) -> RepositoryResult<PagedList<Ticket>> {
        self.entities::<Ticket>()
            .get_all_paginated(query.page, query.sort, query.filter.as_ref())
    }

    fn list_organizer_tickets(
        &self,
        organizer: &EmailAddress,
        query: ListQuery<TicketFilter>,
    ) -> RepositoryResult<PagedList<Ticket>> {
        let organizer = organizer.as_str().to_owned();

        self.entities::<Ticket>().get_paginated_from(
            move || {
                let organizer_events = events::table
                    .filter(events::organizer_email.eq(organizer.clone()))
                    .select(events::id);
                tickets::table
                    .filter(tickets::event_id.eq_any(organizer_events))
                    .into_boxed::<Sqlite>()
            },
            query.page,
            query.sort,
            query.filter.as_ref(),
        )
    }
}

impl TicketWriter for DieselRepository {
    fn issue_ticket(&self, new_ticket: &NewTicket) -> RepositoryResult<Ticket> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let event = events::table
                .find(new_ticket.event_id.get())
                .first::<DbEvent>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound("event"))?;

            if let Some(centre_id) = event.centre_id {
                let capacity: i32 = event_centres::table
                    .find(centre_id)
                    .select(event_centres::capacity)
                    .first(conn)?;
                let issued: i64 = tickets::table
                    .filter(tickets::event_id.eq(event.id))
                    .count()
                    .get_result(conn)?;
                if issued >= i64::from(capacity) {
                    return Err(RepositoryError::ConstraintViolation(format!(
                        "event {} is sold out",
                        event.id
                    )));
                }
            }

            let price = Price::new(event.ticket_price)?;
            let insertable = DbNewTicket::issue(new_ticket, TicketCode::new(), price);
            let created = diesel::insert_into(tickets::table)
                .values(&insertable)
                .get_result::<DbTicket>(conn)?;

            Ok(created.try_into()?)
        })
    }
}
