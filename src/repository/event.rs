use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::event::{Event, NewEvent};
use crate::domain::types::{EventCentreId, EventId};
use crate::models::event::{Event as DbEvent, NewEvent as DbNewEvent};
use crate::pagination::PagedList;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::table::{QueryFilter, contains_pattern};
use crate::repository::{DieselRepository, EventFilter, EventReader, EventWriter, ListQuery};
use crate::schema::{event_centres, events, tickets};

crate::table_entity!(Event, DbEvent, events, EventFilter);

impl QueryFilter<events::BoxedQuery<'static, Sqlite>> for EventFilter {
    fn apply(
        &self,
        mut query: events::BoxedQuery<'static, Sqlite>,
    ) -> events::BoxedQuery<'static, Sqlite> {
        if let Some(centre_id) = self.centre_id {
            query = query.filter(events::centre_id.eq(centre_id.get()));
        }
        if let Some(email) = &self.organizer_email {
            query = query.filter(events::organizer_email.eq(email.as_str().to_owned()));
        }
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(events::title.like(contains_pattern(term)).escape('\\'));
        }
        if let Some(after) = self.starts_after {
            query = query.filter(events::starts_at.ge(after));
        }
        if let Some(before) = self.starts_before {
            query = query.filter(events::starts_at.lt(before));
        }
        query
    }
}

impl EventReader for DieselRepository {
    fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>> {
        let mut conn = self.conn()?;
        let event = events::table
            .find(id.get())
            .first::<DbEvent>(&mut conn)
            .optional()?;

        Ok(event.map(Event::try_from).transpose()?)
    }

    fn list_events(&self, query: ListQuery<EventFilter>) -> RepositoryResult<PagedList<Event>> {
        self.entities::<Event>()
            .get_all_paginated(query.page, query.sort, query.filter.as_ref())
    }
}

impl EventWriter for DieselRepository {
    fn create_event(&self, new_event: &NewEvent) -> RepositoryResult<Event> {
        let mut conn = self.conn()?;
        let insertable: DbNewEvent = new_event.into();

        let created = diesel::insert_into(events::table)
            .values(&insertable)
            .get_result::<DbEvent>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn book_centre(
        &self,
        event_id: EventId,
        centre_id: EventCentreId,
    ) -> RepositoryResult<Event> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let event = events::table
                .find(event_id.get())
                .first::<DbEvent>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound("event"))?;

            let capacity: i32 = event_centres::table
                .find(centre_id.get())
                .select(event_centres::capacity)
                .first(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound("event centre"))?;

            let clashes: i64 = events::table
                .filter(events::centre_id.eq(centre_id.get()))
                .filter(events::id.ne(event.id))
                .filter(events::starts_at.lt(event.ends_at))
                .filter(events::ends_at.gt(event.starts_at))
                .count()
                .get_result(conn)?;
            if clashes > 0 {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "event centre {centre_id} is already booked at that time"
                )));
            }

            let issued: i64 = tickets::table
                .filter(tickets::event_id.eq(event.id))
                .count()
                .get_result(conn)?;
            if issued > i64::from(capacity) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "event {event_id} has {issued} tickets but centre {centre_id} holds {capacity}"
                )));
            }

            let updated = diesel::update(events::table.find(event.id))
                .set((
                    events::centre_id.eq(Some(centre_id.get())),
                    events::updated_at.eq(Utc::now().naive_utc()),
                ))
                .get_result::<DbEvent>(conn)?;

            log::info!("Booked event centre {centre_id} for event {event_id}");

            Ok(updated.try_into()?)
        })
    }
}
