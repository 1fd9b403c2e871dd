use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::event::{Event, NewEvent};
use crate::domain::event_centre::{EventCentre, NewEventCentre};
use crate::domain::ticket::{NewTicket, Ticket};
use crate::domain::types::{EmailAddress, EventCentreId, EventId, TicketCode};
use crate::pagination::{PageRequest, PagedList, SortDirection};
use crate::repository::errors::RepositoryResult;
use crate::repository::table::{DatabaseRepository, TableEntity};

pub mod errors;
pub mod event;
pub mod event_centre;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod table;
pub mod ticket;

/// Page, order and optional filter of a listing.
#[derive(Debug, Clone)]
pub struct ListQuery<F> {
    pub page: PageRequest,
    pub sort: Option<SortDirection>,
    pub filter: Option<F>,
}

impl<F> ListQuery<F> {
    pub fn new() -> Self {
        Self {
            page: PageRequest::default(),
            sort: None,
            filter: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = PageRequest::new(page, per_page);
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    pub fn sort(mut self, direction: SortDirection) -> Self {
        self.sort = Some(direction);
        self
    }

    pub fn filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCentreFilter {
    pub search: Option<String>,
    pub min_capacity: Option<i32>,
}

impl EventCentreFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn min_capacity(mut self, capacity: i32) -> Self {
        self.min_capacity = Some(capacity);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub centre_id: Option<EventCentreId>,
    pub organizer_email: Option<EmailAddress>,
    pub search: Option<String>,
    pub starts_after: Option<NaiveDateTime>,
    pub starts_before: Option<NaiveDateTime>,
}

impl EventFilter {
    pub fn centre(mut self, centre_id: EventCentreId) -> Self {
        self.centre_id = Some(centre_id);
        self
    }

    pub fn organizer(mut self, email: EmailAddress) -> Self {
        self.organizer_email = Some(email);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Keeps events starting in `[after, before)`; either bound may be open.
    pub fn starts_between(
        mut self,
        after: Option<NaiveDateTime>,
        before: Option<NaiveDateTime>,
    ) -> Self {
        self.starts_after = after;
        self.starts_before = before;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketFilter {
    pub event_id: Option<EventId>,
    pub holder_email: Option<EmailAddress>,
}

impl TicketFilter {
    pub fn event(mut self, event_id: EventId) -> Self {
        self.event_id = Some(event_id);
        self
    }

    pub fn holder(mut self, email: EmailAddress) -> Self {
        self.holder_email = Some(email);
        self
    }
}

pub trait EventCentreReader {
    fn get_centre_by_id(&self, id: EventCentreId) -> RepositoryResult<Option<EventCentre>>;
    fn list_centres(
        &self,
        query: ListQuery<EventCentreFilter>,
    ) -> RepositoryResult<PagedList<EventCentre>>;
}

pub trait EventCentreWriter {
    fn create_centre(&self, new_centre: &NewEventCentre) -> RepositoryResult<EventCentre>;
}

pub trait EventReader {
    fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>>;
    fn list_events(&self, query: ListQuery<EventFilter>) -> RepositoryResult<PagedList<Event>>;
}

pub trait EventWriter {
    fn create_event(&self, new_event: &NewEvent) -> RepositoryResult<Event>;
    /// Books the centre for the event unless another event already holds it
    /// for an overlapping time range or the event has sold more tickets than
    /// the centre holds.
    fn book_centre(&self, event_id: EventId, centre_id: EventCentreId)
    -> RepositoryResult<Event>;
}

pub trait TicketReader {
    fn get_ticket_by_code(&self, code: TicketCode) -> RepositoryResult<Option<Ticket>>;
    fn list_tickets(&self, query: ListQuery<TicketFilter>) -> RepositoryResult<PagedList<Ticket>>;
    /// Tickets for every event run by the organizer.
    fn list_organizer_tickets(
        &self,
        organizer: &EmailAddress,
        query: ListQuery<TicketFilter>,
    ) -> RepositoryResult<PagedList<Ticket>>;
}

pub trait TicketWriter {
    /// Issues a ticket at the event's current price, refusing once the booked
    /// centre is full.
    fn issue_ticket(&self, new_ticket: &NewTicket) -> RepositoryResult<Ticket>;
}

/// Diesel-backed implementation of every reader and writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }

    /// Paginated read access to one entity table.
    pub fn entities<E: TableEntity>(&self) -> DatabaseRepository<'_, E> {
        DatabaseRepository::new(&self.pool)
    }
}
