//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::event::{Event, NewEvent};
use crate::domain::event_centre::{EventCentre, NewEventCentre};
use crate::domain::ticket::{NewTicket, Ticket};
use crate::domain::types::{EmailAddress, EventCentreId, EventId, TicketCode};
use crate::pagination::PagedList;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    EventCentreFilter, EventCentreReader, EventCentreWriter, EventFilter, EventReader,
    EventWriter, ListQuery, TicketFilter, TicketReader, TicketWriter,
};

mock! {
    pub Repository {}

    impl EventCentreReader for Repository {
        fn get_centre_by_id(&self, id: EventCentreId) -> RepositoryResult<Option<EventCentre>>;
        fn list_centres(
            &self,
            query: ListQuery<EventCentreFilter>,
        ) -> RepositoryResult<PagedList<EventCentre>>;
    }

    impl EventCentreWriter for Repository {
        fn create_centre(&self, new_centre: &NewEventCentre) -> RepositoryResult<EventCentre>;
    }

    impl EventReader for Repository {
        fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>>;
        fn list_events(&self, query: ListQuery<EventFilter>) -> RepositoryResult<PagedList<Event>>;
    }

    impl EventWriter for Repository {
        fn create_event(&self, new_event: &NewEvent) -> RepositoryResult<Event>;
        fn book_centre(
            &self,
            event_id: EventId,
            centre_id: EventCentreId,
        ) -> RepositoryResult<Event>;
    }

    impl TicketReader for Repository {
        fn get_ticket_by_code(&self, code: TicketCode) -> RepositoryResult<Option<Ticket>>;
        fn list_tickets(&self, query: ListQuery<TicketFilter>) -> RepositoryResult<PagedList<Ticket>>;
        fn list_organizer_tickets(
            &self,
            organizer: &EmailAddress,
            query: ListQuery<TicketFilter>,
        ) -> RepositoryResult<PagedList<Ticket>>;
    }

    impl TicketWriter for Repository {
        fn issue_ticket(&self, new_ticket: &NewTicket) -> RepositoryResult<Ticket>;
    }
}
