use crate::domain::ticket::Ticket;
use crate::domain::types::{EmailAddress, EventId, TicketCode};
use crate::dto::api::TicketListParams;
use crate::forms::tickets::IssueTicketForm;
use crate::pagination::PagedList;
use crate::repository::{EventReader, TicketReader, TicketWriter};
use crate::services::{ServiceError, ServiceResult};

/// Issues a ticket for the event at its current price.
pub fn issue_ticket<R>(repo: &R, event_id: i32, form: IssueTicketForm) -> ServiceResult<Ticket>
where
    R: TicketWriter + ?Sized,
{
    let new_ticket = form.into_new_ticket(EventId::new(event_id)?)?;
    let ticket = repo.issue_ticket(&new_ticket)?;
    log::info!("Issued ticket {} for event {}", ticket.code, ticket.event_id);
    Ok(ticket)
}

/// Looks a ticket up by the code printed on it.
pub fn get_ticket<R>(repo: &R, code: &str) -> ServiceResult<Ticket>
where
    R: TicketReader + ?Sized,
{
    let code: TicketCode = code.parse()?;
    repo.get_ticket_by_code(code)?
        .ok_or_else(|| ServiceError::NotFound("ticket".to_string()))
}

/// Lists the tickets of one event; unknown events are reported as missing
/// rather than as an empty page.
pub fn list_event_tickets<R>(
    repo: &R,
    event_id: i32,
    params: TicketListParams,
) -> ServiceResult<PagedList<Ticket>>
where
    R: EventReader + TicketReader + ?Sized,
{
    let event_id = EventId::new(event_id)?;
    if repo.get_event_by_id(event_id)?.is_none() {
        return Err(ServiceError::NotFound("event".to_string()));
    }

    let mut query = params.into_query()?;
    query.filter = Some(query.filter.unwrap_or_default().event(event_id));
    Ok(repo.list_tickets(query)?)
}

/// Lists tickets sold across every event of the organizer.
pub fn list_organizer_tickets<R>(
    repo: &R,
    organizer: &str,
    params: TicketListParams,
) -> ServiceResult<PagedList<Ticket>>
where
    R: TicketReader + ?Sized,
{
    let organizer = EmailAddress::new(organizer)?;
    let query = params.into_query()?;
    Ok(repo.list_organizer_tickets(&organizer, query)?)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::event::Event;
    use crate::domain::ticket::NewTicket;
    use crate::domain::types::{EventTitle, Price, TicketId};
    use crate::pagination::{PageSource, SliceSource};
    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::repository::{EventFilter, ListQuery, TicketFilter};

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn event(id: i32, organizer: &str) -> Event {
        Event {
            id: EventId::new(id).unwrap(),
            centre_id: None,
            title: EventTitle::new(format!("Event {id}")).unwrap(),
            description: None,
            organizer_email: EmailAddress::new(organizer).unwrap(),
            starts_at: base_time() + Duration::days(10),
            ends_at: base_time() + Duration::days(11),
            ticket_price: Price::new(2500).unwrap(),
            created_at: base_time(),
            updated_at: base_time(),
        }
    }

    struct MockRepo {
        events: Vec<Event>,
        tickets: RefCell<Vec<Ticket>>,
        /// Number of tickets an event may have before it is sold out.
        capacity: usize,
    }

    impl MockRepo {
        fn new(events: Vec<Event>, capacity: usize) -> Self {
            Self {
                events,
                tickets: RefCell::new(Vec::new()),
                capacity,
            }
        }

        fn page_of(
            &self,
            keep: &dyn Fn(&Ticket) -> bool,
            query: &ListQuery<TicketFilter>,
        ) -> RepositoryResult<PagedList<Ticket>> {
            let tickets = self.tickets.borrow();
            let filter = query.filter.clone().unwrap_or_default();
            let combined: &dyn Fn(&Ticket) -> bool = &|ticket| {
                keep(ticket)
                    && filter.event_id.is_none_or(|id| ticket.event_id == id)
                    && filter
                        .holder_email
                        .as_ref()
                        .is_none_or(|email| &ticket.holder_email == email)
            };
            let mut source = SliceSource::ordered(&tickets, query.sort.unwrap_or_default());
            PagedList::build(&mut source, Some(combined), query.page)
        }
    }

    impl EventReader for MockRepo {
        fn get_event_by_id(&self, id: EventId) -> RepositoryResult<Option<Event>> {
            Ok(self.events.iter().find(|e| e.id == id).cloned())
        }

        fn list_events(&self, query: ListQuery<EventFilter>) -> RepositoryResult<PagedList<Event>> {
            let mut source = SliceSource::ordered(&self.events, query.sort.unwrap_or_default());
            let total = source.count(None)?;
            let items = source.fetch(None, query.page.offset(), query.page.page_size())?;
            Ok(PagedList::new(items, total, query.page))
        }
    }

    impl TicketReader for MockRepo {
        fn get_ticket_by_code(&self, code: TicketCode) -> RepositoryResult<Option<Ticket>> {
            Ok(self.tickets.borrow().iter().find(|t| t.code == code).cloned())
        }

        fn list_tickets(&self, query: ListQuery<TicketFilter>) -> RepositoryResult<PagedList<Ticket>> {
            self.page_of(&|_| true, &query)
        }

        fn list_organizer_tickets(
            &self,
            organizer: &EmailAddress,
            query: ListQuery<TicketFilter>,
        ) -> RepositoryResult<PagedList<Ticket>> {
            let owned: Vec<EventId> = self
                .events
                .iter()
                .filter(|e| &e.organizer_email == organizer)
                .map(|e| e.id)
                .collect();
            self.page_of(&|ticket| owned.contains(&ticket.event_id), &query)
        }
    }

    impl TicketWriter for MockRepo {
        fn issue_ticket(&self, new_ticket: &NewTicket) -> RepositoryResult<Ticket> {
            let event = self
                .events
                .iter()
                .find(|e| e.id == new_ticket.event_id)
                .ok_or(RepositoryError::NotFound("event"))?;
            let mut tickets = self.tickets.borrow_mut();
            let sold = tickets.iter().filter(|t| t.event_id == event.id).count();
            if sold >= self.capacity {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "event {} is sold out",
                    event.id
                )));
            }
            let id = i32::try_from(tickets.len()).unwrap() + 1;
            let ticket = Ticket {
                id: TicketId::new(id).unwrap(),
                event_id: event.id,
                holder_name: new_ticket.holder_name.clone(),
                holder_email: new_ticket.holder_email.clone(),
                code: TicketCode::new(),
                price: event.ticket_price,
                created_at: base_time() + Duration::minutes(id.into()),
            };
            tickets.push(ticket.clone());
            Ok(ticket)
        }
    }

    fn form(name: &str) -> IssueTicketForm {
        IssueTicketForm {
            holder_name: name.to_string(),
            holder_email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn issued_ticket_carries_event_price_and_is_found_by_code() {
        let repo = MockRepo::new(vec![event(1, "org@example.com")], 10);
        let ticket = issue_ticket(&repo, 1, form("Grace")).unwrap();
        assert_eq!(ticket.price.get(), 2500);

        let found = get_ticket(&repo, &ticket.code.to_string()).unwrap();
        assert_eq!(found, ticket);
        assert!(matches!(
            get_ticket(&repo, "not-a-code"),
            Err(ServiceError::TypeConstraint(_))
        ));
    }

    #[test]
    fn sold_out_event_is_a_conflict() {
        let repo = MockRepo::new(vec![event(1, "org@example.com")], 1);
        issue_ticket(&repo, 1, form("Grace")).unwrap();
        assert!(matches!(
            issue_ticket(&repo, 1, form("Alan")),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn event_tickets_require_existing_event() {
        let repo = MockRepo::new(vec![event(1, "org@example.com")], 10);
        assert!(matches!(
            list_event_tickets(&repo, 2, TicketListParams::default()),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn event_tickets_are_scoped_to_the_event() {
        let repo = MockRepo::new(
            vec![event(1, "org@example.com"), event(2, "org@example.com")],
            10,
        );
        for name in ["Ada", "Grace", "Alan"] {
            issue_ticket(&repo, 1, form(name)).unwrap();
        }
        issue_ticket(&repo, 2, form("Edsger")).unwrap();

        let page = list_event_tickets(&repo, 1, TicketListParams::default()).unwrap();
        assert_eq!(page.total_count(), 3);
        assert_eq!(page.items()[0].holder_name.as_str(), "Alan");
    }

    #[test]
    fn organizer_tickets_span_their_events() {
        let repo = MockRepo::new(
            vec![
                event(1, "org@example.com"),
                event(2, "org@example.com"),
                event(3, "other@example.com"),
            ],
            10,
        );
        for event_id in 1..=3 {
            issue_ticket(&repo, event_id, form("Ada")).unwrap();
            issue_ticket(&repo, event_id, form("Grace")).unwrap();
        }

        let params = TicketListParams {
            page_size: Some(3),
            ..Default::default()
        };
        let page = list_organizer_tickets(&repo, "ORG@example.com", params).unwrap();
        assert_eq!(page.total_count(), 4);
        assert_eq!(page.total_pages(), 2);
        assert!(page.items().iter().all(|t| t.event_id.get() <= 2));
    }
}
