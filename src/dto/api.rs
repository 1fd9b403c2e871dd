//! Query parameters accepted by the listing endpoints of the `/api/v1` scope.
//!
//! Every listing takes the same `page`, `pageSize` and `sort` parameters plus
//! endpoint specific filters. Blank filter values are treated as absent.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::types::{EmailAddress, EventCentreId, TypeConstraintError};
use crate::pagination::{PageRequest, SortDirection};
use crate::repository::{EventCentreFilter, EventFilter, ListQuery, TicketFilter};

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Paging parameters shared by all listings.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<SortDirection>,
}

impl PageParams {
    fn into_query<F>(self) -> ListQuery<F> {
        let query = ListQuery::new().page(PageRequest::from_parts(self.page, self.page_size));
        match self.sort {
            Some(direction) => query.sort(direction),
            None => query,
        }
    }
}

/// Query parameters of `GET /api/v1/centres`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentreListParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<SortDirection>,
    /// Substring matched against the centre name and address.
    pub search: Option<String>,
    pub min_capacity: Option<i32>,
}

impl CentreListParams {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
            sort: self.sort,
        }
    }

    pub fn into_query(self) -> ListQuery<EventCentreFilter> {
        let query = self.page_params().into_query();
        let mut filter = EventCentreFilter::default();
        if let Some(term) = non_blank(self.search) {
            filter = filter.search(term);
        }
        if let Some(capacity) = self.min_capacity {
            filter = filter.min_capacity(capacity);
        }
        if filter == EventCentreFilter::default() {
            query
        } else {
            query.filter(filter)
        }
    }
}

/// Query parameters of `GET /api/v1/events`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<SortDirection>,
    /// Substring matched against the event title.
    pub search: Option<String>,
    pub centre_id: Option<i32>,
    pub organizer: Option<String>,
    pub starts_after: Option<NaiveDateTime>,
    pub starts_before: Option<NaiveDateTime>,
}

impl EventListParams {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
            sort: self.sort,
        }
    }

    /// Fails when the centre id or organizer email are malformed.
    pub fn into_query(self) -> Result<ListQuery<EventFilter>, TypeConstraintError> {
        let query = self.page_params().into_query();
        let mut filter = EventFilter::default()
            .starts_between(self.starts_after, self.starts_before);
        if let Some(term) = non_blank(self.search) {
            filter = filter.search(term);
        }
        if let Some(centre_id) = self.centre_id {
            filter = filter.centre(EventCentreId::new(centre_id)?);
        }
        if let Some(email) = non_blank(self.organizer) {
            filter = filter.organizer(EmailAddress::new(email)?);
        }
        if filter == EventFilter::default() {
            Ok(query)
        } else {
            Ok(query.filter(filter))
        }
    }
}

/// Query parameters of the ticket listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketListParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub sort: Option<SortDirection>,
    /// Restricts the listing to one ticket holder.
    pub holder: Option<String>,
}

impl TicketListParams {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
            sort: self.sort,
        }
    }

    /// The returned query always carries a filter so callers can scope it further.
    pub fn into_query(self) -> Result<ListQuery<TicketFilter>, TypeConstraintError> {
        let query = self.page_params().into_query();
        let mut filter = TicketFilter::default();
        if let Some(email) = non_blank(self.holder) {
            filter = filter.holder(EmailAddress::new(email)?);
        }
        Ok(query.filter(filter))
    }
}
