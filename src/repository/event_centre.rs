use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::event_centre::{EventCentre, NewEventCentre};
use crate::domain::types::EventCentreId;
use crate::models::event_centre::{
    EventCentre as DbEventCentre, NewEventCentre as DbNewEventCentre,
};
use crate::pagination::PagedList;
use crate::repository::errors::RepositoryResult;
use crate::repository::table::{QueryFilter, contains_pattern};
use crate::repository::{
    DieselRepository, EventCentreFilter, EventCentreReader, EventCentreWriter, ListQuery,
};
use crate::schema::event_centres;

crate::table_entity!(EventCentre, DbEventCentre, event_centres, EventCentreFilter);

impl QueryFilter<event_centres::BoxedQuery<'static, Sqlite>> for EventCentreFilter {
    fn apply(
        &self,
        mut query: event_centres::BoxedQuery<'static, Sqlite>,
    ) -> event_centres::BoxedQuery<'static, Sqlite> {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = contains_pattern(term);
            query = query.filter(
                event_centres::name
                    .like(pattern.clone())
                    .escape('\\')
                    .or(event_centres::address.like(pattern).escape('\\')),
            );
        }
        if let Some(capacity) = self.min_capacity {
            query = query.filter(event_centres::capacity.ge(capacity));
        }
        query
    }
}

impl EventCentreReader for DieselRepository {
    fn get_centre_by_id(&self, id: EventCentreId) -> RepositoryResult<Option<EventCentre>> {
        let mut conn = self.conn()?;
        let centre = event_centres::table
            .find(id.get())
            .first::<DbEventCentre>(&mut conn)
            .optional()?;

        Ok(centre.map(EventCentre::try_from).transpose()?)
    }

    fn list_centres(
        &self,
        query: ListQuery<EventCentreFilter>,
    ) -> RepositoryResult<PagedList<EventCentre>> {
        self.entities::<EventCentre>()
            .get_all_paginated(query.page, query.sort, query.filter.as_ref())
    }
}

impl EventCentreWriter for DieselRepository {
    fn create_centre(&self, new_centre: &NewEventCentre) -> RepositoryResult<EventCentre> {
        let mut conn = self.conn()?;
        let insertable: DbNewEventCentre = new_centre.into();

        let created = diesel::insert_into(event_centres::table)
            .values(&insertable)
            .get_result::<DbEventCentre>(&mut conn)?;

        Ok(created.try_into()?)
    }
}
