//! Diesel models for event centres.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::event_centre::{
    EventCentre as DomainEventCentre, NewEventCentre as DomainNewEventCentre,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::event_centres)]
/// Diesel model for [`crate::domain::event_centre::EventCentre`].
pub struct EventCentre {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::event_centres)]
/// Insertable form of [`EventCentre`].
pub struct NewEventCentre<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub capacity: i32,
}

impl TryFrom<EventCentre> for DomainEventCentre {
    type Error = TypeConstraintError;

    fn try_from(centre: EventCentre) -> Result<Self, Self::Error> {
        DomainEventCentre::try_new(
            centre.id,
            centre.name,
            centre.address,
            centre.capacity,
            centre.created_at,
            centre.updated_at,
        )
    }
}

impl<'a> From<&'a DomainNewEventCentre> for NewEventCentre<'a> {
    fn from(centre: &'a DomainNewEventCentre) -> Self {
        Self {
            name: centre.name.as_str(),
            address: centre.address.as_str(),
            capacity: centre.capacity.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{Capacity, CentreAddress, CentreName};

    #[test]
    fn row_into_domain_validates_capacity() {
        let now = Utc::now().naive_utc();
        let row = EventCentre {
            id: 3,
            name: "Main Hall".to_string(),
            address: "1 Market St".to_string(),
            capacity: 0,
            created_at: now,
            updated_at: now,
        };
        let result: Result<DomainEventCentre, _> = row.try_into();
        assert_eq!(result, Err(TypeConstraintError::NonPositiveCapacity));
    }

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewEventCentre::new(
            CentreName::new("Main Hall").unwrap(),
            CentreAddress::new("1 Market St").unwrap(),
            Capacity::new(250).unwrap(),
        );
        let insertable: NewEventCentre = (&domain).into();
        assert_eq!(insertable.name, "Main Hall");
        assert_eq!(insertable.address, "1 Market St");
        assert_eq!(insertable.capacity, 250);
    }
}
