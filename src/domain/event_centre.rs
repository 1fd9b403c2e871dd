use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::Entity;
use crate::domain::types::{
    Capacity, CentreAddress, CentreName, EventCentreId, TypeConstraintError,
};

/// Venue that can be booked to host events.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventCentre {
    pub id: EventCentreId,
    pub name: CentreName,
    pub address: CentreAddress,
    pub capacity: Capacity,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EventCentre {
    pub fn try_new(
        id: i32,
        name: String,
        address: String,
        capacity: i32,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: EventCentreId::new(id)?,
            name: CentreName::new(name)?,
            address: CentreAddress::new(address)?,
            capacity: Capacity::new(capacity)?,
            created_at,
            updated_at,
        })
    }
}

impl Entity for EventCentre {
    type Key = EventCentreId;

    fn id(&self) -> Self::Key {
        self.id
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewEventCentre {
    pub name: CentreName,
    pub address: CentreAddress,
    pub capacity: Capacity,
}

impl NewEventCentre {
    #[must_use]
    pub fn new(name: CentreName, address: CentreAddress, capacity: Capacity) -> Self {
        Self {
            name,
            address,
            capacity,
        }
    }
}
