//! Database models mapping Diesel rows onto domain aggregates.

pub mod config;
pub mod event;
pub mod event_centre;
pub mod ticket;
