//! DTO modules that bridge the HTTP layer with services.

pub mod api;
