use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::EventListParams;
use crate::forms::events::{AddEventForm, BookCentreForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::events as event_service;

#[get("/v1/events")]
pub async fn list_events(
    params: web::Query<EventListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match event_service::list_events(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[post("/v1/events")]
pub async fn add_event(
    form: web::Json<AddEventForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match event_service::create_event(repo.get_ref(), form.into_inner()) {
        Ok(event) => HttpResponse::Created().json(event),
        Err(err) => error_response(err),
    }
}

#[get("/v1/events/{event_id}")]
pub async fn show_event(
    event_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match event_service::get_event(repo.get_ref(), event_id.into_inner()) {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(err) => error_response(err),
    }
}

#[post("/v1/events/{event_id}/booking")]
pub async fn book_centre(
    event_id: web::Path<i32>,
    form: web::Json<BookCentreForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match event_service::book_centre(repo.get_ref(), event_id.into_inner(), form.into_inner()) {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(err) => error_response(err),
    }
}
