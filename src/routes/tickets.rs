use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::TicketListParams;
use crate::forms::tickets::IssueTicketForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tickets as ticket_service;

#[get("/v1/events/{event_id}/tickets")]
pub async fn list_event_tickets(
    event_id: web::Path<i32>,
    params: web::Query<TicketListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ticket_service::list_event_tickets(
        repo.get_ref(),
        event_id.into_inner(),
        params.into_inner(),
    ) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[post("/v1/events/{event_id}/tickets")]
pub async fn issue_ticket(
    event_id: web::Path<i32>,
    form: web::Json<IssueTicketForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ticket_service::issue_ticket(repo.get_ref(), event_id.into_inner(), form.into_inner()) {
        Ok(ticket) => HttpResponse::Created().json(ticket),
        Err(err) => error_response(err),
    }
}

#[get("/v1/tickets/{code}")]
pub async fn show_ticket(
    code: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ticket_service::get_ticket(repo.get_ref(), &code) {
        Ok(ticket) => HttpResponse::Ok().json(ticket),
        Err(err) => error_response(err),
    }
}

#[get("/v1/organizers/{email}/tickets")]
pub async fn list_organizer_tickets(
    email: web::Path<String>,
    params: web::Query<TicketListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ticket_service::list_organizer_tickets(repo.get_ref(), &email, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}
