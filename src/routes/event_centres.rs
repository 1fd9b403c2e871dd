use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::api::CentreListParams;
use crate::forms::event_centres::AddEventCentreForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::event_centres as centre_service;

#[get("/v1/centres")]
pub async fn list_centres(
    params: web::Query<CentreListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match centre_service::list_centres(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[post("/v1/centres")]
pub async fn add_centre(
    form: web::Json<AddEventCentreForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match centre_service::create_centre(repo.get_ref(), form.into_inner()) {
        Ok(centre) => HttpResponse::Created().json(centre),
        Err(err) => error_response(err),
    }
}

#[get("/v1/centres/{centre_id}")]
pub async fn show_centre(
    centre_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match centre_service::get_centre(repo.get_ref(), centre_id.into_inner()) {
        Ok(centre) => HttpResponse::Ok().json(centre),
        Err(err) => error_response(err),
    }
}
