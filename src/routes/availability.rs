use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::routes::ErrorResponse;
use crate::services::Providers;

#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub serviceable: bool,
}

// POST /api/availability
pub async fn check_availability(
    providers: web::Data<Providers>,
    req_body: web::Json<AvailabilityRequest>,
) -> impl Responder {
    let location = req_body.into_inner().location;
    if location.trim().is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "missing_location",
            "Please enter an address or ZIP code",
        ));
    }

    let serviceable = providers.availability.check(&location).await;
    HttpResponse::Ok().json(AvailabilityResponse { serviceable })
}
