use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::routes::ErrorResponse;
use crate::services::otp_service::OtpService;
use crate::services::Providers;

#[derive(Debug, Deserialize)]
pub struct SendCodeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

// POST /api/otp/send
pub async fn send_code(
    providers: web::Data<Providers>,
    req_body: web::Json<SendCodeRequest>,
) -> impl Responder {
    let email = req_body.into_inner().email;
    if !OtpService::is_valid_email(&email) {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_email",
            "Please enter a valid email address",
        ));
    }

    providers.otp.send_code(&email).await;
    HttpResponse::Ok().json(json!({ "ok": true }))
}

// POST /api/otp/verify
pub async fn verify_code(req_body: web::Json<VerifyCodeRequest>) -> impl Responder {
    let req = req_body.into_inner();
    if !OtpService::is_valid_email(&req.email) {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_email",
            "Please enter a valid email address",
        ));
    }

    HttpResponse::Ok().json(json!({ "verified": OtpService::verify(&req.code) }))
}
