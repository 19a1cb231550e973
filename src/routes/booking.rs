use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::db::sessions::SessionStore;
use crate::models::booking::BookingRecord;
use crate::models::session::{BookingSession, Step};
use crate::routes::ErrorResponse;
use crate::services::booking_flow::{BookingFlow, FlowError, StepEvent};
use crate::services::confirmation_service::ConfirmationService;
use crate::services::summary_service::{BookingSummary, SummaryService};
use crate::services::Providers;

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub step: Step,
    pub record: BookingRecord,
    pub summary: BookingSummary,
}

impl SessionView {
    fn of(session: &BookingSession) -> Self {
        Self {
            session_id: session.id,
            step: session.step,
            record: session.record.clone(),
            summary: SummaryService::project(&session.record),
        }
    }
}

fn session_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "session_not_found",
        "No booking session with that ID",
    ))
}

fn flow_error_response(err: FlowError) -> HttpResponse {
    match err {
        FlowError::Validation { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_failed", err.to_string()))
        }
        FlowError::Rejected { .. } => HttpResponse::UnprocessableEntity()
            .json(ErrorResponse::new("rejected", err.to_string())),
        FlowError::WrongStep { .. } => {
            HttpResponse::Conflict().json(ErrorResponse::new("wrong_step", err.to_string()))
        }
        FlowError::Terminal => {
            HttpResponse::Conflict().json(ErrorResponse::new("booking_complete", err.to_string()))
        }
        FlowError::AtStart => {
            HttpResponse::Conflict().json(ErrorResponse::new("at_first_step", err.to_string()))
        }
    }
}

fn parse_session_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| {
        HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_session_id",
            "Invalid session ID format",
        ))
    })
}

// POST /api/bookings/sessions
pub async fn create_session(store: web::Data<SessionStore>) -> impl Responder {
    let session = BookingSession::new();
    let view = SessionView::of(&session);
    store.write().await.insert(session.id, session);

    HttpResponse::Created().json(view)
}

// GET /api/bookings/sessions/{id}
pub async fn get_session(store: web::Data<SessionStore>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match store.read().await.get(&id) {
        Some(session) => HttpResponse::Ok().json(SessionView::of(session)),
        None => session_not_found(),
    }
}

// POST /api/bookings/sessions/{id}/events
pub async fn apply_event(
    store: web::Data<SessionStore>,
    providers: web::Data<Providers>,
    path: web::Path<String>,
    req_body: web::Json<StepEvent>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match req_body.into_inner() {
        StepEvent::CheckLocation { location } => {
            check_location(&store, &providers, id, location).await
        }
        event => {
            let mut sessions = store.write().await;
            let session = match sessions.get_mut(&id) {
                Some(session) => session,
                None => return session_not_found(),
            };

            match BookingFlow::apply(session.step, &mut session.record, event) {
                Ok(next) => {
                    session.step = next;
                    HttpResponse::Ok().json(SessionView::of(session))
                }
                Err(err) => flow_error_response(err),
            }
        }
    }
}

/// The location check rides through the simulated-latency provider, so the
/// store lock is dropped while it waits. A generation token taken up front
/// keeps a superseded check from writing a stale verdict back.
async fn check_location(
    store: &SessionStore,
    providers: &Providers,
    id: Uuid,
    location: String,
) -> HttpResponse {
    let token = {
        let mut sessions = store.write().await;
        let session = match sessions.get_mut(&id) {
            Some(session) => session,
            None => return session_not_found(),
        };
        if session.step != Step::Booking {
            return flow_error_response(FlowError::WrongStep {
                current: session.step,
                event: "check-location",
            });
        }
        session.begin_availability_check()
    };

    let serviceable = providers.availability.check(&location).await;

    let mut sessions = store.write().await;
    let session = match sessions.get_mut(&id) {
        Some(session) => session,
        None => return session_not_found(),
    };
    if !session.availability_token_current(token) {
        return HttpResponse::Conflict().json(ErrorResponse::new(
            "superseded",
            "A newer availability check replaced this one",
        ));
    }
    if !serviceable {
        return flow_error_response(FlowError::Rejected {
            reason: "we currently only serve Texas locations".to_string(),
        });
    }

    match BookingFlow::apply(
        session.step,
        &mut session.record,
        StepEvent::CheckLocation { location },
    ) {
        Ok(next) => {
            session.step = next;
            HttpResponse::Ok().json(SessionView::of(session))
        }
        Err(err) => flow_error_response(err),
    }
}

// POST /api/bookings/sessions/{id}/back
pub async fn go_back(store: web::Data<SessionStore>, path: web::Path<String>) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let mut sessions = store.write().await;
    let session = match sessions.get_mut(&id) {
        Some(session) => session,
        None => return session_not_found(),
    };

    match BookingFlow::back(session.step, &session.record) {
        Ok(previous) => {
            session.step = previous;
            HttpResponse::Ok().json(SessionView::of(session))
        }
        Err(err) => flow_error_response(err),
    }
}

// POST /api/bookings/sessions/{id}/confirm
pub async fn confirm_booking(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let sessions = store.read().await;
    let session = match sessions.get(&id) {
        Some(session) => session,
        None => return session_not_found(),
    };
    if session.step != Step::Confirmation {
        return HttpResponse::Conflict().json(ErrorResponse::new(
            "not_ready",
            "The booking has remaining steps before it can be confirmed",
        ));
    }

    HttpResponse::Ok().json(ConfirmationService::confirm(&session.record))
}

// DELETE /api/bookings/sessions/{id}
pub async fn delete_session(
    store: web::Data<SessionStore>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match parse_session_id(&path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match store.write().await.remove(&id) {
        Some(_) => HttpResponse::Ok().json(json!({ "deleted": true })),
        None => session_not_found(),
    }
}
