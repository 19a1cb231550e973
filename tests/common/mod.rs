use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use cleanbook_api::db::sessions::{create_session_store, SessionStore};
use cleanbook_api::routes;
use cleanbook_api::services::availability_service::SimulatedAvailabilityProvider;
use cleanbook_api::services::otp_service::SimulatedOtpProvider;
use cleanbook_api::services::Providers;

/// Test harness wiring the real route tree against an empty in-memory
/// store and zero-delay providers, so no test waits on simulated latency.
pub struct TestApp {
    pub store: web::Data<SessionStore>,
    pub providers: web::Data<Providers>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = web::Data::new(create_session_store());
        let providers = web::Data::new(Providers {
            availability: Arc::new(SimulatedAvailabilityProvider::new(Duration::from_millis(0))),
            otp: Arc::new(SimulatedOtpProvider::new(Duration::from_millis(0))),
        });

        Self { store, providers }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(self.store.clone())
            .app_data(self.providers.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/availability",
                        web::post().to(routes::availability::check_availability),
                    )
                    .service(
                        web::scope("/otp")
                            .route("/send", web::post().to(routes::otp::send_code))
                            .route("/verify", web::post().to(routes::otp::verify_code)),
                    )
                    .service(
                        web::scope("/bookings/sessions")
                            .route("", web::post().to(routes::booking::create_session))
                            .route("/{id}", web::get().to(routes::booking::get_session))
                            .route("/{id}", web::delete().to(routes::booking::delete_session))
                            .route("/{id}/events", web::post().to(routes::booking::apply_event))
                            .route("/{id}/back", web::post().to(routes::booking::go_back))
                            .route(
                                "/{id}/confirm",
                                web::post().to(routes::booking::confirm_booking),
                            ),
                    ),
            )
    }
}
