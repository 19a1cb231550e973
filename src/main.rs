use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use cleanbook_api::db::sessions::create_session_store;
use cleanbook_api::routes;
use cleanbook_api::services::availability_service::SimulatedAvailabilityProvider;
use cleanbook_api::services::otp_service::SimulatedOtpProvider;
use cleanbook_api::services::Providers;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let store = web::Data::new(create_session_store());
    let providers = web::Data::new(Providers {
        availability: Arc::new(SimulatedAvailabilityProvider::from_env()),
        otp: Arc::new(SimulatedOtpProvider::from_env()),
    });

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(store.clone())
            .app_data(providers.clone())
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
    })
    .bind((host, port))?
    .run()
    .await
}
