//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{
    check_email, explain_error, health_check, profile_completeness, validate_registration,
};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, std::io::Error> {
    let tcp_listener = TcpListener::bind(config.application.address())?;
    let port = tcp_listener.local_addr()?.port();

    let server = run(tcp_listener)?;

    Ok(Application { port, server })
}

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/emails/validate", web::post().to(check_email))
            .route("/registrations/validate", web::post().to(validate_registration))
            .route("/errors/explain", web::post().to(explain_error))
            .route(
                "/shelters/profile/completeness",
                web::post().to(profile_completeness),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
