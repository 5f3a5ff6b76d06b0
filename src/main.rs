use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mcq_creator::{
    app_state::AppState,
    config::Config,
    handlers::{generate_quiz, health_check},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config
        .validate()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let max_upload_bytes = config.max_upload_bytes;
    let cors_allowed_origin = config.cors_allowed_origin.clone();
    let state = web::Data::new(AppState::new(config));

    log::info!(
        "starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let cors = match &cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .expose_headers(vec!["content-disposition", "x-request-id"]),
            None => Cors::default(),
        };

        App::new()
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .service(generate_quiz)
            .service(health_check)
    })
    .bind(bind_address)?
    .run()
    .await
}
