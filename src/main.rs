use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::{middleware::Logger, web, App, HttpServer};
use ambufind_backend::api::{openapi, routes::{self, AppState}};
use ambufind_backend::application::{FinderService, RegistrarService};
use ambufind_backend::config::AppConfig;
use ambufind_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use ambufind_backend::infrastructure::geolocation::{
    DisabledLocationProvider, HttpLocationProvider, LocationProvider,
};
use ambufind_backend::infrastructure::repositories::AmbulanceRepositoryImpl;
use ambufind_backend::middleware::request_logging::{
    create_request_span, get_client_ip, get_status_class, get_user_agent,
};
use ambufind_backend::observability::error_tracking::capture_unexpected_5xx;
use ambufind_backend::observability::AppMetrics;
use ambufind_backend::security::{cors_middleware, security_headers};
use tracing::{info, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    tracing_subscriber::registry()
        .with(EnvFilter::new(config.logging.level.clone()))
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .init();

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let ambulance_repo = Arc::new(AmbulanceRepositoryImpl::new(pool.clone()));

    let location_provider: Arc<dyn LocationProvider> = if config.geolocation.enabled {
        Arc::new(HttpLocationProvider::new(&config.geolocation))
    } else {
        info!("geolocation provider disabled, requests must carry explicit coordinates");
        Arc::new(DisabledLocationProvider)
    };

    let state = AppState {
        finder_service: Arc::new(FinderService::new(
            ambulance_repo.clone(),
            location_provider.clone(),
            config.proximity.clone(),
        )),
        registrar_service: Arc::new(RegistrarService::new(
            ambulance_repo,
            location_provider,
        )),
        security: config.security.clone(),
        app_environment: config.app.environment.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: pool.clone(),
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(host = %bind_host, port = bind_port, "starting ambufind backend");

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let client_ip = get_client_ip(&req);
                let user_agent = get_user_agent(&req);
                let span = create_request_span(&request_id, &method, &path, &client_ip, &user_agent);
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    match fut.await {
                        Ok(mut response) => {
                            response.headers_mut().insert(
                                actix_web::http::header::HeaderName::from_static("x-request-id"),
                                actix_web::http::header::HeaderValue::from_str(&request_id)
                                    .unwrap_or_else(|_| {
                                        actix_web::http::header::HeaderValue::from_static(
                                            "invalid-request-id",
                                        )
                                    }),
                            );

                            let status = response.status().as_u16();
                            let latency_ms = start.elapsed().as_millis() as u64;
                            metrics.record_request(status, latency_ms);

                            info!(
                                request_id = %request_id,
                                method = %method,
                                path = %path,
                                status = status,
                                status_class = get_status_class(status),
                                latency_ms = latency_ms,
                                "request completed"
                            );

                            if status >= 500 {
                                let _ = capture_unexpected_5xx(&path, &method, status, &request_id);
                            }
                            Ok(response)
                        }
                        Err(error) => Err(error),
                    }
                }
                .instrument(span)
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(openapi::configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
