use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::application::{FinderService, RegistrarService};
use crate::config::SecurityConfig;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod ambulances;

#[derive(Clone)]
pub struct AppState {
    pub finder_service: Arc<FinderService>,
    pub registrar_service: Arc<RegistrarService>,
    pub security: SecurityConfig,
    pub app_environment: String,
    pub metrics: Arc<AppMetrics>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(ambulances::configure))
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready))
        .route("/metrics", web::get().to(metrics));
}

/// Client address for geolocation fallback and logging. Respects trusted
/// proxy headers only when actix is configured for them.
pub fn client_ip(request: &HttpRequest) -> String {
    request
        .connection_info()
        .realip_remote_addr()
        .map(|addr| match addr.parse::<std::net::SocketAddr>() {
            // Peer addresses carry a port; forwarded values are bare IPs.
            Ok(socket) => socket.ip().to_string(),
            Err(_) => addr.to_string(),
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub(crate) async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub(crate) async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: format!("Service not ready: {e}"),
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    if let Some(token) = state
        .security
        .metrics_admin_token
        .as_deref()
        .filter(|token| !token.is_empty())
    {
        let admin_header = request
            .headers()
            .get("x-admin-token")
            .and_then(|value| value.to_str().ok());
        if admin_header == Some(token) {
            let (db_size, db_idle) = pool_stats(&state);
            return Ok(HttpResponse::Ok()
                .content_type("text/plain; version=0.0.4")
                .body(state.metrics.render_prometheus(db_size, db_idle)));
        }
    }

    if state.security.metrics_allow_private_only {
        let ip = request
            .peer_addr()
            .map(|addr| addr.ip())
            .ok_or_else(|| AppError::BadRequest("peer address unavailable".to_string()))?;

        if !is_private_or_loopback(ip) {
            return Err(AppError::NotFound("not found".to_string()));
        }
    }

    let (db_size, db_idle) = pool_stats(&state);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(state.metrics.render_prometheus(db_size, db_idle)))
}

fn is_private_or_loopback(ip: std::net::IpAddr) -> bool {
    match ip {
        std::net::IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        std::net::IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}

fn pool_stats(state: &web::Data<AppState>) -> (u32, usize) {
    (state.db_pool.size(), state.db_pool.num_idle())
}
