use crate::config::SecurityConfig;
use actix_cors::Cors;

/// Allowlist-based CORS for the browser frontend. No credentials: the API
/// carries no cookies or auth state.
pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let allowlist = config.cors_allowed_origins.clone();

    Cors::default()
        .allow_any_header()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_origin_fn(move |origin, _| {
            origin
                .to_str()
                .ok()
                .map(|value| allowlist.iter().any(|allowed| allowed == value))
                .unwrap_or(false)
        })
}
