use actix_web::dev::ServiceRequest;
/// Request logging helpers for the audit trail: request id, client IP and
/// user agent attached to a tracing span.
use actix_web::http::header;
use tracing::Span;

/// Get client IP address from request.
///
/// Uses realip_remote_addr() which respects Forwarded/X-Forwarded-For only
/// when configured via trusted proxy settings; raw forwarded headers are
/// never parsed here since clients can spoof them.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Get user agent from request headers
pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Create a tracing span carrying per-request context
pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent
    )
}

/// Get HTTP status class for grouping (2xx, 3xx, 4xx, 5xx)
pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}
