use actix_web::middleware::DefaultHeaders;

/// Baseline response headers for a JSON API. The CSP keeps `'self'` so the
/// self-hosted Swagger UI assets still load; everything else assumes no
/// browser-rendered content: responses are never framed, never cached, and
/// never leak a referrer.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            "Strict-Transport-Security",
            "max-age=31536000; includeSubDomains",
        ))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
        .add((
            "Content-Security-Policy",
            "default-src 'self'; frame-ancestors 'none'; object-src 'none'; base-uri 'none'",
        ))
        .add(("Cache-Control", "no-store"))
}
