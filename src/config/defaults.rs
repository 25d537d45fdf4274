pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_environment() -> String {
    "development".to_string()
}

pub fn default_db_max_connections() -> u32 {
    10
}

pub fn default_db_min_connections() -> u32 {
    1
}

pub fn default_db_acquire_timeout_seconds() -> u64 {
    10
}

pub fn default_geolocation_enabled() -> bool {
    true
}

pub fn default_geolocation_endpoint() -> String {
    "http://ip-api.com/json".to_string()
}

pub fn default_geolocation_timeout_seconds() -> u64 {
    5
}

pub fn default_geolocation_cache_ttl_seconds() -> u64 {
    300
}

pub fn default_geolocation_cache_capacity() -> u64 {
    10_000
}

pub fn default_radius_km() -> f64 {
    10.0
}

pub fn default_max_radius_km() -> f64 {
    100.0
}

pub fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

pub fn default_metrics_allow_private_only() -> bool {
    true
}

pub fn default_logging_level() -> String {
    "info".to_string()
}

pub fn default_logging_json_format() -> bool {
    true
}
