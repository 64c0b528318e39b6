use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = parse_env_u64_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS) as u16;
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = resolve_log_level(
            parse_env_non_empty_string("LOG_LEVEL"),
            DEFAULT_LOG_LEVEL,
        );

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

#[derive(Serialize)]
struct RequestLog<'a> {
    request_id: &'a str,
    method: &'a str,
    path: &'a str,
    status: u16,
    duration_ms: u128,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    let index_file = config.static_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_file));

    let middleware_config = config.clone();
    let app = Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn(move |request: Request, next: Next| {
            let config = middleware_config.clone();
            async move { log_request(config, request, next).await }
        }));

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "port": config.port,
            "static_dir": config.static_dir.display().to_string(),
        }),
    );

    axum::serve(listener, app).await?;
    Ok(())
}

async fn log_request(config: ServerConfig, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = generate_request_id();
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let fields = RequestLog {
        request_id: &request_id,
        method: &method,
        path: &path,
        status: response.status().as_u16(),
        duration_ms: started_at.elapsed().as_millis(),
    };
    log_event(
        &config,
        LogLevel::Debug,
        "static_request",
        serde_json::to_value(&fields).unwrap_or_default(),
    );

    response
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    clamp_parsed_u64(std::env::var(name).ok(), default, bounds)
}

fn clamp_parsed_u64(raw: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn resolve_log_level(raw: Option<String>, default: LogLevel) -> LogLevel {
    match raw
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{counter}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_parse_accepts_values_inside_the_bounds() {
        assert_eq!(clamp_parsed_u64(Some("3000".to_string()), 8080, PORT_BOUNDS), 3000);
        assert_eq!(clamp_parsed_u64(Some(" 443 ".to_string()), 8080, PORT_BOUNDS), 443);
    }

    #[test]
    fn clamped_parse_falls_back_on_junk_or_out_of_bounds_values() {
        assert_eq!(clamp_parsed_u64(None, 8080, PORT_BOUNDS), 8080);
        assert_eq!(clamp_parsed_u64(Some("0".to_string()), 8080, PORT_BOUNDS), 8080);
        assert_eq!(
            clamp_parsed_u64(Some("70000".to_string()), 8080, PORT_BOUNDS),
            8080
        );
        assert_eq!(
            clamp_parsed_u64(Some("not-a-port".to_string()), 8080, PORT_BOUNDS),
            8080
        );
    }

    #[test]
    fn log_levels_are_ordered_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.as_str(), "info");
    }

    #[test]
    fn log_level_resolution_is_case_insensitive_with_fallback() {
        assert_eq!(
            resolve_log_level(Some("DEBUG".to_string()), LogLevel::Info),
            LogLevel::Debug
        );
        assert_eq!(
            resolve_log_level(Some("verbose".to_string()), LogLevel::Info),
            LogLevel::Info
        );
        assert_eq!(resolve_log_level(None, LogLevel::Debug), LogLevel::Debug);
    }

    #[test]
    fn request_ids_are_unique_and_increasing() {
        let first = generate_request_id();
        let second = generate_request_id();
        assert_ne!(first, second);
    }
}
