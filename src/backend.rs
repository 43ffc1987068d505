use std::{
    cmp::Ordering,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

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
struct ServeRuntimeConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl ServeRuntimeConfig {
    fn from_env() -> Self {
        let port = parse_env_non_empty_string("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level =
            log_level_from_value(parse_env_non_empty_string("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn log_level_from_value(value: Option<String>, default: LogLevel) -> LogLevel {
    match value
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

fn log_event(config: &ServeRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
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

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServeRuntimeConfig::from_env();

    log_event(
        &config,
        LogLevel::Debug,
        "config_resolved",
        json!({
            "port": config.port,
            "dist_dir": config.dist_dir.display().to_string(),
            "log_level": config.log_level.as_str(),
        }),
    );

    if !config.dist_dir.is_dir() {
        log_event(
            &config,
            LogLevel::Info,
            "dist_dir_missing",
            json!({
                "dist_dir": config.dist_dir.display().to_string(),
            }),
        );
    }

    let index_file = config.dist_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index_file));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service);

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        json!({
            "port": config.port,
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_level_sorts_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn log_level_parses_known_values_case_insensitively() {
        assert_eq!(
            log_level_from_value(Some("debug".to_string()), DEFAULT_LOG_LEVEL),
            LogLevel::Debug
        );
        assert_eq!(
            log_level_from_value(Some("DEBUG".to_string()), DEFAULT_LOG_LEVEL),
            LogLevel::Debug
        );
        assert_eq!(
            log_level_from_value(Some("info".to_string()), LogLevel::Debug),
            LogLevel::Info
        );
    }

    #[test]
    fn log_level_falls_back_to_default_on_unknown_or_missing_values() {
        assert_eq!(
            log_level_from_value(Some("verbose".to_string()), DEFAULT_LOG_LEVEL),
            DEFAULT_LOG_LEVEL
        );
        assert_eq!(log_level_from_value(None, LogLevel::Debug), LogLevel::Debug);
    }

    #[test]
    fn blank_environment_values_are_treated_as_unset() {
        std::env::set_var("DEVFOLIO_TEST_BLANK", "   ");
        assert_eq!(parse_env_non_empty_string("DEVFOLIO_TEST_BLANK"), None);

        std::env::set_var("DEVFOLIO_TEST_PADDED", "  dist-out  ");
        assert_eq!(
            parse_env_non_empty_string("DEVFOLIO_TEST_PADDED").as_deref(),
            Some("dist-out")
        );
    }
}
