use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let kakao_rest_key = require("KAKAO_REST_KEY")?;
    let bind_addr = parse_addr("TRENDYMAP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TRENDYMAP_LOG_LEVEL", "info");
    let static_dir = PathBuf::from(or_default("TRENDYMAP_STATIC_DIR", "./public"));
    let detail_timeout_secs = parse_u64("TRENDYMAP_DETAIL_TIMEOUT_SECS", "3")?;

    Ok(AppConfig {
        kakao_rest_key,
        bind_addr,
        log_level,
        static_dir,
        detail_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("KAKAO_REST_KEY", "test-kakao-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_kakao_rest_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "KAKAO_REST_KEY"),
            "expected MissingEnvVar(KAKAO_REST_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.kakao_rest_key, "test-kakao-key");
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.static_dir.to_str(), Some("./public"));
        assert_eq!(cfg.detail_timeout_secs, 3);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("TRENDYMAP_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDYMAP_BIND_ADDR"),
            "expected InvalidEnvVar(TRENDYMAP_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_bind_addr_override() {
        let mut map = full_env();
        map.insert("TRENDYMAP_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn build_app_config_detail_timeout_override() {
        let mut map = full_env();
        map.insert("TRENDYMAP_DETAIL_TIMEOUT_SECS", "10");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.detail_timeout_secs, 10);
    }

    #[test]
    fn build_app_config_detail_timeout_invalid() {
        let mut map = full_env();
        map.insert("TRENDYMAP_DETAIL_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TRENDYMAP_DETAIL_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TRENDYMAP_DETAIL_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_rest_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains("test-kakao-key"));
    }
}
