use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let platform = parse_with("MAPLINK_PLATFORM", &or_default("MAPLINK_PLATFORM", "android"))?;
    let url_compat = parse_with(
        "MAPLINK_URL_COMPAT",
        &or_default("MAPLINK_URL_COMPAT", "preserve"),
    )?;
    let log_level = or_default("MAPLINK_LOG_LEVEL", "info");
    let apps_path = PathBuf::from(or_default("MAPLINK_APPS_PATH", "./config/apps.yaml"));

    let open_command = or_default("MAPLINK_OPEN_COMMAND", "xdg-open");
    if open_command.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "MAPLINK_OPEN_COMMAND".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(AppConfig {
        platform,
        url_compat,
        log_level,
        apps_path,
        open_command,
    })
}

fn parse_with<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>().map_err(|reason| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
