//! Caller-supplied location requests and their validation.
//!
//! Requests arrive as loosely-typed JSON objects. [`validate`] checks their
//! shape and produces a typed [`LocationRequest`]; coordinate coercion
//! happens here so the formatter only ever sees `f64`s.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::provider::ProviderId;

pub const DEFAULT_DIALOG_TITLE: &str = "Open in Maps";
pub const DEFAULT_DIALOG_MESSAGE: &str = "What app would you like to use?";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Plain decimal notation: sign, digits, optional fraction and exponent.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("valid decimal regex")
});

/// A latitude or longitude after coercion.
///
/// Values that cannot be read as a number become NaN and are carried
/// through rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate(f64);

impl Coordinate {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Coerce a JSON value: numbers are taken as is, strings in decimal
    /// notation are trimmed and parsed, anything else is NaN. Strings that
    /// overflow to infinity are NaN as well.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_decimal(s),
            _ => None,
        };
        Self(parsed.unwrap_or(f64::NAN))
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !DECIMAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Negative zero prints as "0".
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRequest {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub title: Option<String>,
    pub address: Option<String>,
    /// Explicit target app; when `None` the user is asked.
    pub app: Option<ProviderId>,
    pub dialog_title: Option<String>,
    pub dialog_message: Option<String>,
    pub cancel_text: Option<String>,
    /// Restricts the providers offered in the choice prompt. Empty means all.
    pub apps_white_list: Vec<ProviderId>,
}

impl LocationRequest {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Coordinate::new(latitude),
            longitude: Coordinate::new(longitude),
            title: None,
            address: None,
            app: None,
            dialog_title: None,
            dialog_message: None,
            cancel_text: None,
            apps_white_list: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = non_empty(address.into());
        self
    }

    #[must_use]
    pub fn with_app(mut self, app: ProviderId) -> Self {
        self.app = Some(app);
        self
    }

    #[must_use]
    pub fn dialog_title(&self) -> &str {
        self.dialog_title.as_deref().unwrap_or(DEFAULT_DIALOG_TITLE)
    }

    #[must_use]
    pub fn dialog_message(&self) -> &str {
        self.dialog_message
            .as_deref()
            .unwrap_or(DEFAULT_DIALOG_MESSAGE)
    }

    #[must_use]
    pub fn cancel_text(&self) -> &str {
        self.cancel_text.as_deref().unwrap_or(DEFAULT_CANCEL_TEXT)
    }
}

/// Validate a raw request object.
///
/// Checks run in a fixed order and the first failure is returned:
/// object shape, presence of `latitude` and `longitude`, `address`, `title`,
/// `app`, the prompt text options, and finally `appsWhiteList`. Optional
/// fields that are absent, `null`, empty or otherwise falsy are treated as
/// not provided.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first rule the input breaks.
pub fn validate(raw: &Value) -> Result<LocationRequest, ValidationError> {
    let Some(obj) = raw.as_object() else {
        return Err(ValidationError::NotAnObject);
    };

    let latitude = obj
        .get("latitude")
        .ok_or(ValidationError::MissingCoordinate("latitude"))?;
    let longitude = obj
        .get("longitude")
        .ok_or(ValidationError::MissingCoordinate("longitude"))?;

    let address = optional_string(obj, "address")?;
    let title = optional_string(obj, "title")?;
    let app = optional_app(obj)?;
    let dialog_title = optional_string(obj, "dialogTitle")?;
    let dialog_message = optional_string(obj, "dialogMessage")?;
    let cancel_text = optional_string(obj, "cancelText")?;
    let apps_white_list = white_list(obj)?;

    Ok(LocationRequest {
        latitude: Coordinate::from_json(latitude),
        longitude: Coordinate::from_json(longitude),
        title,
        address,
        app,
        dialog_title,
        dialog_message,
        cancel_text,
        apps_white_list,
    })
}

/// Mirrors loose truthiness: `null`, `false`, `0`, `""` count as absent.
fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn provided<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| is_provided(v))
}

fn optional_string(
    obj: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, ValidationError> {
    match provided(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::NotAString(key)),
    }
}

fn optional_app(obj: &Map<String, Value>) -> Result<Option<ProviderId>, ValidationError> {
    let Some(value) = provided(obj, "app") else {
        return Ok(None);
    };

    let unknown = |value: String| ValidationError::UnknownApp {
        value,
        supported: ProviderId::supported_keys(),
    };

    match value {
        Value::String(s) => s.parse::<ProviderId>().map(Some).map_err(|e| unknown(e.0)),
        other => Err(unknown(other.to_string())),
    }
}

fn white_list(obj: &Map<String, Value>) -> Result<Vec<ProviderId>, ValidationError> {
    let Some(value) = provided(obj, "appsWhiteList") else {
        return Ok(Vec::new());
    };

    let Value::Array(entries) = value else {
        return Err(ValidationError::InvalidWhiteList(
            "should be an array".to_string(),
        ));
    };

    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let id = entry
            .as_str()
            .and_then(|s| s.parse::<ProviderId>().ok())
            .ok_or_else(|| {
                ValidationError::InvalidWhiteList(format!("contains unsupported app {entry}"))
            })?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
