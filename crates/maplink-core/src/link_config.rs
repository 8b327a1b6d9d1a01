//! Platform and compatibility switches threaded through registry
//! construction and URL formatting.

use std::str::FromStr;

/// Host operating system family the deep links are built for.
///
/// Only two providers (Apple Maps and Google Maps) use a different URL
/// prefix per platform, and only Google Maps changes its query layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    Ios,
    #[default]
    Android,
}

impl Platform {
    #[must_use]
    pub fn is_ios(self) -> bool {
        matches!(self, Platform::Ios)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(format!("unknown platform '{other}'; expected ios or android")),
        }
    }
}

/// Whether to reproduce the historical uber/moovit query strings, which
/// drop the `=` after `dropoff[longitude]` and `dest_lon`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlCompat {
    #[default]
    Preserve,
    Fixed,
}

impl std::fmt::Display for UrlCompat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlCompat::Preserve => write!(f, "preserve"),
            UrlCompat::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for UrlCompat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(UrlCompat::Preserve),
            "fixed" => Ok(UrlCompat::Fixed),
            other => Err(format!(
                "unknown url compat mode '{other}'; expected preserve or fixed"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkConfig {
    pub platform: Platform,
    pub compat: UrlCompat,
}

impl LinkConfig {
    #[must_use]
    pub fn new(platform: Platform, compat: UrlCompat) -> Self {
        Self { platform, compat }
    }
}
