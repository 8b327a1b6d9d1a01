//! Deep-link formatting.
//!
//! Each provider maps to a pure function from a [`Destination`] to a URL.
//! Navigon is registered but has no link format, so [`format_url`] yields
//! `None` for it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::link_config::{Platform, UrlCompat};
use crate::provider::{ProviderId, ProviderRegistry};
use crate::request::{Coordinate, LocationRequest};

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const FALLBACK_LABEL: &str = "Location";

struct Destination<'a> {
    prefix: &'a str,
    lat: Coordinate,
    lng: Coordinate,
    title: Option<&'a str>,
    address: Option<&'a str>,
    platform: Platform,
    compat: UrlCompat,
}

impl Destination<'_> {
    /// Separator after the parameters that historically lacked one.
    fn quirk_eq(&self) -> &'static str {
        match self.compat {
            UrlCompat::Preserve => "",
            UrlCompat::Fixed => "=",
        }
    }
}

type LinkFormatter = fn(&Destination<'_>) -> String;

fn formatter_for(id: ProviderId) -> Option<LinkFormatter> {
    match id {
        ProviderId::AppleMaps => Some(apple_maps),
        ProviderId::GoogleMaps => Some(google_maps),
        ProviderId::Citymapper => Some(citymapper),
        ProviderId::Uber => Some(uber),
        ProviderId::Lyft => Some(lyft),
        ProviderId::Transit => Some(transit),
        ProviderId::Waze => Some(waze),
        ProviderId::Yandex => Some(yandex),
        ProviderId::Moovit => Some(moovit),
        ProviderId::Navigon => None,
    }
}

/// Render the deep link that opens `request`'s location in `app`.
///
/// Uses the prefix, platform and compatibility mode the registry was built
/// with. Returns `None` when the provider has no link format.
#[must_use]
pub fn format_url(
    registry: &ProviderRegistry,
    app: ProviderId,
    request: &LocationRequest,
) -> Option<String> {
    let config = registry.config();
    let dest = Destination {
        prefix: registry.prefix_for(app),
        lat: request.latitude,
        lng: request.longitude,
        title: request.title.as_deref().filter(|s| !s.is_empty()),
        address: request.address.as_deref().filter(|s| !s.is_empty()),
        platform: config.platform,
        compat: config.compat,
    };

    formatter_for(app).map(|render| render(&dest))
}

fn enc(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

fn apple_maps(d: &Destination<'_>) -> String {
    format!(
        "{}?ll={},{}&q={}&address={}",
        d.prefix,
        d.lat,
        d.lng,
        enc(d.title.unwrap_or(FALLBACK_LABEL)),
        enc(d.address.unwrap_or_default()),
    )
}

fn google_maps(d: &Destination<'_>) -> String {
    match d.platform {
        Platform::Ios => format!(
            "{}?api=1&ll={},{}&q={}",
            d.prefix,
            d.lat,
            d.lng,
            enc(d.address.or(d.title).unwrap_or(FALLBACK_LABEL)),
        ),
        Platform::Android => format!("{}?q={},{}", d.prefix, d.lat, d.lng),
    }
}

fn citymapper(d: &Destination<'_>) -> String {
    let mut url = format!("{}directions?endcoord={},{}", d.prefix, d.lat, d.lng);
    if let Some(title) = d.title {
        url.push_str("&endname=");
        url.push_str(&enc(title));
    }
    url
}

fn uber(d: &Destination<'_>) -> String {
    let mut url = format!(
        "{}?action=setPickup&pickup=my_location&dropoff[latitude]={}&dropoff[longitude]{}{}",
        d.prefix,
        d.lat,
        d.quirk_eq(),
        d.lng,
    );
    if let Some(title) = d.title {
        url.push_str("&dropoff[nickname]=");
        url.push_str(&enc(title));
    }
    url
}

fn lyft(d: &Destination<'_>) -> String {
    format!(
        "{}ridetype?id=lyft&destination[latitude]={}&destination[longitude]={}",
        d.prefix, d.lat, d.lng
    )
}

fn transit(d: &Destination<'_>) -> String {
    format!("{}directions?to={},{}", d.prefix, d.lat, d.lng)
}

fn waze(d: &Destination<'_>) -> String {
    format!("{}?ll={},{}&navigate=yes", d.prefix, d.lat, d.lng)
}

fn yandex(d: &Destination<'_>) -> String {
    format!(
        "{}build_route_on_map?lat_to={}&lon_to={}",
        d.prefix, d.lat, d.lng
    )
}

fn moovit(d: &Destination<'_>) -> String {
    let mut url = format!(
        "{}directions?dest_lat={}&dest_lon{}{}",
        d.prefix,
        d.lat,
        d.quirk_eq(),
        d.lng,
    );
    if let Some(title) = d.title {
        url.push_str("&dest_name=");
        url.push_str(&enc(title));
    }
    url
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
