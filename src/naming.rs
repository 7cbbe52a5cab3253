//! Route segment naming for location pages.
//!
//! Location names are free text (`"Ahú (Alto da Glória)"`, `"Fazendinha-Portão"`)
//! and travel in a single URL path segment. Encoding matches JavaScript's
//! `encodeURIComponent`, so links written by the generator, links typed by
//! hand, and links built by the browser script all agree:
//!
//! - `"Vila Torres"` → `Vila%20Torres`
//! - `"Ahú (Alto da Glória)"` → `Ah%C3%BA%20(Alto%20da%20Gl%C3%B3ria)`
//! - `"Fazendinha-Portão"` → `Fazendinha-Port%C3%A3o`
//!
//! Decoding never fails: malformed escapes pass through untouched and invalid
//! UTF-8 becomes U+FFFD.
//!
//! On disk, a location page lives under its *decoded* name, because static
//! file servers decode the request path before mapping it to a file.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::path::PathBuf;

use crate::content::LocationKind;

/// Characters `encodeURIComponent` leaves as-is, besides ASCII alphanumerics.
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

/// Percent-encode a string for use as a path segment or query value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Decode a percent-encoded segment.
pub fn decode_component(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// URL path of a location page: `/{locations_path}/{tag}/{encoded name}`.
pub fn location_href(locations_path: &str, kind: LocationKind, name: &str) -> String {
    format!(
        "/{}/{}/{}",
        locations_path.trim_matches('/'),
        kind.tag(),
        encode_component(name)
    )
}

/// Output directory of a location page, relative to the site root.
pub fn location_dir(locations_path: &str, kind: LocationKind, name: &str) -> PathBuf {
    let mut dir = PathBuf::new();
    for part in locations_path.trim_matches('/').split('/') {
        if !part.is_empty() {
            dir.push(part);
        }
    }
    dir.push(kind.tag());
    dir.push(name);
    dir
}
