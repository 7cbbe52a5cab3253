//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Stock defaults
//! describe the deployed clinic site; a user file only overrides the values it
//! names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "D'Cellyss"
//! tagline = "Fisioterapia & Ozonioterapia"
//! base_url = "https://decellyss.com.br"
//! lang = "pt-BR"
//! # assets_dir = "assets"   # Copied verbatim into the output root
//!
//! [clinic]
//! phone_number = "5541999163976"   # Digits only, used in tel: and wa.me links
//! phone_display = "(41) 99916-3976"
//! email = "contato@decellyss.com.br"
//! address = "R. Martins Fontes, 175 - Loja 17, Fazendinha, Curitiba - PR"
//! postal_code = "81330-350"
//! social = ["instagram", "facebook", "youtube"]
//! social_handle = "dcellyss"      # Account name on those networks
//!
//! [embeds]
//! map_url = "https://www.google.com/maps/embed?pb=..."
//! video_url = "https://www.youtube.com/embed/IzsrUIrRB_k"
//! icon_stylesheet = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
//!
//! [routing]
//! style = "path"            # "path" (one page per section) or "anchor" (single page)
//! locations_path = "local"  # First segment of location routes
//!
//! [locations]
//! dedupe = true             # Collapse repeated (tag, name) entries
//! unknown_names = "render"  # "render" or "not_found" for unregistered names
//!
//! [ui]
//! header_shrink_threshold = 20
//! back_to_top_threshold = 300
//!
//! [colors]
//! deep_blue = "#0b3c5d"
//! ...
//!
//! [build]
//! max_threads = 4           # Omit for auto = CPU cores
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [routing]
//! style = "anchor"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults matching the deployed site. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Branding and publishing settings.
    pub site: SiteSection,
    /// Clinic contact data used by every deep link.
    pub clinic: ClinicConfig,
    /// Fixed third-party embed URLs.
    pub embeds: EmbedsConfig,
    /// Routing style and location route prefix.
    pub routing: RoutingConfig,
    /// Location set policy.
    pub locations: LocationsConfig,
    /// Scroll thresholds for the header and back-to-top button.
    pub ui: UiConfig,
    /// Palette rendered into CSS custom properties.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.clinic.phone_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "clinic.phone_number must contain only digits".into(),
            ));
        }
        let prefix = self.routing.locations_path.trim_matches('/');
        if prefix.is_empty() {
            return Err(ConfigError::Validation(
                "routing.locations_path must not be empty".into(),
            ));
        }
        if prefix
            .split('/')
            .any(|part| part.is_empty() || part == "." || part == "..")
        {
            return Err(ConfigError::Validation(
                "routing.locations_path must be plain path segments".into(),
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Clinic brand name, used in titles and the message template.
    pub name: String,
    /// Short line under the brand in the header.
    pub tagline: String,
    /// Absolute origin used for sitemap URLs, without trailing slash.
    pub base_url: String,
    /// `<html lang>` value.
    pub lang: String,
    /// Directory copied verbatim into the output root (favicon, images).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "D'Cellyss".to_string(),
            tagline: "Fisioterapia & Ozonioterapia".to_string(),
            base_url: "https://decellyss.com.br".to_string(),
            lang: "pt-BR".to_string(),
            assets_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicConfig {
    /// Destination number in international format, digits only.
    pub phone_number: String,
    /// Human-readable phone number.
    pub phone_display: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    /// Social network handles linked from the footer (`https://{name}.com/...`).
    pub social: Vec<String>,
    /// Account name on the social networks.
    pub social_handle: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            phone_number: "5541999163976".to_string(),
            phone_display: "(41) 99916-3976".to_string(),
            email: "contato@decellyss.com.br".to_string(),
            address: "R. Martins Fontes, 175 - Loja 17, Fazendinha, Curitiba - PR".to_string(),
            postal_code: "81330-350".to_string(),
            social: vec![
                "instagram".to_string(),
                "facebook".to_string(),
                "youtube".to_string(),
            ],
            social_handle: "dcellyss".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbedsConfig {
    pub map_url: String,
    pub video_url: String,
    /// Icon font stylesheet providing the `fa-*` classes.
    pub icon_stylesheet: String,
}

impl Default for EmbedsConfig {
    fn default() -> Self {
        Self {
            map_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3602.484897864876!2d-49.31757362391696!3d-25.45548657754668!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94dce38e2e2a3c75%3A0x8c7c9c0c1b1b1b1b!2sR.%20Martins%20Fontes%2C%20175%20-%20Fazendinha%2C%20Curitiba%20-%20PR%2C%2081330-350!5e0!3m2!1spt-BR!2sbr!4v1689123456789!5m2!1spt-BR!2sbr".to_string(),
            video_url: "https://www.youtube.com/embed/IzsrUIrRB_k".to_string(),
            icon_stylesheet:
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                    .to_string(),
        }
    }
}

/// How sections of the site are addressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingStyle {
    /// One page per section: `/servicos`, `/sobre`, ...
    #[default]
    Path,
    /// A single home page with in-page anchors: `/#servicos`, `/#sobre`, ...
    Anchor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    pub style: RoutingStyle,
    /// Leading path of location routes, without slashes.
    pub locations_path: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            style: RoutingStyle::Path,
            locations_path: "local".to_string(),
        }
    }
}

/// What a well-formed location route with an unregistered name renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLocation {
    /// Render the generic landing page with the name substituted.
    #[default]
    Render,
    /// Render the not-found page.
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationsConfig {
    /// Collapse repeated `(tag, name)` entries to their first occurrence.
    pub dedupe: bool,
    pub unknown_names: UnknownLocation,
}

impl Default for LocationsConfig {
    fn default() -> Self {
        Self {
            dedupe: true,
            unknown_names: UnknownLocation::Render,
        }
    }
}

/// Scroll offsets, in CSS pixels, past which the UI flags switch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub header_shrink_threshold: u32,
    pub back_to_top_threshold: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header_shrink_threshold: 20,
            back_to_top_threshold: 300,
        }
    }
}

/// Brand palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Headings, footer accents.
    pub deep_blue: String,
    /// Links, icons, primary buttons.
    pub mid_blue: String,
    /// Location hero background.
    pub baby_blue: String,
    pub gold: String,
    pub soft_green: String,
    /// Section backgrounds.
    pub light_gray: String,
    /// Messaging buttons.
    pub whatsapp: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            deep_blue: "#0b3c5d".to_string(),
            mid_blue: "#4a90e2".to_string(),
            baby_blue: "#cfe3f7".to_string(),
            gold: "#c9a227".to_string(),
            soft_green: "#5cb85c".to_string(),
            light_gray: "#f4f6f9".to_string(),
            whatsapp: "#25d366".to_string(),
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Maximum number of rendering threads.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_threads: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`, at least 1
pub fn effective_threads(config: &BuildConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_threads
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file path.
///
/// A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(path)?)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Clinic Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Brand name, used in page titles and in the contact message.
name = "D'Cellyss"
tagline = "Fisioterapia & Ozonioterapia"
# Absolute origin for sitemap.xml entries. No trailing slash.
base_url = "https://decellyss.com.br"
lang = "pt-BR"
# Directory copied verbatim into the output root (favicon, images).
# assets_dir = "assets"

# ---------------------------------------------------------------------------
# Clinic contact data
# ---------------------------------------------------------------------------
[clinic]
# Digits only, international format. Used for tel: and wa.me links.
phone_number = "5541999163976"
phone_display = "(41) 99916-3976"
email = "contato@decellyss.com.br"
address = "R. Martins Fontes, 175 - Loja 17, Fazendinha, Curitiba - PR"
postal_code = "81330-350"
social = ["instagram", "facebook", "youtube"]
social_handle = "dcellyss"

# ---------------------------------------------------------------------------
# Embedded third-party content
# ---------------------------------------------------------------------------
[embeds]
map_url = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3602.484897864876!2d-49.31757362391696!3d-25.45548657754668!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94dce38e2e2a3c75%3A0x8c7c9c0c1b1b1b1b!2sR.%20Martins%20Fontes%2C%20175%20-%20Fazendinha%2C%20Curitiba%20-%20PR%2C%2081330-350!5e0!3m2!1spt-BR!2sbr!4v1689123456789!5m2!1spt-BR!2sbr"
video_url = "https://www.youtube.com/embed/IzsrUIrRB_k"
icon_stylesheet = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"

# ---------------------------------------------------------------------------
# Routing
# ---------------------------------------------------------------------------
[routing]
# "path":   one page per section (/servicos, /sobre, /condicoes, ...)
# "anchor": a single home page with in-page sections (/#servicos, ...)
style = "path"
# First segment of location landing pages: /local/bairro/Batel
locations_path = "local"

# ---------------------------------------------------------------------------
# Location landing pages
# ---------------------------------------------------------------------------
[locations]
# The neighborhood list repeats a few names. true keeps the first occurrence
# of each (tag, name); false keeps every entry in the footer keyword cloud.
dedupe = true
# What /local/{tag}/{name} renders for a name that is not in the lists:
# "render" (generic page with the name substituted) or "not_found".
unknown_names = "render"

# ---------------------------------------------------------------------------
# Viewport behavior (CSS pixels of scroll)
# ---------------------------------------------------------------------------
[ui]
header_shrink_threshold = 20
back_to_top_threshold = 300

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
deep_blue = "#0b3c5d"
mid_blue = "#4a90e2"
baby_blue = "#cfe3f7"
gold = "#c9a227"
soft_green = "#5cb85c"
light_gray = "#f4f6f9"
whatsapp = "#25d366"

# ---------------------------------------------------------------------------
# Build
# ---------------------------------------------------------------------------
[build]
# Maximum rendering threads. Omit to auto-detect (= number of CPU cores).
# max_threads = 4
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-deep-blue: {deep_blue};
    --color-mid-blue: {mid_blue};
    --color-baby-blue: {baby_blue};
    --color-gold: {gold};
    --color-soft-green: {soft_green};
    --color-light-gray: {light_gray};
    --color-whatsapp: {whatsapp};
}}"#,
        deep_blue = colors.deep_blue,
        mid_blue = colors.mid_blue,
        baby_blue = colors.baby_blue,
        gold = colors.gold,
        soft_green = colors.soft_green,
        light_gray = colors.light_gray,
        whatsapp = colors.whatsapp,
    )
}
