//! Shared types used by the router, renderers and CLI output.

use serde::Serialize;

/// Header/footer navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    /// Display label ("Tratamentos").
    pub label: &'static str,
    /// Link target: a path (`/servicos`) or an in-page anchor (`/#servicos`).
    pub href: String,
}

/// A page the generator writes, with its URL and output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageEntry {
    pub title: String,
    pub href: String,
    /// Output file relative to the site root.
    pub file: String,
}
