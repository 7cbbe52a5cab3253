//! CLI output formatting.
//!
//! Output leads with what a page *is* (positional index and title) and
//! shows where it lands on disk or on the web as secondary context.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 D'Cellyss | Fisioterapia Regenerativa e Ozonioterapia em Curitiba → index.html
//! 002 Nossos Tratamentos | D'Cellyss → servicos/index.html
//! ...
//! Copied 3 asset files
//! Generated 158 pages → dist
//! ```
//!
//! ## Routes
//!
//! ```text
//! 001 D'Cellyss | ... → index.html
//!     URL: /
//! ```
//!
//! ## Check
//!
//! ```text
//! Content
//!     5 services, 3 testimonials, 10 conditions, 5 FAQs
//!     123 neighborhoods, 29 cities
//! Duplicate locations
//!     bairro Vila Torres (listed 2 times)
//! Routing
//!     path style, locations under /local/
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::{RoutingStyle, UnknownLocation};
use crate::content::LocationKind;
use crate::generate::GenerateSummary;
use crate::render::Site;
use crate::types::PageEntry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn page_line(index: usize, page: &PageEntry) -> String {
    format!("{} {} \u{2192} {}", format_index(index), page.title, page.file)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

pub fn format_build_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| page_line(i + 1, page))
        .collect();

    if summary.assets > 0 {
        lines.push(format!(
            "Copied {}",
            plural(summary.assets, "asset file", "asset files")
        ));
    }
    lines.push(format!(
        "Generated {} \u{2192} {}",
        plural(summary.pages.len(), "page", "pages"),
        summary.output_dir.display()
    ));
    lines
}

pub fn print_build_output(summary: &GenerateSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}

pub fn format_routes(pages: &[PageEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(pages.len() * 2);
    for (i, page) in pages.iter().enumerate() {
        lines.push(page_line(i + 1, page));
        lines.push(format!("{}URL: {}", indent(1), page.href));
    }
    lines
}

pub fn print_routes(pages: &[PageEntry]) {
    for line in format_routes(pages) {
        println!("{}", line);
    }
}

/// Content inventory, duplicate report, and routing summary.
pub fn format_check(site: &Site) -> Vec<String> {
    let registry = &site.registry;
    let mut lines = vec!["Content".to_string()];
    lines.push(format!(
        "{}{}, {}, {}, {}",
        indent(1),
        plural(registry.services().len(), "service", "services"),
        plural(registry.testimonials().len(), "testimonial", "testimonials"),
        plural(registry.conditions().len(), "condition", "conditions"),
        plural(registry.faqs().len(), "FAQ", "FAQs"),
    ));
    let count = |kind: LocationKind| {
        registry
            .locations()
            .iter()
            .filter(|loc| loc.kind == kind)
            .count()
    };
    lines.push(format!(
        "{}{}, {}",
        indent(1),
        plural(count(LocationKind::Neighborhood), "neighborhood", "neighborhoods"),
        plural(count(LocationKind::City), "city", "cities"),
    ));

    let duplicates = registry.duplicate_locations();
    if !duplicates.is_empty() {
        lines.push("Duplicate locations".to_string());
        for (loc, times) in &duplicates {
            lines.push(format!(
                "{}{} {} (listed {} times)",
                indent(1),
                loc.kind,
                loc.name,
                times
            ));
        }
        let policy = if site.config.locations.dedupe {
            "merged into one entry each"
        } else {
            "kept as listed"
        };
        lines.push(format!("{}{}", indent(1), policy));
    }

    let style = match site.router.style() {
        RoutingStyle::Path => "path style",
        RoutingStyle::Anchor => "anchor style",
    };
    let unknown = match site.config.locations.unknown_names {
        UnknownLocation::Render => "unknown names rendered",
        UnknownLocation::NotFound => "unknown names not found",
    };
    lines.push("Routing".to_string());
    lines.push(format!(
        "{}{}, locations under /{}/, {}",
        indent(1),
        style,
        site.config.routing.locations_path.trim_matches('/'),
        unknown
    ));
    lines
}

pub fn print_check(site: &Site) {
    for line in format_check(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
