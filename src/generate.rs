//! Static site generation.
//!
//! Renders every declared route to disk. Pages are independent pure
//! functions of the [`Site`], so they render in parallel on the rayon pool
//! and each writes its own file.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                         # Home
//! ├── servicos/index.html                # Sections (path style only)
//! ├── ...
//! ├── local/
//! │   ├── bairro/Vila Torres/index.html  # One page per location
//! │   └── cidade/Colombo/index.html
//! ├── 404.html                           # Not-found page
//! ├── sitemap.xml                        # Absolute URLs from site.base_url
//! ├── robots.txt
//! └── ...                                # assets_dir, copied verbatim
//! ```
//!
//! Location directories use the decoded name; static hosts percent-decode
//! request paths before looking up files, so the encoded links resolve.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::ContentError;
use crate::render::Site;
use crate::router::Route;
use crate::types::PageEntry;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content error: {0}")]
    Content(#[from] ContentError),
    #[error("failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a build wrote.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Written pages in route order, the not-found page last.
    pub pages: Vec<PageEntry>,
    /// Number of asset files copied.
    pub assets: usize,
    pub output_dir: PathBuf,
}

/// Render the site into `output_dir`.
///
/// `base_dir` anchors a relative `site.assets_dir`, normally the directory
/// holding the config file.
pub fn generate(
    site: &Site,
    output_dir: &Path,
    base_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    site.registry.validate()?;
    for (loc, count) in site.registry.duplicate_locations() {
        tracing::warn!(kind = %loc.kind, name = loc.name, count, "location listed more than once");
    }

    fs::create_dir_all(output_dir)?;

    // Assets first so generated pages win on collisions
    let assets = match &site.config.site.assets_dir {
        Some(dir) => copy_assets(&base_dir.join(dir), output_dir)?,
        None => 0,
    };

    let routes = site.router.pages(&site.registry);
    let mut pages = routes
        .par_iter()
        .map(|route| write_page(site, output_dir, route))
        .collect::<Result<Vec<_>, _>>()?;
    pages.push(write_page(site, output_dir, &Route::NotFound)?);

    write_sitemap(site, &routes, output_dir)?;

    tracing::info!(
        pages = pages.len(),
        assets,
        output = %output_dir.display(),
        "site generated"
    );

    Ok(GenerateSummary {
        pages,
        assets,
        output_dir: output_dir.to_path_buf(),
    })
}

/// Every page a build would write, without writing anything.
pub fn page_entries(site: &Site) -> Vec<PageEntry> {
    site.router
        .pages(&site.registry)
        .iter()
        .chain(std::iter::once(&Route::NotFound))
        .map(|route| page_entry(site, route))
        .collect()
}

fn page_entry(site: &Site, route: &Route) -> PageEntry {
    PageEntry {
        title: site.title(route),
        href: site.router.href(route),
        file: site.router.output_file(route).to_string_lossy().into_owned(),
    }
}

fn write_page(site: &Site, output_dir: &Path, route: &Route) -> Result<PageEntry, GenerateError> {
    let entry = page_entry(site, route);
    let path = output_dir.join(&entry.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, site.render_page(route).into_string())?;
    tracing::debug!(file = %entry.file, "wrote page");
    Ok(entry)
}

/// `sitemap.xml` with one absolute URL per declared route, plus `robots.txt`
/// pointing at it.
fn write_sitemap(site: &Site, routes: &[Route], output_dir: &Path) -> Result<(), GenerateError> {
    let base = site.config.site.base_url.trim_end_matches('/');
    let urls: Vec<String> = routes
        .iter()
        .map(|route| {
            format!(
                "  <url>\n    <loc>{}{}</loc>\n  </url>",
                base,
                xml_escape(&site.router.href(route))
            )
        })
        .collect();

    let sitemap = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>
"#,
        urls.join("\n")
    );
    fs::write(output_dir.join("sitemap.xml"), sitemap)?;

    let robots = format!("User-agent: *\nAllow: /\nSitemap: {base}/sitemap.xml\n");
    fs::write(output_dir.join("robots.txt"), robots)?;
    Ok(())
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Copy the user's assets directory into the output root.
///
/// A configured but missing directory is skipped with a warning.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        tracing::warn!(path = %src.display(), "assets directory not found, skipping");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
