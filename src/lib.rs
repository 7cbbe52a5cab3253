//! # Clinic Site
//!
//! Website generator for a physical therapy clinic: a handful of content
//! pages plus one search-oriented landing page per neighborhood and nearby
//! city. All content is compiled in; a small `site.toml` supplies contact
//! details, routing style and palette.
//!
//! # Architecture
//!
//! ```text
//! content (static records)  ─┐
//! site.toml → config         ├─→ router → render (maud) ─┬─→ generate → dist/
//!                            ┘                           └─→ serve   → HTTP
//! ```
//!
//! Every page is a pure function of the content registry, the config and the
//! requested route. The same renderers back the static build and the preview
//! server, so the two never drift apart.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Services, testimonials, conditions, FAQs, and the location lists |
//! | [`config`] | `site.toml` loading, stock defaults, merging, validation, CSS palette |
//! | [`naming`] | Percent-encoding of location names in URL segments |
//! | [`router`] | Path → [`router::Route`] resolution, canonical links, output files |
//! | [`render`] | maud templates: layout, sections, location landing pages |
//! | [`contact`] | Messaging deep links and the contact form template |
//! | [`ui`] | Header shrink, back-to-top and mobile menu state |
//! | [`generate`] | Parallel static build, sitemap, asset copy |
//! | [`serve`] | axum preview server rendering routes on request |
//! | [`output`] | CLI output formatting |
//! | [`types`] | Small shared types (`NavItem`, `PageEntry`) |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Location names come
//! straight from the URL, and maud escapes every interpolation, so a hostile
//! name renders as text.
//!
//! ## One Renderer, Two Routing Styles
//!
//! The site historically shipped as a multi-page variant and a single-page
//! variant with in-page anchors. `[routing] style` selects between them; the
//! renderers are shared.
//!
//! ## Location Pages Are Enumerated
//!
//! Coverage is a plain list. There is no geography, matching or ranking: every
//! listed name gets the same templated page, and with the default policy any
//! other well-formed name does too.

pub mod config;
pub mod contact;
pub mod content;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod router;
pub mod serve;
pub mod types;
pub mod ui;
