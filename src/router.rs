//! Path → page dispatch.
//!
//! Two routing styles share one set of renderers:
//!
//! | Style | Declared routes |
//! |-------|-----------------|
//! | `path` | `/`, `/servicos`, `/sobre`, `/condicoes`, `/depoimentos`, `/contato`, `/{locations}/{tag}/{name}` |
//! | `anchor` | `/`, `/{locations}/{tag}/{name}` (sections are anchors on the home page) |
//!
//! Every other path resolves to [`Route::NotFound`]. Resolution is total: it
//! never returns an error.
//!
//! The tag segment must be exactly `bairro` or `cidade`. The name segment is
//! percent-decoded and, under the default policy, accepted even when the
//! registry has no such location, so long-tail links still land on a page.

use std::path::PathBuf;

use crate::config::{LocationsConfig, RoutingConfig, RoutingStyle, UnknownLocation};
use crate::content::{LocationKind, Registry};
use crate::naming::{decode_component, location_dir, location_href};
use crate::types::NavItem;

/// Content sections. In path style each is its own page; in anchor style
/// each is a block on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    Conditions,
    About,
    Testimonials,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::Services,
        Section::Conditions,
        Section::About,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Path segment and anchor id.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Services => "servicos",
            Section::Conditions => "condicoes",
            Section::About => "sobre",
            Section::Testimonials => "depoimentos",
            Section::Contact => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Services => "Tratamentos",
            Section::Conditions => "O que Tratamos",
            Section::About => "Clínica",
            Section::Testimonials => "Depoimentos",
            Section::Contact => "Contato",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// The page selected for a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Section(Section),
    /// Location landing page. `name` is the decoded segment and may be
    /// absent from the registry.
    Location { kind: LocationKind, name: String },
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Router {
    style: RoutingStyle,
    locations_path: Vec<String>,
    unknown: UnknownLocation,
}

impl Router {
    pub fn new(routing: &RoutingConfig, locations: &LocationsConfig) -> Self {
        Self {
            style: routing.style,
            locations_path: routing
                .locations_path
                .split('/')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            unknown: locations.unknown_names,
        }
    }

    pub fn style(&self) -> RoutingStyle {
        self.style
    }

    fn locations_prefix(&self) -> String {
        self.locations_path.join("/")
    }

    /// Select the route for a request path.
    ///
    /// Query strings and fragments are ignored, as are one trailing slash and
    /// a trailing `index.html`.
    pub fn resolve(&self, path: &str, registry: &Registry) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let Some(path) = path.strip_prefix('/') else {
            return Route::NotFound;
        };
        let path = if path == "index.html" {
            ""
        } else {
            path.strip_suffix("/index.html").unwrap_or(path)
        };
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Route::Home;
        }

        let segments: Vec<&str> = path.split('/').collect();

        if let [slug] = segments.as_slice() {
            if self.style == RoutingStyle::Path {
                if let Some(section) = Section::from_slug(slug) {
                    return Route::Section(section);
                }
            }
        }

        let prefix_len = self.locations_path.len();
        if segments.len() == prefix_len + 2
            && segments[..prefix_len]
                .iter()
                .zip(&self.locations_path)
                .all(|(seg, expected)| *seg == expected.as_str())
        {
            let (tag, raw_name) = (segments[prefix_len], segments[prefix_len + 1]);
            let Some(kind) = LocationKind::from_tag(tag) else {
                return Route::NotFound;
            };
            if raw_name.is_empty() {
                return Route::NotFound;
            }
            let name = decode_component(raw_name);
            if self.unknown == UnknownLocation::NotFound && registry.location(kind, &name).is_none()
            {
                return Route::NotFound;
            }
            return Route::Location { kind, name };
        }

        Route::NotFound
    }

    /// Canonical link to a route. Anchor-style sections link into the home page.
    pub fn href(&self, route: &Route) -> String {
        match route {
            Route::Home => "/".to_string(),
            Route::Section(section) => match self.style {
                RoutingStyle::Path => format!("/{}", section.slug()),
                RoutingStyle::Anchor => format!("/#{}", section.slug()),
            },
            Route::Location { kind, name } => location_href(&self.locations_prefix(), *kind, name),
            Route::NotFound => "/404.html".to_string(),
        }
    }

    /// Output file of a route, relative to the site root.
    ///
    /// Anchor-style sections have no file of their own and map to the home page.
    pub fn output_file(&self, route: &Route) -> PathBuf {
        match route {
            Route::Home => PathBuf::from("index.html"),
            Route::Section(section) => match self.style {
                RoutingStyle::Path => PathBuf::from(section.slug()).join("index.html"),
                RoutingStyle::Anchor => PathBuf::from("index.html"),
            },
            Route::Location { kind, name } => {
                location_dir(&self.locations_prefix(), *kind, name).join("index.html")
            }
            Route::NotFound => PathBuf::from("404.html"),
        }
    }

    /// Every declared page for this style: home, sections (path style only),
    /// then one page per registered location. Repeated registry entries
    /// yield a single route.
    pub fn pages(&self, registry: &Registry) -> Vec<Route> {
        let mut routes = vec![Route::Home];
        if self.style == RoutingStyle::Path {
            routes.extend(Section::ALL.into_iter().map(Route::Section));
        }
        for loc in registry.locations() {
            let route = Route::Location {
                kind: loc.kind,
                name: loc.name.to_string(),
            };
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
        routes
    }

    /// Header navigation entries.
    pub fn nav_items(&self) -> Vec<NavItem> {
        std::iter::once(NavItem {
            label: "Home",
            href: "/".to_string(),
        })
        .chain(Section::ALL.into_iter().map(|section| NavItem {
            label: section.label(),
            href: self.href(&Route::Section(section)),
        }))
        .collect()
    }
}
