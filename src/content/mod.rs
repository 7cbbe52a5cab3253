//! Content registry.
//!
//! Every record the site renders is authored here and compiled into the
//! binary: services, testimonials, conditions, FAQs, and the two place lists
//! that location landing pages are generated from. Nothing is loaded at
//! runtime and nothing is ever mutated.
//!
//! ## Query Model
//!
//! Lists are exposed as plain slices. Callers iterate them fully, look a
//! record up by its stable key ([`Registry::service`], [`Registry::location`]),
//! or slice positionally (`&registry.services()[..3]`). There is no filtering
//! or sorting service.
//!
//! ## Locations
//!
//! The location set is the neighborhood list followed by the city list, each
//! entry tagged with its [`LocationKind`]. The source lists contain a few
//! repeated names; [`Registry::new`] keeps the first occurrence of each
//! `(kind, name)` key when deduplication is on, and keeps the raw multiset
//! otherwise. [`Registry::duplicate_locations`] reports the repeats either way.

mod catalog;
mod places;

pub use catalog::{CONDITIONS, FAQS, SERVICES, TESTIMONIALS};
pub use places::{CITIES, NEIGHBORHOODS};

use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("duplicate service id: {0}")]
    DuplicateServiceId(String),
    #[error("testimonial {id} has rating {rating}, expected 1-5")]
    RatingOutOfRange { id: u32, rating: u8 },
    #[error("location name {0:?} cannot be used as a path segment")]
    UnroutableLocation(String),
}

/// A treatment offering.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    /// Stable key, unique across the list.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Ordered benefit bullets shown on the service card.
    pub benefits: &'static [&'static str],
    pub image: Option<&'static str>,
    /// Font Awesome icon class, e.g. `fa-lungs`.
    pub icon: &'static str,
    /// Shows a "new" badge on the card.
    pub is_new: bool,
}

/// A patient quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    /// Treatment label shown under the name.
    pub treatment: &'static str,
    pub text: &'static str,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

/// A treatable ailment.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Variant tag of a location, also used as its route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocationKind {
    Neighborhood,
    City,
}

impl LocationKind {
    pub const ALL: [LocationKind; 2] = [LocationKind::Neighborhood, LocationKind::City];

    /// Route segment for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            LocationKind::Neighborhood => "bairro",
            LocationKind::City => "cidade",
        }
    }

    /// Parse a route segment. Only the two exact tags are recognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bairro" => Some(LocationKind::Neighborhood),
            "cidade" => Some(LocationKind::City),
            _ => None,
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A named place that gets its own landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub name: &'static str,
    pub kind: LocationKind,
}

/// Read-only view over all compiled-in content.
#[derive(Debug, Clone)]
pub struct Registry {
    locations: Vec<Location>,
}

impl Registry {
    /// Build the registry. With `dedupe`, repeated `(kind, name)` keys keep
    /// only their first occurrence.
    pub fn new(dedupe: bool) -> Self {
        let all = raw_locations();
        let locations = if dedupe {
            let mut seen = HashSet::new();
            all.into_iter().filter(|loc| seen.insert(*loc)).collect()
        } else {
            all
        };
        Self { locations }
    }

    pub fn services(&self) -> &'static [Service] {
        SERVICES
    }

    pub fn testimonials(&self) -> &'static [Testimonial] {
        TESTIMONIALS
    }

    pub fn conditions(&self) -> &'static [Condition] {
        CONDITIONS
    }

    pub fn faqs(&self) -> &'static [Faq] {
        FAQS
    }

    /// Every location in source order (neighborhoods, then cities).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn service(&self, id: &str) -> Option<&'static Service> {
        SERVICES.iter().find(|s| s.id == id)
    }

    pub fn location(&self, kind: LocationKind, name: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|loc| loc.kind == kind && loc.name == name)
    }

    /// Keys that occur more than once in the source lists, with their count.
    ///
    /// Reported against the raw lists, so the answer does not depend on
    /// whether this registry deduplicated them.
    pub fn duplicate_locations(&self) -> Vec<(Location, usize)> {
        let all = raw_locations();
        let mut dupes: Vec<(Location, usize)> = Vec::new();
        for loc in &all {
            if dupes.iter().any(|(seen, _)| seen == loc) {
                continue;
            }
            let count = all.iter().filter(|other| *other == loc).count();
            if count > 1 {
                dupes.push((*loc, count));
            }
        }
        dupes
    }

    /// Check the registry invariants over the shipped content.
    pub fn validate(&self) -> Result<(), ContentError> {
        validate_content(SERVICES, TESTIMONIALS, &self.locations)
    }
}

/// Check content invariants: unique service ids, ratings in range, and
/// location names usable as a single path segment.
pub fn validate_content(
    services: &[Service],
    testimonials: &[Testimonial],
    locations: &[Location],
) -> Result<(), ContentError> {
    let mut ids = HashSet::new();
    for service in services {
        if !ids.insert(service.id) {
            return Err(ContentError::DuplicateServiceId(service.id.to_string()));
        }
    }
    for t in testimonials {
        if !(1..=5).contains(&t.rating) {
            return Err(ContentError::RatingOutOfRange {
                id: t.id,
                rating: t.rating,
            });
        }
    }
    for loc in locations {
        if loc.name.is_empty() || loc.name == "." || loc.name == ".." || loc.name.contains('/') {
            return Err(ContentError::UnroutableLocation(loc.name.to_string()));
        }
    }
    Ok(())
}

fn raw_locations() -> Vec<Location> {
    NEIGHBORHOODS
        .iter()
        .map(|&name| Location {
            name,
            kind: LocationKind::Neighborhood,
        })
        .chain(CITIES.iter().map(|&name| Location {
            name,
            kind: LocationKind::City,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        assert_eq!(Registry::new(true).validate(), Ok(()));
        assert_eq!(Registry::new(false).validate(), Ok(()));
    }

    #[test]
    fn raw_set_is_neighborhoods_then_cities() {
        let registry = Registry::new(false);
        let locations = registry.locations();
        assert_eq!(locations.len(), NEIGHBORHOODS.len() + CITIES.len());
        assert_eq!(locations[0].name, NEIGHBORHOODS[0]);
        assert_eq!(locations[0].kind, LocationKind::Neighborhood);
        let last = locations.last().unwrap();
        assert_eq!(last.name, "Curitiba");
        assert_eq!(last.kind, LocationKind::City);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let registry = Registry::new(true);
        let torres: Vec<_> = registry
            .locations()
            .iter()
            .filter(|l| l.name == "Vila Torres")
            .collect();
        assert_eq!(torres.len(), 1);
        assert_eq!(
            registry.locations().len(),
            Registry::new(false).locations().len() - 4
        );
        // Order follows first occurrence
        assert_eq!(registry.locations()[1].name, "Vila Torres");
    }

    #[test]
    fn duplicates_reported_regardless_of_policy() {
        let expected = ["Vila Torres", "Vila Sabará", "Augusta", "São Miguel"];
        for dedupe in [true, false] {
            let dupes = Registry::new(dedupe).duplicate_locations();
            let names: Vec<_> = dupes.iter().map(|(l, _)| l.name).collect();
            assert_eq!(names.len(), expected.len());
            for name in expected {
                assert!(names.contains(&name), "missing {name}");
            }
            assert!(dupes.iter().all(|(_, count)| *count == 2));
        }
    }

    #[test]
    fn lookup_by_key() {
        let registry = Registry::new(true);
        assert_eq!(
            registry.service("ozonioterapia").map(|s| s.title),
            Some("Ozonioterapia Medicinal")
        );
        assert!(registry.service("nope").is_none());
        assert!(
            registry
                .location(LocationKind::Neighborhood, "Ahú (Alto da Glória)")
                .is_some()
        );
        // Kind is part of the key
        assert!(registry.location(LocationKind::City, "Fazendinha").is_none());
        assert!(registry.location(LocationKind::City, "Curitiba").is_some());
    }

    #[test]
    fn tags_round_trip() {
        for kind in LocationKind::ALL {
            assert_eq!(LocationKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(LocationKind::from_tag("Bairro"), None);
        assert_eq!(LocationKind::from_tag(""), None);
        assert_eq!(LocationKind::City.to_string(), "cidade");
    }

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    fn service(id: &'static str) -> Service {
        Service {
            id,
            title: "T",
            description: "D",
            benefits: &[],
            image: None,
            icon: "fa-star",
            is_new: false,
        }
    }

    fn testimonial(id: u32, rating: u8) -> Testimonial {
        Testimonial {
            id,
            name: "Ana",
            treatment: "Ozonioterapia",
            text: "Ótimo",
            rating,
        }
    }

    #[test]
    fn duplicate_service_id_rejected() {
        let services = [service("a"), service("b"), service("a")];
        assert_eq!(
            validate_content(&services, &[], &[]),
            Err(ContentError::DuplicateServiceId("a".to_string()))
        );
    }

    #[test]
    fn rating_outside_one_to_five_rejected() {
        for rating in [0, 6] {
            let testimonials = [testimonial(1, 5), testimonial(2, rating)];
            assert_eq!(
                validate_content(&[], &testimonials, &[]),
                Err(ContentError::RatingOutOfRange { id: 2, rating })
            );
        }
        assert_eq!(
            validate_content(&[], &[testimonial(1, 1), testimonial(2, 5)], &[]),
            Ok(())
        );
    }

    #[test]
    fn unroutable_location_names_rejected() {
        for name in ["", ".", "..", "a/b"] {
            let locations = [
                Location {
                    name: "Centro",
                    kind: LocationKind::Neighborhood,
                },
                Location {
                    name,
                    kind: LocationKind::City,
                },
            ];
            assert_eq!(
                validate_content(&[], &[], &locations),
                Err(ContentError::UnroutableLocation(name.to_string())),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn only_photon_dome_is_new() {
        let new: Vec<_> = SERVICES.iter().filter(|s| s.is_new).map(|s| s.id).collect();
        assert_eq!(new, vec!["photon-dome"]);
    }
}
