//! HTML rendering.
//!
//! Every page is a pure function from content and config to [`Markup`]:
//!
//! - **Layout** (this module): document shell, header with desktop and mobile
//!   navigation, footer with the location keyword cloud, floating contact
//!   buttons.
//! - **Sections** ([`pages`]): services, conditions, about, testimonials,
//!   contact. Path-style sites give each its own page; anchor-style sites
//!   stack them on the home page.
//! - **Location landing pages** ([`location`]): one templated page per place.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base styles (palette injected from config)
//! - `static/site.js`: scroll flags, mobile menu, contact bridge, and
//!   client-side navigation
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is escaped, which matters here: location names in the
//! URL are visitor-controlled.

pub mod location;
pub mod pages;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::{self, RoutingStyle, SiteConfig};
use crate::contact::{messaging_link, tel_link};
use crate::content::Registry;
use crate::router::{Route, Router, Section};
use crate::ui::Viewport;

const CSS_STATIC: &str = include_str!("../../static/style.css");
const JS: &str = include_str!("../../static/site.js");

/// Everything a renderer needs: config, content, routing, and the stylesheet.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub registry: Registry,
    pub router: Router,
    css: String,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        let registry = Registry::new(config.locations.dedupe);
        let router = Router::new(&config.routing, &config.locations);
        let css = format!(
            "{}\n\n{}",
            config::generate_color_css(&config.colors),
            CSS_STATIC
        );
        Self {
            config,
            registry,
            router,
            css,
        }
    }

    pub fn resolve(&self, path: &str) -> Route {
        self.router.resolve(path, &self.registry)
    }

    /// Document title of a route.
    pub fn title(&self, route: &Route) -> String {
        let name = &self.config.site.name;
        match route {
            Route::Home => format!("{name} | Fisioterapia Regenerativa e Ozonioterapia em Curitiba"),
            Route::Section(section) => format!("{} | {name}", pages::section_heading(*section)),
            Route::Location { name: place, .. } => location::title(place, name),
            Route::NotFound => format!("Página não encontrada | {name}"),
        }
    }

    /// Render a route as first served: scrolled to the top, menu closed.
    pub fn render_page(&self, route: &Route) -> Markup {
        let viewport = Viewport::new(&self.config.ui, &self.router.href(route));
        self.render(route, &viewport)
    }

    /// Render a route with explicit UI state.
    pub fn render(&self, route: &Route, viewport: &Viewport) -> Markup {
        let content = match route {
            Route::Home => pages::home(self),
            Route::Section(section) => pages::section_page(self, *section),
            Route::Location { kind, name } => location::render(self, *kind, name),
            Route::NotFound => pages::not_found(),
        };
        let description = match route {
            Route::Location { kind, name } => location::description(*kind, name),
            _ => "Fisioterapia Regenerativa, Ozonioterapia e Terapia Neural em Curitiba. \
                  Tratamento de dores crônicas sem cirurgia."
                .to_string(),
        };
        self.base_document(
            &self.title(route),
            &description,
            viewport,
            html! {
                (self.site_header(route, viewport))
                main #main-content { (content) }
                (self.footer())
                (floating_buttons(&self.config, viewport))
            },
        )
    }

    /// Messaging link with an optional pre-filled text.
    pub fn whatsapp(&self, text: Option<&str>) -> String {
        messaging_link(&self.config.clinic.phone_number, text)
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Renders the base HTML document structure
    fn base_document(
        &self,
        title: &str,
        description: &str,
        viewport: &Viewport,
        content: Markup,
    ) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(self.config.site.lang) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    meta name="description" content=(description);
                    link rel="stylesheet" href=(self.config.embeds.icon_stylesheet);
                    style { (PreEscaped(&self.css)) }
                }
                body
                    data-header-threshold=(viewport.header_threshold())
                    data-top-threshold=(viewport.top_threshold())
                {
                    (content)
                    script { (PreEscaped(JS)) }
                }
            }
        }
    }

    /// Renders the fixed header with desktop nav and the mobile menu
    fn site_header(&self, current: &Route, viewport: &Viewport) -> Markup {
        let items = self.router.nav_items();
        let current_href = match (current, self.router.style()) {
            (Route::Home, _) => Some("/".to_string()),
            (Route::Section(_), RoutingStyle::Path) => Some(self.router.href(current)),
            _ => None,
        };
        let menu_open = viewport.menu_open();
        let cta = self.whatsapp(Some(&format!(
            "Olá, vi o site da {} e gostaria de agendar uma consulta.",
            self.config.site.name
        )));

        html! {
            header.site-header.scrolled[viewport.header_shrunk()] data-site-header {
                div.container.header-bar {
                    a.brand href="/" {
                        span.brand-name { (self.config.site.name) }
                        span.brand-tagline { (self.config.site.tagline) }
                    }
                    nav.desktop-nav aria-label="Principal" {
                        @for item in &items {
                            @let is_current = current_href.as_deref() == Some(item.href.as_str());
                            a.nav-link.current[is_current] href=(item.href) { (item.label) }
                        }
                        a.btn.btn-primary.btn-small href=(cta) target="_blank" rel="noopener" {
                            "Agendar Agora"
                        }
                    }
                    button.menu-toggle type="button" aria-label="Menu"
                        aria-controls="mobile-menu" aria-expanded=(if menu_open { "true" } else { "false" }) data-menu-toggle
                    {
                        i class=(if menu_open { "fas fa-times" } else { "fas fa-bars" }) {}
                    }
                }
                div #mobile-menu .mobile-menu hidden[!menu_open] {
                    @for item in &items {
                        a.mobile-link href=(item.href) { (item.label) }
                    }
                    a.btn.btn-whatsapp.btn-block href=(self.whatsapp(None)) target="_blank" rel="noopener" {
                        i.fab.fa-whatsapp {} " Agendar no WhatsApp"
                    }
                }
            }
        }
    }

    /// Renders the footer: brand, site map, specialties, contact, and the
    /// location keyword cloud
    fn footer(&self) -> Markup {
        let clinic = &self.config.clinic;
        let name = &self.config.site.name;

        html! {
            footer.site-footer {
                div.container.footer-grid {
                    div {
                        h3.footer-brand { (name) }
                        p.footer-about {
                            "Clínica especializada em Fisioterapia Regenerativa e Ozonioterapia em Curitiba. "
                            "Nossa missão é proporcionar alívio da dor e qualidade de vida através de "
                            "tratamentos naturais e tecnologia de ponta."
                        }
                        div.social {
                            @for network in &clinic.social {
                                a href={ "https://" (network) ".com/" (clinic.social_handle) }
                                    target="_blank" rel="noopener noreferrer"
                                    aria-label={ "Siga-nos no " (network) }
                                {
                                    i class={ "fab fa-" (network) } {}
                                }
                            }
                        }
                    }
                    div {
                        h4 { "Mapa do Site" }
                        ul.footer-links {
                            li { a href="/" { "Página Inicial" } }
                            @for section in Section::ALL {
                                li { a href=(self.router.href(&Route::Section(section))) { (section.label()) } }
                            }
                        }
                    }
                    div {
                        h4 { "Especialidades" }
                        ul.footer-links {
                            @for service in self.registry.services().iter().take(5) {
                                li { a href=(self.router.href(&Route::Section(Section::Services))) { (service.title) } }
                            }
                        }
                    }
                    div {
                        h4 { "Fale Conosco" }
                        ul.footer-contact {
                            li { i.fas.fa-map-marker-alt {} " " (clinic.address) }
                            li { i.fas.fa-phone {} " " a href=(tel_link(&clinic.phone_number)) { (clinic.phone_display) } }
                            li { i.fas.fa-envelope {} " " a href={ "mailto:" (clinic.email) } { (clinic.email) } }
                        }
                    }
                }
                div.container.keyword-cloud {
                    h5 { "Atendemos em Curitiba e Região Metropolitana" }
                    div.keyword-links {
                        @for loc in self.registry.locations() {
                            @let route = Route::Location { kind: loc.kind, name: loc.name.to_string() };
                            a href=(self.router.href(&route)) {
                                "Fisioterapia em " (loc.name)
                            }
                        }
                    }
                }
                div.container.footer-bottom {
                    p { "© " (name) " Fisioterapia e Ozonioterapia. Todos os direitos reservados." }
                }
            }
        }
    }
}

/// Renders the floating back-to-top, call, and messaging buttons
fn floating_buttons(config: &SiteConfig, viewport: &Viewport) -> Markup {
    let number = &config.clinic.phone_number;
    let text = format!(
        "Olá, acessei o site da {} e gostaria de mais informações.",
        config.site.name
    );
    html! {
        div.floating-buttons {
            button.fab-top type="button" aria-label="Voltar ao topo"
                hidden[!viewport.back_to_top_visible()] data-back-to-top
            {
                i.fas.fa-arrow-up {}
            }
            a.fab-call href=(tel_link(number)) aria-label="Ligar agora" {
                i.fas.fa-phone-alt {}
            }
            a.fab-whatsapp href=(messaging_link(number, Some(&text))) target="_blank" rel="noopener"
                aria-label="Falar no WhatsApp"
            {
                i.fab.fa-whatsapp {}
            }
        }
    }
}

/// Centered section heading with optional subtitle
pub(crate) fn section_title(title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        div.section-title {
            h2 { (title) }
            @if let Some(subtitle) = subtitle {
                p { (subtitle) }
            }
        }
    }
}

/// Link styled as a button. External links open in a new context.
pub(crate) fn button(href: &str, variant: &str, label: Markup) -> Markup {
    let external = href.starts_with("http");
    html! {
        a class={ "btn btn-" (variant) } href=(href)
            target=[external.then_some("_blank")] rel=[external.then_some("noopener")]
        {
            (label)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownLocation;
    use crate::content::LocationKind;

    fn site() -> Site {
        Site::new(SiteConfig::default())
    }

    fn anchor_site() -> Site {
        let mut config = SiteConfig::default();
        config.routing.style = RoutingStyle::Anchor;
        Site::new(config)
    }

    #[test]
    fn document_has_doctype_lang_and_title() {
        let site = site();
        let html = site.render_page(&Route::Home).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="pt-BR">"#));
        assert!(html.contains("<title>"));
    }

    #[test]
    fn body_carries_thresholds() {
        let html = site().render_page(&Route::Home).into_string();
        assert!(html.contains(r#"data-header-threshold="20""#));
        assert!(html.contains(r#"data-top-threshold="300""#));
    }

    #[test]
    fn css_includes_palette() {
        let html = site().render_page(&Route::Home).into_string();
        assert!(html.contains("--color-deep-blue: #0b3c5d"));
    }

    #[test]
    fn initial_render_has_menu_closed() {
        let html = site().render_page(&Route::Home).into_string();
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("fas fa-bars"));
        assert!(html.contains(r#"id="mobile-menu" hidden>"#));
        assert!(html.contains("hidden data-back-to-top"));
    }

    #[test]
    fn open_menu_then_navigate_renders_closed() {
        let site = site();
        let mut viewport = Viewport::new(&site.config.ui, "/");
        viewport.toggle_menu();
        let open = site.render(&Route::Home, &viewport).into_string();
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(open.contains("fas fa-times"));
        assert!(open.contains(r#"id="mobile-menu">"#));

        let target = Route::Location {
            kind: LocationKind::City,
            name: "Colombo".to_string(),
        };
        viewport.navigate(&site.router.href(&target), &site.title(&target));
        let after = site.render(&target, &viewport).into_string();
        assert!(after.contains(r#"aria-expanded="false""#));
        assert!(after.contains(r#"id="mobile-menu" hidden>"#));
    }

    #[test]
    fn scrolled_viewport_shrinks_header_and_shows_top_button() {
        let site = site();
        let mut viewport = Viewport::new(&site.config.ui, "/");
        viewport.on_scroll(400);
        let html = site.render(&Route::Home, &viewport).into_string();
        assert!(html.contains(r#"class="site-header scrolled""#));
        assert!(!html.contains("data-back-to-top hidden"));
        assert!(!html.contains(r#"hidden data-back-to-top"#));
    }

    #[test]
    fn path_nav_marks_current_section() {
        let site = site();
        let html = site
            .render_page(&Route::Section(Section::Services))
            .into_string();
        assert!(html.contains(r#"class="nav-link current" href="/servicos""#));
    }

    #[test]
    fn anchor_nav_links_into_home() {
        let html = anchor_site().render_page(&Route::Home).into_string();
        assert!(html.contains(r##"href="/#servicos""##));
        assert!(html.contains(r##"href="/#contato""##));
        assert!(!html.contains(r#"href="/servicos""#));
    }

    #[test]
    fn footer_lists_every_location() {
        let site = site();
        let html = site.render_page(&Route::Home).into_string();
        for loc in site.registry.locations() {
            let href = crate::naming::location_href("local", loc.kind, loc.name);
            assert!(html.contains(&href), "missing {href}");
        }
    }

    #[test]
    fn multiset_policy_repeats_cloud_entries() {
        let mut config = SiteConfig::default();
        config.locations.dedupe = false;
        let site = Site::new(config);
        let html = site.render_page(&Route::Home).into_string();
        assert_eq!(html.matches(r#"href="/local/bairro/Vila%20Torres""#).count(), 2);
        let deduped = self::site().render_page(&Route::Home).into_string();
        assert_eq!(
            deduped.matches(r#"href="/local/bairro/Vila%20Torres""#).count(),
            1
        );
    }

    #[test]
    fn floating_buttons_use_configured_number() {
        let mut config = SiteConfig::default();
        config.clinic.phone_number = "5511900001111".to_string();
        let html = Site::new(config).render_page(&Route::Home).into_string();
        assert!(html.contains(r#"href="tel:+5511900001111""#));
        assert!(html.contains("https://wa.me/5511900001111?text="));
    }

    #[test]
    fn titles_per_route() {
        let site = site();
        assert!(site.title(&Route::Home).starts_with("D'Cellyss"));
        assert_eq!(
            site.title(&Route::Section(Section::Testimonials)),
            "Depoimentos | D'Cellyss"
        );
        assert_eq!(
            site.title(&Route::NotFound),
            "Página não encontrada | D'Cellyss"
        );
    }

    #[test]
    fn resolve_uses_location_policy() {
        let mut config = SiteConfig::default();
        config.locations.unknown_names = UnknownLocation::NotFound;
        let strict = Site::new(config);
        assert_eq!(strict.resolve("/local/bairro/Atlantida"), Route::NotFound);
        assert!(matches!(
            site().resolve("/local/bairro/Atlantida"),
            Route::Location { .. }
        ));
    }

    #[test]
    fn button_opens_external_links_in_new_context() {
        let external = button("https://wa.me/1", "primary", html! { "Go" }).into_string();
        assert!(external.contains(r#"target="_blank""#));
        let internal = button("/servicos", "outline", html! { "Go" }).into_string();
        assert!(!internal.contains("target="));
        assert!(internal.contains(r#"class="btn btn-outline""#));
    }
}
