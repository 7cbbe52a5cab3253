//! Home page, content sections, and the not-found page.
//!
//! Each section renders as a `<section id="{slug}">` block. Path-style sites
//! serve one section per page; anchor-style sites stack all of them under the
//! hero so header links jump in-page.

use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

use super::{Site, button, section_title};
use crate::config::RoutingStyle;
use crate::contact::{DEFAULT_INTEREST, MESSAGE_TEMPLATE};
use crate::router::{Route, Section};

const ABOUT_MD: &str = include_str!("../../static/about.md");

/// Page heading of a section, also used in its document title.
pub fn section_heading(section: Section) -> &'static str {
    match section {
        Section::Services => "Nossos Tratamentos",
        Section::Conditions => "O Que Tratamos",
        Section::About => "Sobre a Clínica",
        Section::Testimonials => "Depoimentos",
        Section::Contact => "Contato e Agendamento",
    }
}

pub fn home(site: &Site) -> Markup {
    match site.router.style() {
        RoutingStyle::Path => html! {
            (hero(site))
            section.section.conditions-teaser {
                div.container {
                    (section_title("O Que Tratamos", Some("Especialistas no tratamento de patologias da coluna e dores crônicas.")))
                    div.grid.grid-5 {
                        @for condition in site.registry.conditions().iter().take(5) {
                            div.condition-chip {
                                i class={ "fas " (condition.icon) } {}
                                h3 { (condition.name) }
                            }
                        }
                    }
                    div.center {
                        (button(&site.router.href(&Route::Section(Section::Conditions)), "outline", html! { "Ver Todas as Condições" }))
                    }
                }
            }
            (services_excerpt(site, "Conhecer Todos os Tratamentos"))
            (contact_form(site))
        },
        RoutingStyle::Anchor => html! {
            (hero(site))
            @for section in Section::ALL {
                (section_block(site, section))
            }
        },
    }
}

/// A section on its own page.
pub fn section_page(site: &Site, section: Section) -> Markup {
    html! {
        div.page { (section_block(site, section)) }
    }
}

pub fn not_found() -> Markup {
    html! {
        section.not-found {
            i.fas.fa-compass {}
            h1 { "404" }
            h2 { "Página não encontrada" }
            p {
                "Parece que o caminho que você buscou não existe. Volte para a página inicial "
                "e encontre o tratamento ideal para você."
            }
            (button("/", "primary", html! { "Voltar para a Home" }))
        }
    }
}

fn section_block(site: &Site, section: Section) -> Markup {
    let body = match section {
        Section::Services => services(site),
        Section::Conditions => conditions(site),
        Section::About => about(site),
        Section::Testimonials => testimonials(site),
        Section::Contact => html! {
            (contact_form(site))
            (faq(site))
        },
    };
    html! {
        section id=(section.slug()) class="section" { (body) }
    }
}

fn hero(site: &Site) -> Markup {
    let services_href = site.router.href(&Route::Section(Section::Services));
    html! {
        section.hero {
            div.container.hero-grid {
                div.hero-copy {
                    span.badge { "Fisioterapia em Curitiba - Fazendinha" }
                    h1 {
                        "Fisioterapia Regenerativa e " br;
                        span.highlight { "Ozonioterapia." }
                    }
                    p.lead {
                        "Elimine dores crônicas na coluna, articulações e nervos sem cirurgia. "
                        "Tratamentos de alta performance focados na regeneração dos tecidos."
                    }
                    div.actions {
                        (button(
                            &site.whatsapp(Some("Olá, gostaria de agendar uma avaliação gratuita de fisioterapia")),
                            "primary",
                            html! { "AGENDAR AVALIAÇÃO GRATUITA" },
                        ))
                        (button(&services_href, "outline", html! { "Ver Tratamentos" }))
                    }
                    div.stats {
                        div { strong { "12+" } span { "Anos de Inovação" } }
                        div { strong { "5k+" } span { "Casos Resolvidos" } }
                        div { strong { "Dra. Célia" } span { "Ref. em Ozonioterapia" } }
                    }
                }
                div.hero-visual {
                    p.hero-card-title { "Alívio Imediato" }
                    p { "Tecnologia não invasiva" }
                    p.hero-chip { i.fas.fa-check {} " Sem Cirurgia" }
                }
            }
        }
    }
}

fn services(site: &Site) -> Markup {
    html! {
        div.container {
            (section_title(section_heading(Section::Services), Some("Tecnologia avançada e protocolos exclusivos para recuperação acelerada.")))
            div.grid.grid-3 {
                @for service in site.registry.services() {
                    article.service-card {
                        div.service-media {
                            @if let Some(image) = service.image {
                                img src=(image) alt={ "Tratamento de " (service.title) " em Curitiba" } loading="lazy";
                            }
                            span.service-icon { i class={ "fas " (service.icon) } {} }
                            @if service.is_new {
                                span.badge-new { "Novo" }
                            }
                        }
                        div.service-body {
                            h3 { (service.title) }
                            p { (service.description) }
                            ul.benefits {
                                @for benefit in service.benefits {
                                    li { i.fas.fa-check-circle {} " " (benefit) }
                                }
                            }
                            (button(
                                &site.whatsapp(Some(&format!("Tenho interesse em {}", service.title))),
                                "primary",
                                html! { "Agendar " (service.title) },
                            ))
                        }
                    }
                }
            }
        }
    }
}

/// First three services as a checklist with a link to the full list.
pub(crate) fn services_excerpt(site: &Site, link_label: &str) -> Markup {
    html! {
        section.section.services-teaser {
            div.container {
                h2 { "Tratamentos de Alta Performance" }
                p { "Combinamos tecnologia e terapias manuais para resultados rápidos." }
                ul.checklist {
                    @for service in site.registry.services().iter().take(3) {
                        li { i.fas.fa-check-circle {} " " strong { (service.title) } }
                    }
                }
                (button(&site.router.href(&Route::Section(Section::Services)), "primary", html! { (link_label) }))
            }
        }
    }
}

fn conditions(site: &Site) -> Markup {
    html! {
        div.container {
            (section_title(section_heading(Section::Conditions), Some("Não conviva com a dor. Entenda o que tratamos e recupere sua vida.")))
            div.grid.grid-4 {
                @for condition in site.registry.conditions() {
                    div.condition-card {
                        i class={ "fas " (condition.icon) } {}
                        h3 { (condition.name) }
                        p { "Protocolo especializado disponível" }
                    }
                }
            }
            div.center {
                (button(&site.whatsapp(Some("Tenho uma dessas condições")), "primary", html! { "Agendar Avaliação" }))
            }
        }
    }
}

fn about(site: &Site) -> Markup {
    let parser = Parser::new(ABOUT_MD);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        div.container {
            div.about-grid {
                article.about-content {
                    h1 { "Sobre a " (site.config.site.name) }
                    (PreEscaped(body_html))
                    div.grid.grid-2 {
                        div.value-card { i.fas.fa-award {} h3 { "Excelência" } p { "Protocolos Ouro" } }
                        div.value-card { i.fas.fa-users {} h3 { "Acolhimento" } p { "Atendimento Humanizado" } }
                    }
                }
                div.about-badge {
                    p.name { "Dra. Célia" }
                    p { "Responsável Técnica" }
                }
            }
            (video(site))
        }
    }
}

fn video(site: &Site) -> Markup {
    html! {
        div.video-tour {
            (section_title("Tour Virtual", Some("Conheça nossa estrutura e tecnologia no Fazendinha.")))
            div.video-frame {
                iframe src=(site.config.embeds.video_url)
                    title={ "Clínica de Fisioterapia " (site.config.site.name) " Curitiba" }
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen {}
            }
        }
    }
}

fn testimonials(site: &Site) -> Markup {
    html! {
        div.container {
            (section_title(section_heading(Section::Testimonials), Some("A satisfação de quem já recuperou a saúde conosco.")))
            div.grid.grid-3 {
                @for t in site.registry.testimonials() {
                    blockquote.testimonial {
                        div.stars aria-label={ (t.rating) " de 5 estrelas" } {
                            @for _ in 0..t.rating {
                                i.fas.fa-star {}
                            }
                        }
                        p { "\u{201c}" (t.text) "\u{201d}" }
                        @let initial: String = t.name.chars().take(1).collect();
                        footer {
                            span.avatar { (initial) }
                            div {
                                strong { (t.name) }
                                span.treatment { (t.treatment) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Contact card, map, and the messaging form.
///
/// The form carries everything the browser script needs to build the
/// deep link; nothing is submitted to the site itself.
pub(crate) fn contact_form(site: &Site) -> Markup {
    let clinic = &site.config.clinic;
    html! {
        div.container {
            div.contact-panel {
                div.contact-info {
                    h3 { "Fale Conosco" }
                    p { "Estamos prontos para cuidar de você. Venha conhecer nossa estrutura no Fazendinha." }
                    div.info-row {
                        i.fas.fa-map-marker-alt {}
                        div { h5 { "Endereço" } p { (clinic.address) br; (clinic.postal_code) } }
                    }
                    div.info-row {
                        i.fas.fa-phone-alt {}
                        div { h5 { "Telefone & WhatsApp" } p.mono { (clinic.phone_display) } p { (clinic.email) } }
                    }
                    (map(site, "Mapa da Clínica"))
                }
                form.contact-form data-contact-form
                    data-template=(MESSAGE_TEMPLATE)
                    data-clinic=(site.config.site.name)
                    data-default-service=(DEFAULT_INTEREST)
                    data-link-base=(site.whatsapp(None))
                {
                    h3 { "Solicitar Agendamento" }
                    p { "Preencha os dados abaixo e entraremos em contato." }
                    label { "Nome Completo" input type="text" name="name" placeholder="Seu nome" required; }
                    label { "Seu WhatsApp" input type="tel" name="phone" placeholder="(41) 99999-9999" required; }
                    label {
                        "Tratamento de Interesse"
                        select name="service" {
                            option value="" { "Selecione uma opção..." }
                            @for service in site.registry.services() {
                                option value=(service.title) { (service.title) }
                            }
                            option value="Dor na Coluna" { "Dor na Coluna" }
                            option value="Outro" { "Outro Assunto" }
                        }
                    }
                    label { "Mensagem" textarea name="message" rows="3" placeholder="Conte um pouco sobre sua dor" {} }
                    button.btn.btn-whatsapp.btn-block type="submit" {
                        i.fab.fa-whatsapp {} " AGENDAR AGORA"
                    }
                }
            }
        }
    }
}

pub(crate) fn map(site: &Site, title: &str) -> Markup {
    html! {
        iframe.map src=(site.config.embeds.map_url) title={ (title) " " (site.config.site.name) }
            loading="lazy" width="100%" height="200" {}
    }
}

pub(crate) fn faq(site: &Site) -> Markup {
    html! {
        div.container.faq {
            (section_title("Perguntas Frequentes", Some("Tire suas dúvidas.")))
            @for item in site.registry.faqs() {
                div.faq-item {
                    h3 { i.fas.fa-question-circle {} " " (item.question) }
                    p { (item.answer) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::naming::encode_component;

    fn site() -> Site {
        Site::new(SiteConfig::default())
    }

    #[test]
    fn one_card_per_service() {
        let site = site();
        let html = section_page(&site, Section::Services).into_string();
        assert_eq!(
            html.matches(r#"<article class="service-card">"#).count(),
            site.registry.services().len()
        );
    }

    #[test]
    fn service_cta_carries_encoded_title() {
        let site = site();
        let html = section_page(&site, Section::Services).into_string();
        for service in site.registry.services() {
            let text = encode_component(&format!("Tenho interesse em {}", service.title));
            assert!(html.contains(&text), "missing CTA for {}", service.title);
        }
    }

    #[test]
    fn new_badge_only_on_new_services() {
        let site = site();
        let html = section_page(&site, Section::Services).into_string();
        let new_count = site.registry.services().iter().filter(|s| s.is_new).count();
        assert_eq!(html.matches("badge-new").count(), new_count);
    }

    #[test]
    fn testimonial_stars_match_rating() {
        let site = site();
        let html = section_page(&site, Section::Testimonials).into_string();
        let stars: usize = site
            .registry
            .testimonials()
            .iter()
            .map(|t| t.rating as usize)
            .sum();
        assert_eq!(html.matches("fas fa-star").count(), stars);
    }

    #[test]
    fn about_renders_markdown() {
        let html = section_page(&site(), Section::About).into_string();
        assert!(html.contains("<strong>Fisioterapia Regenerativa e Ozonioterapia em Curitiba</strong>"));
        assert!(html.contains("https://www.youtube.com/embed/IzsrUIrRB_k"));
    }

    #[test]
    fn contact_form_carries_bridge_data() {
        let site = site();
        let html = section_page(&site, Section::Contact).into_string();
        assert!(html.contains("data-contact-form"));
        assert!(html.contains(r#"data-link-base="https://wa.me/5541999163976""#));
        assert!(html.contains(r#"data-default-service="Avaliação Geral""#));
        assert!(html.contains("Perguntas Frequentes"));
        assert_eq!(html.matches(" required").count(), 2);
    }

    #[test]
    fn conditions_page_lists_all() {
        let site = site();
        let html = section_page(&site, Section::Conditions).into_string();
        assert_eq!(
            html.matches(r#"class="condition-card""#).count(),
            site.registry.conditions().len()
        );
    }

    #[test]
    fn path_home_shows_teasers_only() {
        let html = home(&site()).into_string();
        assert!(html.contains("Ver Todas as Condições"));
        assert!(!html.contains(r#"id="servicos""#));
        assert!(html.contains("data-contact-form"));
    }

    #[test]
    fn anchor_home_stacks_every_section() {
        let mut config = SiteConfig::default();
        config.routing.style = RoutingStyle::Anchor;
        let html = home(&Site::new(config)).into_string();
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"id="{}""#, section.slug())));
        }
    }

    #[test]
    fn not_found_page_says_so() {
        let html = not_found().into_string();
        assert!(html.contains("404"));
        assert!(html.contains("Página não encontrada"));
        assert!(html.contains(r#"href="/""#));
    }
}
