//! Location landing pages.
//!
//! One page per (kind, name). The page is a pure function of the decoded
//! name and its kind: nothing is looked up about the place itself, so names
//! that are not in the registry render just the same.

use maud::{Markup, html};

use super::pages::{faq, map, services_excerpt};
use super::{Site, button};
use crate::content::LocationKind;

/// Headline suffix. Neighborhoods are qualified with the city.
pub fn display_name(kind: LocationKind, name: &str) -> String {
    match kind {
        LocationKind::Neighborhood => format!("{name} - Curitiba"),
        LocationKind::City => name.to_string(),
    }
}

/// Phrase used in running text: "no bairro X" / "na cidade de X".
pub fn locative(kind: LocationKind, name: &str) -> String {
    match kind {
        LocationKind::Neighborhood => format!("no bairro {name}"),
        LocationKind::City => format!("na cidade de {name}"),
    }
}

pub fn title(name: &str, clinic: &str) -> String {
    format!("Fisioterapia e Ozonioterapia em {name} | {clinic}")
}

pub fn description(kind: LocationKind, name: &str) -> String {
    format!(
        "Fisioterapia Regenerativa e Ozonioterapia para quem mora {}. \
         Tratamento de hérnia de disco, ciático e artrose sem cirurgia.",
        locative(kind, name)
    )
}

/// Pre-filled messaging text of the page's call to action.
pub fn cta_text(name: &str) -> String {
    format!("Olá, sou de {name} e busco tratamento.")
}

pub fn render(site: &Site, kind: LocationKind, name: &str) -> Markup {
    let clinic = &site.config.site.name;
    html! {
        section.location-hero {
            div.container {
                h1 {
                    "Fisioterapia Regenerativa e Ozonioterapia em "
                    span.highlight { (display_name(kind, name)) }
                }
                p.lead {
                    "Procurando por " strong { "fisioterapeuta em " (name) } "? "
                    "A " (clinic) " é referência em tratamento de dor sem cirurgia para toda a região."
                }
            }
        }
        div.container.location-grid {
            article.location-article {
                h2 { "Melhor Clínica de Fisioterapia perto de " (name) }
                p {
                    "Moradores de " strong { (name) } " que sofrem com hérnia de disco, nervo ciático "
                    "inflamado ou artrose agora têm uma opção de tratamento de ponta bem próxima. "
                    "A Clínica " (clinic) ", localizada estrategicamente no Fazendinha, oferece fácil "
                    "acesso para quem vem " (locative(kind, name)) "."
                }
                (button(&site.whatsapp(Some(&cta_text(name))), "secondary", html! { "Agendar Avaliação Gratuita" }))
            }
            aside.quick-contact {
                h3 { "Contato Rápido" }
                a.quick-whatsapp href=(site.whatsapp(None)) target="_blank" rel="noopener" {
                    i.fab.fa-whatsapp {} " WhatsApp Direto"
                }
                (map(site, "Mapa de Localização"))
            }
        }
        (services_excerpt(site, "Ver Todos os Tratamentos"))
        (faq(site))
    }
}
