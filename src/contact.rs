//! Outbound contact bridge.
//!
//! The contact form never talks to a backend. Its four fields are poured into
//! a fixed message template, the result is percent-encoded, and the visitor is
//! sent to the messaging app with the text pre-filled.
//!
//! The template lives here once. The rendered form carries it (with
//! `{name}`-style placeholders) as a data attribute, and the browser script
//! performs the same substitution that [`ContactForm::compose`] does.

use crate::naming::encode_component;

/// Base of messaging deep links; the destination number follows directly.
pub const MESSAGING_BASE: &str = "https://wa.me/";

/// Interest used when the visitor leaves the select on its placeholder.
pub const DEFAULT_INTEREST: &str = "Avaliação Geral";

/// Message template. Placeholders: `{clinic}`, `{name}`, `{phone}`,
/// `{service}`, `{message}`.
pub const MESSAGE_TEMPLATE: &str = "*Agendamento via Site {clinic}*\n\nOlá, meu nome é *{name}*.\nTelefone: {phone}\nTenho interesse em: *{service}*.\n\n{message}";

/// Free-text contact form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    /// Selected interest; empty means "no preference".
    pub service: String,
    pub message: String,
}

impl ContactForm {
    /// Fill the message template for `clinic`.
    pub fn compose(&self, clinic: &str) -> String {
        let service = if self.service.is_empty() {
            DEFAULT_INTEREST
        } else {
            self.service.as_str()
        };
        fill_template(MESSAGE_TEMPLATE, |key| match key {
            "clinic" => Some(clinic),
            "name" => Some(self.name.as_str()),
            "phone" => Some(self.phone.as_str()),
            "service" => Some(service),
            "message" => Some(self.message.as_str()),
            _ => None,
        })
    }

    /// Messaging deep link carrying the composed message to `number`.
    pub fn deep_link(&self, clinic: &str, number: &str) -> String {
        messaging_link(number, Some(&self.compose(clinic)))
    }
}

/// Replace `{key}` placeholders in a single pass.
///
/// Substituted text is never rescanned, so user input that looks like a
/// placeholder stays literal. Unknown keys are left in place.
pub fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after[..close];
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// `https://wa.me/{number}`, with `?text=` when a message is given.
pub fn messaging_link(number: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("{MESSAGING_BASE}{number}?text={}", encode_component(text)),
        None => format!("{MESSAGING_BASE}{number}"),
    }
}

/// Dialer deep link.
pub fn tel_link(number: &str) -> String {
    format!("tel:+{number}")
}
