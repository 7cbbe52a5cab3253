//! Viewport UI state.
//!
//! Three independent two-state machines, none persisted and none shared
//! between pages:
//!
//! | Flag | Driven by | Active when |
//! |------|-----------|-------------|
//! | header shrink | scroll offset | offset > `ui.header_shrink_threshold` |
//! | back-to-top button | scroll offset | offset > `ui.back_to_top_threshold` |
//! | mobile menu | toggle button | opened, until the next navigation |
//!
//! Renderers read a [`Viewport`] to emit the initial markup (classes,
//! `hidden` attributes) and the thresholds as `data-*` attributes. The
//! browser script (`static/site.js`) drives the same transitions from real
//! scroll, click and navigation events.
//!
//! Past that initial state, [`Viewport::on_scroll`], [`Viewport::toggle_menu`]
//! and [`Viewport::navigate`] are the reference model for the script: the
//! server never calls them, and their tests pin down what `site.js` must do.
//! A navigation to the path already shown is a fragment jump. It closes the
//! menu and leaves the page and scroll position alone.

use crate::config::UiConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Switch {
    #[default]
    Inactive,
    Active,
}

impl Switch {
    pub fn is_active(self) -> bool {
        self == Switch::Active
    }

    fn from_bool(active: bool) -> Self {
        if active { Switch::Active } else { Switch::Inactive }
    }
}

/// A flag that switches on past a scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFlag {
    threshold: u32,
    state: Switch,
}

impl ScrollFlag {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            state: Switch::Inactive,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Feed a scroll offset; returns true when the state changed.
    pub fn observe(&mut self, offset: u32) -> bool {
        let next = Switch::from_bool(offset > self.threshold);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn state(&self) -> Switch {
        self.state
    }
}

/// Side effects of a navigation, in the order the browser applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CloseMenu,
    ScrollToTop,
    SetTitle(String),
}

/// Transient UI state of one browsing context.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    header: ScrollFlag,
    back_to_top: ScrollFlag,
    menu: Switch,
    path: String,
}

impl Viewport {
    /// Fresh state at the top of `path` with the menu closed.
    pub fn new(config: &UiConfig, path: &str) -> Self {
        Self {
            header: ScrollFlag::new(config.header_shrink_threshold),
            back_to_top: ScrollFlag::new(config.back_to_top_threshold),
            menu: Switch::Inactive,
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn on_scroll(&mut self, offset: u32) {
        self.header.observe(offset);
        self.back_to_top.observe(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.menu = Switch::from_bool(!self.menu.is_active());
    }

    /// Client-side navigation to `path`.
    ///
    /// The menu always closes. Scroll resets to the top only when the path
    /// actually changes. The document title is replaced by the new page's.
    pub fn navigate(&mut self, path: &str, title: &str) -> Vec<Effect> {
        let mut effects = vec![Effect::CloseMenu];
        self.menu = Switch::Inactive;
        if path != self.path {
            effects.push(Effect::ScrollToTop);
            self.on_scroll(0);
            self.path = path.to_string();
        }
        effects.push(Effect::SetTitle(title.to_string()));
        effects
    }

    pub fn header_shrunk(&self) -> bool {
        self.header.state().is_active()
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top.state().is_active()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_active()
    }

    /// Header shrink threshold, handed to the browser script.
    pub fn header_threshold(&self) -> u32 {
        self.header.threshold()
    }

    /// Back-to-top threshold, handed to the browser script.
    pub fn top_threshold(&self) -> u32 {
        self.back_to_top.threshold()
    }
}
