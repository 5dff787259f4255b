//! App Page
//!
//! Minimal page demonstrating the exported button with its defaults.

use gpui::{Context, IntoElement, Render, Styled, Window};
use gpui_component::label::Label;

use crate::components::layout::shell::PageShell;
use crate::components::primitives::button::Button;
use crate::theme::colors::RemoteColors;

/// Heading shown at the top of the page
pub const APP_HEADING: &str = "Remote Microfrontend";

/// Descriptive text shown under the heading
pub const APP_TAGLINE: &str = "This is a remote microfrontend and here is the exported button";

/// Page composing the exported Button with no custom configuration
pub struct AppPage;

impl AppPage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AppPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for AppPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        PageShell::new()
            .child(
                Label::new(APP_HEADING)
                    .text_2xl()
                    .text_color(RemoteColors::text_primary()),
            )
            .child(Label::new(APP_TAGLINE).text_color(RemoteColors::text_secondary()))
            .child(Button::new("exported-button"))
    }
}
