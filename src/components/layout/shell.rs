//! Shell Component
//!
//! Page shell wrapping the content a remote page renders.

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*};

use crate::theme::colors::RemoteColors;

/// Page shell wrapper
#[derive(IntoElement)]
pub struct PageShell {
    children: Vec<gpui::AnyElement>,
}

impl PageShell {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for PageShell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_start()
            .gap_4()
            .p_8()
            .bg(RemoteColors::background())
            .children(self.children)
    }
}
