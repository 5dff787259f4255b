//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    Rgba, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::constants::{
    BUTTON_DEFAULT_LABEL, BUTTON_FONT_SIZE, BUTTON_PADDING_X, BUTTON_PADDING_Y,
    OPACITY_DISABLED, OPACITY_HOVER, OPACITY_NORMAL,
};
use crate::theme::colors::RemoteColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Danger button (red)
    Danger,
}

impl ButtonVariant {
    /// Resolve a variant from its name. Unrecognized names fall back to Primary.
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" => ButtonVariant::Primary,
            "secondary" => ButtonVariant::Secondary,
            "danger" => ButtonVariant::Danger,
            _ => ButtonVariant::Primary,
        }
    }

    /// Background color for this variant
    pub fn background(self) -> Rgba {
        match self {
            ButtonVariant::Primary => RemoteColors::button_primary(),
            ButtonVariant::Secondary => RemoteColors::button_secondary(),
            ButtonVariant::Danger => RemoteColors::button_danger(),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button with default content and the Primary variant
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            variant: ButtonVariant::Primary,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the displayed content
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>) -> Self {
        Self::new(id).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>) -> Self {
        Self::new(id).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>) -> Self {
        Self::new(id).variant(ButtonVariant::Danger)
    }

    /// Background after applying the disabled override
    fn resolved_background(&self) -> Rgba {
        if self.disabled {
            RemoteColors::button_disabled()
        } else {
            self.variant.background()
        }
    }

    /// Idle opacity after applying the disabled override
    fn resolved_opacity(&self) -> f32 {
        if self.disabled {
            OPACITY_DISABLED
        } else {
            OPACITY_NORMAL
        }
    }

    /// Content shown on the control
    fn effective_label(&self) -> SharedString {
        self.label
            .clone()
            .unwrap_or_else(|| SharedString::from(BUTTON_DEFAULT_LABEL))
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let background = self.resolved_background();
        let opacity = self.resolved_opacity();
        let label = self.effective_label();

        let mut element = div()
            .id(self.id)
            .px(px(BUTTON_PADDING_X))
            .py(px(BUTTON_PADDING_Y))
            .bg(background)
            .text_color(RemoteColors::button_text())
            .text_size(px(BUTTON_FONT_SIZE))
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .opacity(opacity)
            .child(label);

        // Hover affordance and activation are suppressed entirely while disabled
        if !self.disabled {
            element = element
                .cursor_pointer()
                .hover(|s| s.opacity(OPACITY_HOVER));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
