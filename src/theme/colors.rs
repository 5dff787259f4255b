//! Colors - Remote UI Palette

use gpui::{Rgba, rgb};

/// Fixed color palette - All colors are accessed via associated functions
pub struct RemoteColors;

impl RemoteColors {
    // Button colors
    /// Primary action - blue
    pub fn button_primary() -> Rgba {
        rgb(0x007bff)
    }
    /// Secondary action - gray
    pub fn button_secondary() -> Rgba {
        rgb(0x6c757d)
    }
    /// Danger action - red
    pub fn button_danger() -> Rgba {
        rgb(0xdc3545)
    }
    /// Disabled control background - neutral gray
    pub fn button_disabled() -> Rgba {
        rgb(0xcccccc)
    }
    /// Button label text
    pub fn button_text() -> Rgba {
        rgb(0xffffff)
    }

    // Page colors
    /// Page background
    pub fn background() -> Rgba {
        rgb(0xffffff)
    }
    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x1f2937)
    }
    /// Secondary text
    pub fn text_secondary() -> Rgba {
        rgb(0x6b7280)
    }
}
