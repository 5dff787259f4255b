//! UI and Server Constants
//!
//! Centralized constants for consistent rendering and serving across the crate.

/// Symbolic name this remote publishes itself under
pub const REMOTE_NAME: &str = "remote";

/// Filename of the remote entry manifest fetched by hosts
pub const REMOTE_ENTRY_FILE: &str = "remote-entry.json";

/// Exposed module name for the App page
pub const EXPOSE_APP: &str = "./App";

/// Exposed module name for the Button primitive
pub const EXPOSE_BUTTON: &str = "./Button";

/// Development server port
pub const DEV_SERVER_PORT: u16 = 3000;

/// Directory of built assets served in development
pub const STATIC_DIR: &str = "dist";

/// Label rendered when a button is given no content
pub const BUTTON_DEFAULT_LABEL: &str = "Click me";

/// Button horizontal padding in pixels
pub const BUTTON_PADDING_X: f32 = 20.0;

/// Button vertical padding in pixels
pub const BUTTON_PADDING_Y: f32 = 10.0;

/// Button label font size
pub const BUTTON_FONT_SIZE: f32 = 16.0;

/// Opacity of an idle enabled control
pub const OPACITY_NORMAL: f32 = 1.0;

/// Opacity while the pointer hovers an enabled control
pub const OPACITY_HOVER: f32 = 0.8;

/// Opacity of a disabled control
pub const OPACITY_DISABLED: f32 = 0.6;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;
