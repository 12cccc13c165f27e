// Shared display/toggle constants used by the core logic and the web frontend.

// Inline style values written by the toggle
pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

// CSS property the toggle reads and writes
pub const DISPLAY_PROPERTY: &str = "display";

// Name the web frontend publishes on `window` for inline `onclick` handlers
pub const GLOBAL_TOGGLE_FN: &str = "toggle_visibility";
