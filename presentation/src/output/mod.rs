//! Console output

pub mod console;
pub mod sink;

/// Turn ANSI colors on or off for everything this crate prints
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
