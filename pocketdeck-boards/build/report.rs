//! Error box formatting shared by the build script and its tests

/// Width of the text column inside the error box
pub const LINE_WIDTH: usize = 62;

/// One bullet line of the error box
///
/// Long messages are clipped on a character boundary; toml errors echo
/// source lines, which may hold any UTF-8.
pub fn bullet(message: &str) -> String {
    let clipped: String = message.chars().take(LINE_WIDTH).collect();
    format!("║  • {:<width$} ║", clipped, width = LINE_WIDTH)
}
