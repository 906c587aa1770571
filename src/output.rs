use owo_colors::OwoColorize;

/// Print a fatal error line to stderr (red unless color is off)
pub fn fatal(message: &str, color: bool) {
    if color {
        eprintln!("{} {}", "error:".red().bold(), message.red());
    } else {
        eprintln!("error: {}", message);
    }
}
