//! Centralized messages for CLI output.

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print the password report line.
pub fn generated(length: usize, password: &str) {
    println!("Generated password ({length}): {password}");
}

/// Print the clipboard confirmation line.
pub fn clipboard_copied() {
    println!("Copied to clipboard");
}

/// Print a clipboard error to stderr.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

pub fn print_help() {
    println!("passclip - generate a password and copy it to the clipboard");
    println!();
    println!("USAGE:");
    println!("  passclip [LENGTH]");
    println!();
    println!("ARGS:");
    println!("  LENGTH    Characters in the password (default: {})", super::DEFAULT_LENGTH);
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Display this help message");
    println!("  -v, --version    Display version");
}
