//! CLI context - bundles the resolved length, flags, and clipboard state.

use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts};
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::pass;

/// Password length used when no argument is given.
pub const DEFAULT_LENGTH: usize = 12;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for a single run.
pub struct Context {
    pub length: usize,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        let length = flags.length.unwrap_or(DEFAULT_LENGTH);

        Ok(Self {
            length,
            clipboard: None,
            flags,
        })
    }

    /// Run the CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.open_clipboard();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            prompts::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passclip {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Acquire the system clipboard. Failure is reported, not fatal - the
    /// password still goes to the terminal.
    fn open_clipboard(&mut self) {
        match SystemClipboard::new() {
            Ok(board) => self.clipboard = Some(Box::new(board)),
            Err(e) => prompts::clipboard_error(&e.to_string()),
        }
    }

    /// Generate the password, copy it, and print the report lines.
    fn generate_output(&mut self) {
        let mut password = pass::generate(self.length);

        let copied = match self.clipboard.as_mut() {
            Some(board) => match board.set_text(&password) {
                Ok(()) => true,
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    false
                }
            },
            None => false,
        };

        prompts::generated(self.length, &password);
        if copied {
            prompts::clipboard_copied();
        }

        password.zeroize();
    }
}
