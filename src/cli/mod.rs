mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use context::DEFAULT_LENGTH;
pub use flags::CliFlags;
pub use parse::ParseError;
pub use parse::parse;

/// Run the CLI. Exits the process with code 2 on argument errors.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(2);
        }
    };
    let _ = ctx.run();
}
