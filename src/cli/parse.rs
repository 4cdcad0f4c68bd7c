use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidLength(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidLength(s) => write!(f, "Invalid length: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            arg if arg.starts_with('-') && arg.len() > 1 => {
                return Err(ParseError::UnknownArg(arg.to_string()));
            }
            arg => {
                // Only the first positional counts; the rest are ignored.
                if flags.length.is_none() {
                    flags.length = Some(
                        arg.parse()
                            .map_err(|_| ParseError::InvalidLength(arg.to_string()))?,
                    );
                }
            }
        }
        i += 1;
    }

    Ok(flags)
}
