use clap::{Parser, Subcommand};
use pathnav_core::{NavConfig, PathValue};

/// pathnav - slice, search and navigate delimiter-separated paths
#[derive(Parser, Debug)]
#[command(name = "pathnav")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The path to operate on
    pub path: String,

    /// Segment delimiter
    #[arg(short = 'd', long, default_value_t = '/')]
    pub delimiter: char,

    /// Only split on the delimiter (do not rewrite `/` and `\`)
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Operation to apply
    #[command(subcommand)]
    pub command: Command,
}

/// Operations on the parsed path.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the canonical form
    Show,
    /// Print the number of segments
    Count,
    /// Print the segment at a position, or the one following a name
    Get {
        /// Integer position (negative counts from the end) or segment name
        #[arg(allow_hyphen_values = true)]
        key: String,
    },
    /// Print a sub-path
    Slice {
        /// First segment; negative counts from the end
        #[arg(allow_hyphen_values = true)]
        offset: isize,
        /// Number of segments; negative stops before the end
        #[arg(allow_hyphen_values = true)]
        length: Option<isize>,
    },
    /// Print what follows the first match of a regex
    After {
        /// Regular expression
        pattern: String,
    },
    /// Print what precedes the first match of a regex
    Before {
        /// Regular expression
        pattern: String,
    },
    /// Print what lies between two regex matches
    Between {
        /// Regular expression ending the prefix
        start: String,
        /// Regular expression starting the suffix
        end: String,
    },
    /// Print the path that leads from BASE to this path
    RelativeTo {
        /// Path to start from
        base: String,
    },
    /// Navigate by a relative path (`..` goes up)
    Cd {
        /// Relative path to apply
        relative: String,
    },
    /// Name segments using a template such as `//controller/method/id`
    Map {
        /// Template split on the delimiter
        template: String,
    },
    /// Read segments as alternating keys and values
    Pairs {
        /// First segment to read
        #[arg(default_value_t = 0, allow_hyphen_values = true)]
        offset: isize,
    },
    /// Print every segment with its position
    Segments {
        /// First position to print
        #[arg(default_value_t = 0)]
        offset: usize,
    },
}

impl Args {
    /// Normalization settings chosen on the command line
    pub fn to_config(&self) -> NavConfig {
        if self.strict {
            NavConfig::strict(self.delimiter)
        } else {
            NavConfig::with_delimiter(self.delimiter)
        }
    }

    /// The path argument, normalized
    pub fn path_value(&self) -> PathValue {
        PathValue::with_config(self.path.as_str(), &self.to_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slice_with_negative_offset() {
        let args = Args::try_parse_from(["pathnav", "/the/golden/path", "slice", "-2", "1"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Slice {
                offset: -2,
                length: Some(1)
            }
        ));
    }

    #[test]
    fn test_strict_config() {
        let args = Args::try_parse_from(["pathnav", "-d", ".", "--strict", "a/b.c", "count"]).unwrap();
        assert_eq!(args.to_config(), NavConfig::strict('.'));
        assert_eq!(args.path_value().len(), 2);
    }
}
