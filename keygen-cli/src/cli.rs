use clap::{Parser, Subcommand};

/// Top-level CLI parser for `keygen`.
#[derive(Debug, Parser)]
#[command(name = "keygen", version, about = "Generate random keys, secrets and identifiers")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every generator in catalog order.
    List,
    /// Show a generator's metadata.
    Show {
        /// Generator id, e.g. `password`.
        id: String,
    },
    /// Generate one or more values.
    Generate {
        /// Generator id; the primary generator when omitted.
        id: Option<String>,
        /// Output length (characters, hex digits or bytes, depending on the generator).
        #[arg(short, long, allow_negative_numbers = true)]
        length: Option<i64>,
        /// Number of values to print (1 to 100).
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Use a seeded, non-cryptographic source. Output must not be used as a secret.
        #[arg(long)]
        insecure_seed: Option<u64>,
    },
    /// Print a generator's URL path.
    Path {
        /// Generator id.
        id: String,
    },
    /// Print the sitemap XML.
    Sitemap {
        /// Public site URL.
        #[arg(long, default_value = "https://key-generator.com")]
        base_url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_with_options() {
        let cli = Cli::parse_from(["keygen", "generate", "jwt-secret", "--length", "32", "-n", "3"]);
        match cli.command {
            Command::Generate { id, length, count, insecure_seed } => {
                assert_eq!(id.as_deref(), Some("jwt-secret"));
                assert_eq!(length, Some(32));
                assert_eq!(count, 3);
                assert_eq!(insecure_seed, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn generate_id_is_optional() {
        let cli = Cli::parse_from(["keygen", "generate"]);
        assert!(matches!(cli.command, Command::Generate { id: None, count: 1, .. }));
    }

    #[test]
    fn negative_length_reaches_validation() {
        let cli = Cli::parse_from(["keygen", "generate", "password", "-l", "-3"]);
        assert!(matches!(cli.command, Command::Generate { length: Some(-3), .. }));
    }

    #[test]
    fn errors_on_unknown_subcommand() {
        assert!(Cli::try_parse_from(["keygen", "unknown"]).is_err());
        assert!(Cli::try_parse_from(["keygen", "show"]).is_err());
    }
}
