// NOTE: Command Organization
//
// Namespaced subcommands group the data a user owns (cart, wishlist,
// collections, state) while one-shot actions (rate, schedule, remix) stay
// flat. `dispatch` accepts the same attribute sets the web view sends, and
// `simulate` replays the onboarding to feed flow on in-memory storage.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fitpic")]
#[command(about = "Personal outfit recommendations from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $FITPIC_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_quantity_parses() {
        let cli = Cli::try_parse_from(["fitpic", "cart", "quantity", "abc", "-1"]).unwrap();
        match cli.command {
            Commands::Cart {
                command: CartCommand::Quantity { item_id, quantity },
            } => {
                assert_eq!(item_id, "abc");
                assert_eq!(quantity, -1);
            }
            _ => panic!("expected cart quantity"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fitpic", "outfits", "--format", "json", "--page", "2"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.data_dir.is_none());
    }
}
