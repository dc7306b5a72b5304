use boq_builder::application::dto::OutputFormat;
use boq_builder::boq_engine::domain::ItemId;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Build and check Bills of Quantities from a catalog of items and their dependencies
#[derive(Parser, Debug)]
#[command(name = "boq")]
#[command(version)]
#[command(about = "Build and check Bills of Quantities from a catalog of items and their dependencies", long_about = None)]
pub struct Args {
    /// Catalog file (JSON, YAML or TOML) [default: catalog.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// BOQ file to read and update [default: boq.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub boq: Option<PathBuf>,

    /// Path to config file (default: auto-discover boq.config.yml in the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages (warnings are still shown)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a catalog item (and its dependencies) to the BOQ
    Add {
        #[arg(value_parser = parse_item_id)]
        item_id: ItemId,
        /// Number of units to add
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: u64,
    },

    /// Replace the quantity of a main item and rebuild its dependencies (0 removes it)
    Set {
        #[arg(value_parser = parse_item_id)]
        item_id: ItemId,
        quantity: u64,
    },

    /// Remove a main item and every line derived from it
    Remove {
        #[arg(value_parser = parse_item_id)]
        item_id: ItemId,
    },

    /// Render the BOQ with dependency lines nested under their parents
    Show {
        /// Output format: markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check the BOQ against a fresh expansion of the catalog
    Validate {
        /// Treat warnings (quantity drift, cycles, dangling references) as failures
        #[arg(long)]
        strict: bool,
    },

    /// Preview the expansion of a catalog item without touching the BOQ
    Resolve {
        #[arg(value_parser = parse_item_id)]
        item_id: ItemId,
        #[arg(short = 'n', long, default_value_t = 1)]
        quantity: u64,
        /// Output format: markdown or json
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

fn parse_item_id(value: &str) -> Result<ItemId, String> {
    ItemId::new(value).map_err(|e| e.to_string())
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("boq").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_add_with_default_quantity() {
        let args = parse(&["add", "camera"]).unwrap();
        match args.command {
            Command::Add { item_id, quantity } => {
                assert_eq!(item_id.as_str(), "camera");
                assert_eq!(quantity, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = parse(&["set", "camera", "4", "--catalog", "c.yml", "-vv"]).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("c.yml")));
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Set { quantity: 4, .. }));
    }

    #[test]
    fn test_parse_show_format() {
        let args = parse(&["show", "--format", "json"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Show {
                format: Some(OutputFormat::Json),
                output: None
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        assert!(parse(&["show", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_item_id() {
        assert!(parse(&["remove", "  "]).is_err());
    }

    #[test]
    fn test_parse_rejects_negative_quantity() {
        assert!(parse(&["set", "camera", "-1"]).is_err());
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(parse(&[]).is_err());
    }
}
