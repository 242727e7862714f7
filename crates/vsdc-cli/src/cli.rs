use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(
    name = "vsdc",
    about = "Virtual Sales Data Controller: idempotent tax-invoice issuance",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the issuance server
    Serve(ServeArgs),
    /// Show the levies owed on an amount without issuing anything
    Quote(QuoteArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen address; overrides the configuration file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Args)]
pub struct QuoteArgs {
    /// Base amount before levies
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["vsdc", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.config.is_none());
            assert!(args.bind.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "vsdc",
            "serve",
            "--config",
            "vsdc.toml",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("vsdc.toml")));
            assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_rejects_bad_address() {
        assert!(Cli::try_parse_from(["vsdc", "serve", "--bind", "nowhere"]).is_err());
    }

    #[test]
    fn parse_quote() {
        let cli = Cli::try_parse_from(["vsdc", "quote", "19.99", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        if let Command::Quote(args) = cli.command {
            assert_eq!(args.amount, Decimal::from_str("19.99").unwrap());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::try_parse_from(["vsdc", "-v", "quote", "1"]).unwrap();
        assert!(cli.verbose);
    }
}
