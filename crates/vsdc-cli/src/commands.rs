use anyhow::Context;
use colored::Colorize;
use rust_decimal::Decimal;
use vsdc_ledger::LevySchedule;
use vsdc_server::{ServerConfig, VsdcServer};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Quote(args) => cmd_quote(args, &cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    println!("{} VSDC issuing on {}", "✓".green().bold(), config.bind_addr.to_string().bold());
    println!("  Verification: {}", config.verification_base_url.cyan());

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(VsdcServer::new(config).serve())?;
    Ok(())
}

fn cmd_quote(args: QuoteArgs, format: &OutputFormat) -> anyhow::Result<()> {
    if args.amount <= Decimal::ZERO {
        anyhow::bail!("amount must be greater than 0");
    }
    let Some(levies) = LevySchedule::default().apply(args.amount) else {
        anyhow::bail!("amount {} is too large to carry its levies", args.amount);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&levies)?),
        OutputFormat::Text => {
            println!("Base:     {}", levies.base_amount);
            println!("VAT:      {}", levies.vat_amount);
            println!("NHIL:     {}", levies.nhil_amount);
            println!("GETFund:  {}", levies.getfund_amount);
            println!("Total:    {}", levies.total_with_tax.to_string().bold());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn quote_prints_for_ordinary_amounts() {
        let args = QuoteArgs {
            amount: Decimal::from_str("100").unwrap(),
        };
        cmd_quote(args, &OutputFormat::Json).unwrap();
    }

    #[test]
    fn quote_refuses_amounts_that_overflow() {
        let args = QuoteArgs {
            amount: Decimal::MAX,
        };
        let err = cmd_quote(args, &OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn quote_refuses_zero() {
        let args = QuoteArgs {
            amount: Decimal::ZERO,
        };
        assert!(cmd_quote(args, &OutputFormat::Text).is_err());
    }
}
