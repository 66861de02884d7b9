//! # CLI Interface
//!
//! Defines the command-line argument structure for `weave-draft` using
//! `clap` derive. Three subcommands: `address`, `create` and `convert`.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Offline preparation of unsigned weave transactions.
///
/// Reads a JWK wallet, finalizes a draft and prints the unsigned
/// transaction JSON to stdout. Nothing is signed and nothing is sent.
#[derive(Parser, Debug)]
#[command(
    name = "weave-draft",
    about = "Prepare unsigned weave transactions offline",
    version,
    propagate_version = true
)]
pub struct WeaveDraftCli {
    /// Log output format. Logs always go to stderr.
    #[arg(
        long,
        global = true,
        env = "WEAVE_LOG_FORMAT",
        value_enum,
        ignore_case = true,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// More log output; repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the address of a wallet.
    Address(WalletArgs),
    /// Finalize a draft and print the unsigned transaction.
    Create(CreateArgs),
    /// Convert between winston and AR.
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct WalletArgs {
    /// Path to the JWK wallet file.
    #[arg(long, short = 'w', env = "WEAVE_WALLET")]
    pub wallet: PathBuf,
}

/// Arguments for the `create` subcommand.
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub wallet: WalletArgs,

    /// Text payload.
    #[arg(long)]
    pub data: Option<String>,

    /// Recipient address for a value transfer.
    #[arg(long)]
    pub target: Option<String>,

    /// Winston to transfer to `--target`.
    #[arg(long)]
    pub quantity: Option<String>,

    /// Replay anchor. Required offline; there is no gateway to ask.
    #[arg(long)]
    pub last_tx: Option<String>,

    /// Fee in winston. Required offline; there is no gateway to ask.
    #[arg(long)]
    pub reward: Option<String>,

    /// Tag as NAME=VALUE. Repeatable.
    #[arg(long = "tag", value_name = "NAME=VALUE")]
    pub tags: Vec<String>,

    /// Encrypt the payload into this silo (`name.level`).
    #[arg(long)]
    pub silo: Option<String>,
}

/// Arguments for the `convert` subcommand. Exactly one unit is given.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ConvertArgs {
    /// Winston amount to express in AR.
    #[arg(long)]
    pub winston: Option<String>,

    /// AR amount to express in winston.
    #[arg(long)]
    pub ar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        WeaveDraftCli::command().debug_assert();
    }

    #[test]
    fn create_collects_repeated_tags() {
        let cli = WeaveDraftCli::try_parse_from([
            "weave-draft",
            "create",
            "--wallet",
            "key.json",
            "--data",
            "hello",
            "--tag",
            "Content-Type=text/plain",
            "--tag",
            "App-Name=weave",
        ])
        .unwrap();

        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.tags.len(), 2);
                assert_eq!(args.data.as_deref(), Some("hello"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn convert_requires_exactly_one_unit() {
        assert!(WeaveDraftCli::try_parse_from(["weave-draft", "convert"]).is_err());
        assert!(WeaveDraftCli::try_parse_from([
            "weave-draft",
            "convert",
            "--winston",
            "1",
            "--ar",
            "1"
        ])
        .is_err());
        assert!(WeaveDraftCli::try_parse_from(["weave-draft", "convert", "--ar", "1.5"]).is_ok());
    }

    #[test]
    fn global_logging_flags() {
        let cli = WeaveDraftCli::try_parse_from([
            "weave-draft",
            "convert",
            "--winston",
            "1",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
