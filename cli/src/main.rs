// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # weave-draft
//!
//! Entry point for the `weave-draft` binary. Parses CLI arguments,
//! initializes logging, and runs one of three subcommands:
//!
//! - `address` — print the address of a JWK wallet
//! - `create`  — finalize a draft and print the unsigned transaction JSON
//! - `convert` — convert between winston and AR
//!
//! Results go to stdout, logs to stderr.

mod cli;
mod logging;
mod offline;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::sync::Arc;

use weave_client::ar::{ar_to_winston, winston_to_ar};
use weave_client::transaction::{DraftFinalizer, TransactionDraft};
use weave_client::wallet::jwk_to_address;
use weave_client::{Jwk, Winston};

use cli::{Commands, WeaveDraftCli};
use offline::OfflineGateway;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = WeaveDraftCli::parse();

    logging::init_logging(cli.verbose, cli.log_format);

    match cli.command {
        Commands::Address(args) => print_address(args),
        Commands::Create(args) => create_transaction(args).await,
        Commands::Convert(args) => convert(args),
    }
}

fn load_wallet(args: &cli::WalletArgs) -> Result<Jwk> {
    let key = Jwk::from_file(&args.wallet)
        .with_context(|| format!("failed to read wallet {}", args.wallet.display()))?;
    tracing::debug!(
        path = %args.wallet.display(),
        private = key.has_private_parts(),
        "wallet loaded"
    );
    Ok(key)
}

fn print_address(args: cli::WalletArgs) -> Result<()> {
    let key = load_wallet(&args)?;
    let address = jwk_to_address(&key).context("failed to derive wallet address")?;
    println!("{address}");
    Ok(())
}

async fn create_transaction(args: cli::CreateArgs) -> Result<()> {
    let key = load_wallet(&args.wallet)?;
    let draft = build_draft(&args)?;

    let reward = draft.reward;
    let gateway = Arc::new(OfflineGateway::new(draft.last_tx.clone(), reward));
    let finalizer = DraftFinalizer::new(gateway.clone(), gateway);

    let tx = match args.silo.as_deref() {
        Some(locator) => finalizer
            .finalize_private(draft, &key, locator)
            .await
            .context("failed to finalize private transaction")?,
        None => finalizer
            .finalize(draft, &key)
            .await
            .context("failed to finalize transaction")?,
    };

    println!(
        "{}",
        tx.to_json_pretty()
            .context("failed to serialize transaction")?
    );
    Ok(())
}

fn build_draft(args: &cli::CreateArgs) -> Result<TransactionDraft> {
    let mut draft = TransactionDraft::new();
    draft.data = args.data.clone();
    draft.target = args.target.as_deref().map(Into::into);
    draft.quantity = args
        .quantity
        .as_deref()
        .map(str::parse::<Winston>)
        .transpose()
        .context("invalid --quantity")?;
    draft.last_tx = args.last_tx.clone();
    draft.reward = args
        .reward
        .as_deref()
        .map(str::parse::<Winston>)
        .transpose()
        .context("invalid --reward")?;

    for raw in &args.tags {
        let Some((name, value)) = raw.split_once('=') else {
            bail!("invalid --tag {raw:?}; expected NAME=VALUE");
        };
        draft = draft.tag(name, value);
    }

    Ok(draft)
}

fn convert(args: cli::ConvertArgs) -> Result<()> {
    match (args.winston, args.ar) {
        (Some(winston), None) => {
            let winston: Winston = winston.parse().context("invalid --winston")?;
            println!("{}", winston_to_ar(winston));
        }
        (None, Some(ar)) => {
            let winston = ar_to_winston(&ar).context("invalid --ar")?;
            println!("{winston}");
        }
        _ => bail!("pass exactly one of --winston or --ar"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn create_args(extra: &[&str]) -> cli::CreateArgs {
        let mut argv = vec!["weave-draft", "create", "--wallet", "key.json"];
        argv.extend_from_slice(extra);
        match WeaveDraftCli::try_parse_from(argv).unwrap().command {
            Commands::Create(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn draft_from_flags() {
        let args = create_args(&[
            "--target",
            "addr1",
            "--quantity",
            "100",
            "--reward",
            "7",
            "--tag",
            "Content-Type=text/plain",
        ]);
        let draft = build_draft(&args).unwrap();

        assert_eq!(draft.quantity, Some(Winston::new(100)));
        assert_eq!(draft.reward, Some(Winston::new(7)));
        assert_eq!(draft.tags.len(), 1);
        assert_eq!(draft.tags[0].value, "text/plain");
        assert!(draft.validate_plain().is_ok());
    }

    #[test]
    fn tag_value_may_contain_equals() {
        let args = create_args(&["--tag", "Query=a=b"]);
        let draft = build_draft(&args).unwrap();
        assert_eq!(draft.tags[0].name, "Query");
        assert_eq!(draft.tags[0].value, "a=b");
    }

    #[test]
    fn malformed_flags_are_rejected() {
        assert!(build_draft(&create_args(&["--tag", "no-separator"])).is_err());
        assert!(build_draft(&create_args(&["--quantity", "1.5"])).is_err());
        assert!(build_draft(&create_args(&["--reward", "ten"])).is_err());
    }

    #[tokio::test]
    async fn create_with_supplied_anchor_and_reward_runs_offline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(
            &path,
            r#"{"kty":"RSA","e":"AQAB","n":"AQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyAhIiMkJSYnKCkqKywtLi8wMTIzNDU2Nzg5Ojs8PT4_QA"}"#,
        )
        .unwrap();
        let wallet = path.to_str().unwrap();

        let ok = WeaveDraftCli::try_parse_from([
            "weave-draft", "create", "--wallet", wallet, "--data", "hello", "--last-tx", "anchor",
            "--reward", "10",
        ])
        .unwrap();
        let Commands::Create(args) = ok.command else {
            panic!("expected create");
        };
        assert!(create_transaction(args).await.is_ok());

        let missing = WeaveDraftCli::try_parse_from([
            "weave-draft", "create", "--wallet", wallet, "--data", "hello",
        ])
        .unwrap();
        let Commands::Create(args) = missing.command else {
            panic!("expected create");
        };
        let err = create_transaction(args).await.unwrap_err();
        assert!(format!("{err:#}").contains("offline"));
    }

    #[tokio::test]
    async fn private_create_errors_never_echo_the_silo_locator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(
            &path,
            r#"{"kty":"RSA","e":"AQAB","n":"AQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyAhIiMkJSYnKCkqKywtLi8wMTIzNDU2Nzg5Ojs8PT4_QA"}"#,
        )
        .unwrap();
        let wallet = path.to_str().unwrap();

        for locator in ["hidden-vault.2", "hidden vault.2"] {
            let cli = WeaveDraftCli::try_parse_from([
                "weave-draft", "create", "--wallet", wallet, "--data", "hello", "--last-tx",
                "anchor", "--reward", "10", "--silo", locator,
            ])
            .unwrap();
            let Commands::Create(args) = cli.command else {
                panic!("expected create");
            };
            let result = create_transaction(args).await;
            if locator.contains(' ') {
                let err = result.unwrap_err();
                assert!(!format!("{err:#}").contains("hidden"));
            } else {
                assert!(result.is_ok());
            }
        }
    }
}
