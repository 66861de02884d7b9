//! Finalizes a plain and a private draft against a fixed-price gateway and
//! prints both transactions.
//!
//! ```text
//! cargo run -p weave-client --example offline_draft
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use weave_client::transaction::{AddressResolver, CollaboratorError, DraftFinalizer, FeeOracle};
use weave_client::{Address, Jwk, TransactionDraft, Winston};

/// Quotes 10 winston per byte and anchors everything to the genesis id.
struct FixedGateway;

#[async_trait]
impl AddressResolver for FixedGateway {
    async fn last_transaction_id(&self, _address: &Address) -> Result<String, CollaboratorError> {
        Ok(String::new())
    }
}

#[async_trait]
impl FeeOracle for FixedGateway {
    async fn quote_fee(
        &self,
        byte_length: usize,
        _target: Option<&Address>,
    ) -> Result<Winston, CollaboratorError> {
        Ok(Winston::new(10 * byte_length as u128))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gateway = Arc::new(FixedGateway);
    let finalizer = DraftFinalizer::new(gateway.clone(), gateway);
    let key = Jwk::public(
        "AQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyAhIiMkJSYnKCkqKywtLi8wMTIzNDU2Nzg5Ojs8PT4_QA",
        "AQAB",
    );

    let plain = finalizer
        .finalize(
            TransactionDraft::new()
                .data("hello permaweb")
                .tag("Content-Type", "text/plain"),
            &key,
        )
        .await?;
    println!("{}", plain.to_json_pretty()?);

    let private = finalizer
        .finalize_private(TransactionDraft::new().data("for my eyes only"), &key, "silo://notes.3")
        .await?;
    println!("{}", private.to_json_pretty()?);

    Ok(())
}
