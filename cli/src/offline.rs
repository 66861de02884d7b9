//! Collaborators for running without a gateway.
//!
//! Address derivation is local, so it works. Anchor lookups and fee quotes
//! need the network; here they answer with whatever the user passed on the
//! command line, or fail with a message naming the flag to pass.

use async_trait::async_trait;
use thiserror::Error;

use weave_client::transaction::{AddressResolver, CollaboratorError, FeeOracle};
use weave_client::{Address, Winston};

#[derive(Debug, Error)]
pub enum OfflineError {
    #[error("cannot look up the last transaction of {0} offline; pass --last-tx")]
    AnchorUnavailable(Address),

    #[error("cannot quote a fee for {0} bytes offline; pass --reward")]
    FeeUnavailable(usize),
}

/// Gateway stand-in backed by command-line values.
#[derive(Debug, Clone, Default)]
pub struct OfflineGateway {
    last_tx: Option<String>,
    reward: Option<Winston>,
}

impl OfflineGateway {
    pub fn new(last_tx: Option<String>, reward: Option<Winston>) -> Self {
        Self { last_tx, reward }
    }
}

#[async_trait]
impl AddressResolver for OfflineGateway {
    async fn last_transaction_id(&self, address: &Address) -> Result<String, CollaboratorError> {
        self.last_tx
            .clone()
            .ok_or_else(|| CollaboratorError::new(OfflineError::AnchorUnavailable(address.clone())))
    }
}

#[async_trait]
impl FeeOracle for OfflineGateway {
    async fn quote_fee(
        &self,
        byte_length: usize,
        _target: Option<&Address>,
    ) -> Result<Winston, CollaboratorError> {
        self.reward
            .ok_or_else(|| CollaboratorError::new(OfflineError::FeeUnavailable(byte_length)))
    }
}
