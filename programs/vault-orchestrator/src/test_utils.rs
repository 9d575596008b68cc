use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::state::{CappedToken, Orchestrator, VaultParams, VaultRecord};

/// Anchor error code carried by a failed result.
pub fn error_code<T>(result: Result<T>) -> u32 {
    match result {
        Err(Error::AnchorError(err)) => err.error_code_number,
        Err(other) => panic!("expected an anchor error, got {other}"),
        Ok(_) => panic!("expected an error"),
    }
}

pub fn sample_params() -> VaultParams {
    VaultParams {
        divisor: 10_000_000_000,
        ratio: 150,
        burn_fee: 1,
        liquidation_penalty: 10,
        tcap_oracle: Pubkey::new_unique(),
        tcap_token: Pubkey::new_unique(),
        collateral: Pubkey::new_unique(),
        collateral_oracle: Pubkey::new_unique(),
        eth_oracle: Pubkey::new_unique(),
    }
}

pub fn orchestrator() -> (Orchestrator, Pubkey) {
    let owner = Pubkey::new_unique();
    let mut orchestrator = Orchestrator::default();
    orchestrator.initialize(owner, 255);
    (orchestrator, owner)
}

pub fn registered_vault() -> VaultRecord {
    let mut vault = VaultRecord::default();
    vault.register(Pubkey::new_unique(), 254).unwrap();
    vault
}

pub fn registered_token() -> CappedToken {
    let mut token = CappedToken::default();
    token.register(Pubkey::new_unique(), 252).unwrap();
    token
}
