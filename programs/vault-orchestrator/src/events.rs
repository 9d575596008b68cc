use anchor_lang::prelude::*;

use crate::state::{ParameterValue, VaultParameter};

#[event]
pub struct OrchestratorInitialized {
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultRegistered {
    pub vault_id: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VaultInitialized {
    pub vault_id: Pubkey,
    pub divisor: u64,
    pub ratio: u64,
    pub burn_fee: u64,
    pub liquidation_penalty: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultFunctionUnlocked {
    pub vault_id: Pubkey,
    pub parameter: VaultParameter,
    pub commit_hash: [u8; 32],
    pub unlock_at: i64,
    pub timestamp: i64,
}

#[event]
pub struct VaultFunctionLocked {
    pub vault_id: Pubkey,
    pub parameter: VaultParameter,
    pub timestamp: i64,
}

#[event]
pub struct VaultParameterUpdated {
    pub vault_id: Pubkey,
    pub parameter: VaultParameter,
    pub value: ParameterValue,
    pub timestamp: i64,
}

#[event]
pub struct VaultPauseToggled {
    pub vault_id: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct VaultFeesAccrued {
    pub vault_id: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub accumulated_fees: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultFeesRetrieved {
    pub vault_id: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeesRetrieved {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokenRegistered {
    pub token_id: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CapEnabled {
    pub token_id: Pubkey,
    pub enabled: bool,
    pub timestamp: i64,
}

#[event]
pub struct CapSet {
    pub token_id: Pubkey,
    pub cap: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokenVaultAdded {
    pub token_id: Pubkey,
    pub vault_id: Pubkey,
    pub timestamp: i64,
}
