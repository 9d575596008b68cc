use anchor_lang::prelude::*;
use std::ops::Deref;

use super::{ParameterValue, VaultParameter};
use crate::errors::OrchestratorError;

/// Full parameter set handed to `initialize_vault`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VaultParams {
    pub divisor: u64,
    pub ratio: u64,
    pub burn_fee: u64,
    pub liquidation_penalty: u64,
    pub tcap_oracle: Pubkey,
    pub tcap_token: Pubkey,
    pub collateral: Pubkey,
    pub collateral_oracle: Pubkey,
    pub eth_oracle: Pubkey,
}

impl VaultParams {
    /// Identifier checks in their fixed order. The collateral address is not
    /// checked here.
    pub fn validate(&self) -> Result<()> {
        require_keys_neq!(self.tcap_oracle, Pubkey::default(), OrchestratorError::InvalidOracle);
        require_keys_neq!(self.tcap_token, Pubkey::default(), OrchestratorError::InvalidToken);
        require_keys_neq!(
            self.collateral_oracle,
            Pubkey::default(),
            OrchestratorError::InvalidOracle
        );
        require_keys_neq!(self.eth_oracle, Pubkey::default(), OrchestratorError::InvalidOracle);
        Ok(())
    }
}

/// Governed vault record. The account existing means the vault is registered.
#[account]
#[derive(Default)]
pub struct VaultRecord {
    /// Identity of the managed vault
    pub vault_id: Pubkey,

    /// Parameters written once by `initialize_vault`, then only through the timelock
    pub params: VaultParams,

    /// Is the vault paused
    pub paused: bool,

    /// Is the parameter set initialized
    pub is_initialized: bool,

    /// Fee lamports held by this account, drained only by retrieval
    pub accumulated_fees: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl VaultRecord {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault_id
        8 * 4 + // divisor, ratio, burn_fee, liquidation_penalty
        32 * 5 + // tcap_oracle, tcap_token, collateral, collateral_oracle, eth_oracle
        1 + // paused
        1 + // is_initialized
        8 + // accumulated_fees
        1 + // bump
        32; // _reserved

    pub fn register(&mut self, vault_id: Pubkey, bump: u8) -> Result<()> {
        require_keys_neq!(vault_id, Pubkey::default(), OrchestratorError::InvalidVault);
        self.vault_id = vault_id;
        self.paused = false;
        self.is_initialized = false;
        self.accumulated_fees = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn initialize(&mut self, params: VaultParams) -> Result<()> {
        params.validate()?;
        require!(!self.is_initialized, OrchestratorError::AlreadyInitialized);
        self.params = params;
        self.is_initialized = true;
        Ok(())
    }

    /// Applies a value that already passed the timelock. Identifier values are
    /// checked against their kind here, after the hash check.
    pub fn apply(&mut self, parameter: VaultParameter, value: ParameterValue) -> Result<()> {
        match (parameter, value) {
            (VaultParameter::Divisor, ParameterValue::Amount(v)) => self.params.divisor = v,
            (VaultParameter::Ratio, ParameterValue::Amount(v)) => self.params.ratio = v,
            (VaultParameter::BurnFee, ParameterValue::Amount(v)) => self.params.burn_fee = v,
            (VaultParameter::LiquidationPenalty, ParameterValue::Amount(v)) => {
                self.params.liquidation_penalty = v
            }
            (VaultParameter::Tcap, ParameterValue::Address(key)) => {
                require_keys_neq!(key, Pubkey::default(), OrchestratorError::InvalidToken);
                self.params.tcap_token = key;
            }
            (VaultParameter::TcapOracle, ParameterValue::Address(key)) => {
                require_keys_neq!(key, Pubkey::default(), OrchestratorError::InvalidOracle);
                self.params.tcap_oracle = key;
            }
            (VaultParameter::Collateral, ParameterValue::Address(key)) => {
                require_keys_neq!(key, Pubkey::default(), OrchestratorError::InvalidToken);
                self.params.collateral = key;
            }
            (VaultParameter::CollateralOracle, ParameterValue::Address(key)) => {
                require_keys_neq!(key, Pubkey::default(), OrchestratorError::InvalidOracle);
                self.params.collateral_oracle = key;
            }
            (VaultParameter::EthOracle, ParameterValue::Address(key)) => {
                require_keys_neq!(key, Pubkey::default(), OrchestratorError::InvalidOracle);
                self.params.eth_oracle = key;
            }
            _ => return err!(OrchestratorError::InvalidParameterValue),
        }
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn accrue_fees(&mut self, amount: u64) -> Result<()> {
        require!(!self.paused, OrchestratorError::VaultPaused);
        self.accumulated_fees = self
            .accumulated_fees
            .checked_add(amount)
            .ok_or(OrchestratorError::MathOverflow)?;
        Ok(())
    }

    /// Zeroes the fee balance and returns the amount to move out.
    pub fn take_fees(&mut self) -> u64 {
        std::mem::take(&mut self.accumulated_fees)
    }
}

/// Resolves an optional vault account into the registered record for
/// `vault_id`. A zero id or a missing record is `InvalidVault`.
pub fn require_registered_vault<V>(vault: Option<V>, vault_id: &Pubkey) -> Result<V>
where
    V: Deref<Target = VaultRecord>,
{
    require_keys_neq!(*vault_id, Pubkey::default(), OrchestratorError::InvalidVault);
    match vault {
        Some(record) if record.vault_id == *vault_id => Ok(record),
        _ => err!(OrchestratorError::InvalidVault),
    }
}
