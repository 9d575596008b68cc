use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{ParameterValue, VaultParameter, VaultParams};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod vault_orchestrator {
    use super::*;

    /// Create the orchestrator; the signer becomes its owner
    pub fn initialize_orchestrator(ctx: Context<InitializeOrchestrator>) -> Result<()> {
        instructions::initialize_orchestrator(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    /// Register a vault so it can be governed
    pub fn register_vault(ctx: Context<RegisterVault>, vault_id: Pubkey) -> Result<()> {
        instructions::register_vault(ctx, vault_id)
    }

    /// Write the vault's full parameter set (once)
    pub fn initialize_vault(
        ctx: Context<InitializeVault>,
        vault_id: Pubkey,
        params: VaultParams,
    ) -> Result<()> {
        instructions::initialize_vault(ctx, vault_id, params)
    }

    /// Commit to a future value of a vault function and start its delay
    pub fn unlock_vault_function(
        ctx: Context<UnlockVaultFunction>,
        vault_id: Pubkey,
        parameter: VaultParameter,
        commit_hash: [u8; 32],
    ) -> Result<()> {
        instructions::unlock_vault_function(ctx, vault_id, parameter, commit_hash)
    }

    /// Drop any pending commitment for a vault function
    pub fn lock_vault_function(
        ctx: Context<LockVaultFunction>,
        vault_id: Pubkey,
        parameter: VaultParameter,
    ) -> Result<()> {
        instructions::lock_vault_function(ctx, vault_id, parameter)
    }

    pub fn set_divisor(ctx: Context<ExecuteVaultParameter>, vault_id: Pubkey, divisor: u64) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::Divisor,
            ParameterValue::Amount(divisor),
        )
    }

    pub fn set_ratio(ctx: Context<ExecuteVaultParameter>, vault_id: Pubkey, ratio: u64) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::Ratio,
            ParameterValue::Amount(ratio),
        )
    }

    pub fn set_burn_fee(ctx: Context<ExecuteVaultParameter>, vault_id: Pubkey, burn_fee: u64) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::BurnFee,
            ParameterValue::Amount(burn_fee),
        )
    }

    pub fn set_liquidation_penalty(
        ctx: Context<ExecuteVaultParameter>,
        vault_id: Pubkey,
        liquidation_penalty: u64,
    ) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::LiquidationPenalty,
            ParameterValue::Amount(liquidation_penalty),
        )
    }

    pub fn set_tcap(ctx: Context<ExecuteVaultParameter>, vault_id: Pubkey, tcap_token: Pubkey) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::Tcap,
            ParameterValue::Address(tcap_token),
        )
    }

    pub fn set_tcap_oracle(
        ctx: Context<ExecuteVaultParameter>,
        vault_id: Pubkey,
        tcap_oracle: Pubkey,
    ) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::TcapOracle,
            ParameterValue::Address(tcap_oracle),
        )
    }

    pub fn set_collateral(
        ctx: Context<ExecuteVaultParameter>,
        vault_id: Pubkey,
        collateral: Pubkey,
    ) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::Collateral,
            ParameterValue::Address(collateral),
        )
    }

    pub fn set_collateral_oracle(
        ctx: Context<ExecuteVaultParameter>,
        vault_id: Pubkey,
        collateral_oracle: Pubkey,
    ) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::CollateralOracle,
            ParameterValue::Address(collateral_oracle),
        )
    }

    pub fn set_eth_oracle(ctx: Context<ExecuteVaultParameter>, vault_id: Pubkey, eth_oracle: Pubkey) -> Result<()> {
        instructions::set_vault_parameter(
            ctx,
            vault_id,
            VaultParameter::EthOracle,
            ParameterValue::Address(eth_oracle),
        )
    }

    pub fn pause_vault(ctx: Context<SetVaultPaused>, vault_id: Pubkey) -> Result<()> {
        instructions::set_vault_paused(ctx, vault_id, true)
    }

    pub fn unpause_vault(ctx: Context<SetVaultPaused>, vault_id: Pubkey) -> Result<()> {
        instructions::set_vault_paused(ctx, vault_id, false)
    }

    /// Pay fees into a vault (permissionless)
    pub fn accrue_vault_fees(ctx: Context<AccrueVaultFees>, vault_id: Pubkey, amount: u64) -> Result<()> {
        instructions::accrue_vault_fees(ctx, vault_id, amount)
    }

    /// Sweep a vault's accumulated fees into the orchestrator
    pub fn retrieve_vault_fees(ctx: Context<RetrieveVaultFees>, vault_id: Pubkey) -> Result<()> {
        instructions::retrieve_vault_fees(ctx, vault_id)
    }

    /// Send the orchestrator's fee balance to the owner
    pub fn retrieve_fees(ctx: Context<RetrieveFees>) -> Result<()> {
        instructions::retrieve_fees(ctx)
    }

    pub fn register_token(ctx: Context<RegisterToken>) -> Result<()> {
        instructions::register_token(ctx)
    }

    pub fn enable_cap(ctx: Context<UpdateCap>, token_id: Pubkey, enabled: bool) -> Result<()> {
        instructions::enable_cap(ctx, token_id, enabled)
    }

    pub fn set_cap(ctx: Context<UpdateCap>, token_id: Pubkey, cap: u64) -> Result<()> {
        instructions::set_cap(ctx, token_id, cap)
    }

    /// Authorize a vault to mint and burn against a capped token
    pub fn add_token_vault(ctx: Context<AddTokenVault>, token_id: Pubkey, vault_id: Pubkey) -> Result<()> {
        instructions::add_token_vault(ctx, token_id, vault_id)
    }
}
