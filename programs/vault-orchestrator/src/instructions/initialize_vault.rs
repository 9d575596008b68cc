use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::VaultInitialized,
    state::{require_registered_vault, Orchestrator, VaultParams, VaultRecord},
};

#[derive(Accounts)]
#[instruction(vault_id: Pubkey)]
pub struct InitializeVault<'info> {
    #[account(
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Absent when the vault is not registered
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Option<Account<'info, VaultRecord>>,

    pub authority: Signer<'info>,
}

pub fn initialize_vault(
    mut ctx: Context<InitializeVault>,
    vault_id: Pubkey,
    params: VaultParams,
) -> Result<()> {
    let accounts = &mut ctx.accounts;
    process_initialize_vault(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.vault.as_deref_mut(),
        &vault_id,
        params,
    )?;

    emit!(VaultInitialized {
        vault_id,
        divisor: params.divisor,
        ratio: params.ratio,
        burn_fee: params.burn_fee,
        liquidation_penalty: params.liquidation_penalty,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Owner, then vault identity, then the parameter identifiers, then the
/// one-time initialization guard.
pub fn process_initialize_vault(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    vault: Option<&mut VaultRecord>,
    vault_id: &Pubkey,
    params: VaultParams,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    let vault = require_registered_vault(vault, vault_id)?;
    vault.initialize(params)
}
