use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::VaultPauseToggled,
    state::{require_registered_vault, Orchestrator, VaultRecord},
};

#[derive(Accounts)]
#[instruction(vault_id: Pubkey)]
pub struct SetVaultPaused<'info> {
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

/// Pause toggles take effect immediately; they are not timelocked.
pub fn set_vault_paused(
    mut ctx: Context<SetVaultPaused>,
    vault_id: Pubkey,
    paused: bool,
) -> Result<()> {
    let accounts = &mut ctx.accounts;
    process_set_vault_paused(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.vault.as_deref_mut(),
        &vault_id,
        paused,
    )?;

    emit!(VaultPauseToggled {
        vault_id,
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn process_set_vault_paused(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    vault: Option<&mut VaultRecord>,
    vault_id: &Pubkey,
    paused: bool,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    let vault = require_registered_vault(vault, vault_id)?;
    vault.set_paused(paused);
    Ok(())
}
