use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::{VaultFunctionLocked, VaultFunctionUnlocked},
    state::{require_registered_vault, CommitEntry, Orchestrator, VaultParameter, VaultRecord},
};

#[derive(Accounts)]
#[instruction(vault_id: Pubkey, parameter: VaultParameter)]
pub struct UnlockVaultFunction<'info> {
    #[account(
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Absent when the vault is not registered
    #[account(
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Option<Account<'info, VaultRecord>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = CommitEntry::LEN,
        seeds = [TIMELOCK_SEED, vault_id.as_ref(), &[parameter.id()]],
        bump
    )]
    pub commit: Account<'info, CommitEntry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn unlock_vault_function(
    mut ctx: Context<UnlockVaultFunction>,
    vault_id: Pubkey,
    parameter: VaultParameter,
    commit_hash: [u8; 32],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut ctx.accounts;
    let unlock_at = process_unlock(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.vault.as_deref(),
        &mut accounts.commit,
        &vault_id,
        parameter,
        commit_hash,
        now,
        ctx.bumps.commit,
    )?;

    msg!("Unlocked {:?} for vault {} at {}", parameter, vault_id, unlock_at);
    emit!(VaultFunctionUnlocked {
        vault_id,
        parameter,
        commit_hash,
        unlock_at,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(vault_id: Pubkey, parameter: VaultParameter)]
pub struct LockVaultFunction<'info> {
    #[account(
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Absent when the vault is not registered
    #[account(
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Option<Account<'info, VaultRecord>>,

    /// Absent when the function was never unlocked
    #[account(
        mut,
        seeds = [TIMELOCK_SEED, vault_id.as_ref(), &[parameter.id()]],
        bump
    )]
    pub commit: Option<Account<'info, CommitEntry>>,

    pub authority: Signer<'info>,
}

pub fn lock_vault_function(
    mut ctx: Context<LockVaultFunction>,
    vault_id: Pubkey,
    parameter: VaultParameter,
) -> Result<()> {
    let accounts = &mut ctx.accounts;
    process_lock(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.vault.as_deref(),
        accounts.commit.as_deref_mut(),
        &vault_id,
    )?;

    msg!("Locked {:?} for vault {}", parameter, vault_id);
    emit!(VaultFunctionLocked {
        vault_id,
        parameter,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Records `commit_hash` as the only value `parameter` may later be set to,
/// executable once `parameter.required_delay()` has passed. Returns the
/// unlock timestamp.
#[allow(clippy::too_many_arguments)]
pub fn process_unlock(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    vault: Option<&VaultRecord>,
    commit: &mut CommitEntry,
    vault_id: &Pubkey,
    parameter: VaultParameter,
    commit_hash: [u8; 32],
    now: i64,
    bump: u8,
) -> Result<i64> {
    orchestrator.require_owner(caller)?;
    require_registered_vault(vault, vault_id)?;
    commit.unlock(*vault_id, parameter, commit_hash, now, bump)
}

pub fn process_lock(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    vault: Option<&VaultRecord>,
    commit: Option<&mut CommitEntry>,
    vault_id: &Pubkey,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    require_registered_vault(vault, vault_id)?;
    if let Some(commit) = commit {
        commit.lock();
    }
    Ok(())
}
