use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::*,
    errors::OrchestratorError,
    events::{FeesRetrieved, VaultFeesAccrued, VaultFeesRetrieved},
    state::{require_registered_vault, Orchestrator, VaultRecord},
};

#[derive(Accounts)]
#[instruction(vault_id: Pubkey)]
pub struct AccrueVaultFees<'info> {
    /// Absent when the vault is not registered
    #[account(
        mut,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Option<Account<'info, VaultRecord>>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn accrue_vault_fees(mut ctx: Context<AccrueVaultFees>, vault_id: Pubkey, amount: u64) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let accumulated_fees =
        process_accrue_vault_fees(accounts.vault.as_deref_mut(), &vault_id, amount)?;

    let vault = accounts
        .vault
        .as_ref()
        .ok_or(OrchestratorError::InvalidVault)?;
    system_program::transfer(
        CpiContext::new(
            accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: accounts.payer.to_account_info(),
                to: vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(VaultFeesAccrued {
        vault_id,
        payer: accounts.payer.key(),
        amount,
        accumulated_fees,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(vault_id: Pubkey)]
pub struct RetrieveVaultFees<'info> {
    #[account(
        mut,
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

pub fn retrieve_vault_fees(mut ctx: Context<RetrieveVaultFees>, vault_id: Pubkey) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let amount = process_retrieve_vault_fees(
        &mut accounts.orchestrator,
        &accounts.authority.key(),
        accounts.vault.as_deref_mut(),
        &vault_id,
    )?;

    // balances are already settled; lamports move last
    if amount > 0 {
        let vault = accounts
            .vault
            .as_ref()
            .ok_or(OrchestratorError::InvalidVault)?;
        move_lamports(
            &vault.to_account_info(),
            &accounts.orchestrator.to_account_info(),
            amount,
        )?;
    }

    msg!("Retrieved {} lamports from vault {}", amount, vault_id);
    emit!(VaultFeesRetrieved {
        vault_id,
        recipient: accounts.orchestrator.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RetrieveFees<'info> {
    #[account(
        mut,
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

pub fn retrieve_fees(mut ctx: Context<RetrieveFees>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let amount = process_retrieve_fees(&mut accounts.orchestrator, &accounts.authority.key())?;

    if amount > 0 {
        move_lamports(
            &accounts.orchestrator.to_account_info(),
            &accounts.authority.to_account_info(),
            amount,
        )?;
    }

    msg!("Sent {} lamports to owner {}", amount, accounts.authority.key());
    emit!(FeesRetrieved {
        owner: accounts.authority.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Anyone may pay fees into a registered, unpaused vault. Returns the new
/// accumulated balance.
pub fn process_accrue_vault_fees(
    vault: Option<&mut VaultRecord>,
    vault_id: &Pubkey,
    amount: u64,
) -> Result<u64> {
    let vault = require_registered_vault(vault, vault_id)?;
    vault.accrue_fees(amount)?;
    Ok(vault.accumulated_fees)
}

/// Settles the vault's fee balance into the orchestrator's and returns the
/// amount of lamports to move. Zero is a valid result.
pub fn process_retrieve_vault_fees(
    orchestrator: &mut Orchestrator,
    caller: &Pubkey,
    vault: Option<&mut VaultRecord>,
    vault_id: &Pubkey,
) -> Result<u64> {
    orchestrator.require_owner(caller)?;
    let vault = require_registered_vault(vault, vault_id)?;
    orchestrator.credit_fees(vault.accumulated_fees)?;
    Ok(vault.take_fees())
}

pub fn process_retrieve_fees(orchestrator: &mut Orchestrator, caller: &Pubkey) -> Result<u64> {
    orchestrator.require_owner(caller)?;
    Ok(orchestrator.take_fees())
}

/// Both accounts must be writable; `from` must be owned by this program.
fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(OrchestratorError::MathOverflow)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(OrchestratorError::MathOverflow)?;
    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}
