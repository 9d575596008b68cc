use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::VaultRegistered,
    state::{Orchestrator, VaultRecord},
};

#[derive(Accounts)]
#[instruction(vault_id: Pubkey)]
pub struct RegisterVault<'info> {
    #[account(
        mut,
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    #[account(
        init,
        payer = authority,
        space = VaultRecord::LEN,
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Account<'info, VaultRecord>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn register_vault(mut ctx: Context<RegisterVault>, vault_id: Pubkey) -> Result<()> {
    let accounts = &mut ctx.accounts;
    process_register_vault(
        &mut accounts.orchestrator,
        &accounts.authority.key(),
        &mut accounts.vault,
        vault_id,
        ctx.bumps.vault,
    )?;

    emit!(VaultRegistered {
        vault_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn process_register_vault(
    orchestrator: &mut Orchestrator,
    caller: &Pubkey,
    vault: &mut VaultRecord,
    vault_id: Pubkey,
    bump: u8,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    vault.register(vault_id, bump)?;
    orchestrator.record_vault_registration();
    Ok(())
}
