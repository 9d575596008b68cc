use anchor_lang::prelude::*;

use crate::{
    constants::*,
    events::{OrchestratorInitialized, OwnershipTransferred},
    state::Orchestrator,
};

#[derive(Accounts)]
pub struct InitializeOrchestrator<'info> {
    #[account(
        init,
        payer = authority,
        space = Orchestrator::LEN,
        seeds = [ORCHESTRATOR_SEED],
        bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Becomes the owner
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_orchestrator(ctx: Context<InitializeOrchestrator>) -> Result<()> {
    let owner = ctx.accounts.authority.key();
    ctx.accounts
        .orchestrator
        .initialize(owner, ctx.bumps.orchestrator);

    emit!(OrchestratorInitialized {
        owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    pub authority: Signer<'info>,
}

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.authority.key();
    let previous_owner = ctx
        .accounts
        .orchestrator
        .transfer_ownership(&caller, new_owner)?;

    msg!("Ownership transferred from {} to {}", previous_owner, new_owner);
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
