use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{
    constants::*,
    events::{CapEnabled, CapSet, TokenRegistered, TokenVaultAdded},
    state::{
        require_registered_token, require_registered_vault, CappedToken, Orchestrator,
        VaultRecord,
    },
};

#[derive(Accounts)]
pub struct RegisterToken<'info> {
    #[account(
        mut,
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Mint of the capped token
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = CappedToken::LEN,
        seeds = [CAPPED_TOKEN_SEED, mint.key().as_ref()],
        bump
    )]
    pub capped_token: Account<'info, CappedToken>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn register_token(mut ctx: Context<RegisterToken>) -> Result<()> {
    let token_id = ctx.accounts.mint.key();
    let accounts = &mut ctx.accounts;
    process_register_token(
        &mut accounts.orchestrator,
        &accounts.authority.key(),
        &mut accounts.capped_token,
        token_id,
        ctx.bumps.capped_token,
    )?;

    emit!(TokenRegistered {
        token_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Shared by the cap flag and cap value instructions.
#[derive(Accounts)]
#[instruction(token_id: Pubkey)]
pub struct UpdateCap<'info> {
    #[account(
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Absent when the token is not registered
    #[account(
        mut,
        seeds = [CAPPED_TOKEN_SEED, token_id.as_ref()],
        bump
    )]
    pub capped_token: Option<Account<'info, CappedToken>>,

    pub authority: Signer<'info>,
}

pub fn enable_cap(mut ctx: Context<UpdateCap>, token_id: Pubkey, enabled: bool) -> Result<()> {
    let accounts = &mut ctx.accounts;
    process_enable_cap(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.capped_token.as_deref_mut(),
        &token_id,
        enabled,
    )?;

    emit!(CapEnabled {
        token_id,
        enabled,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn set_cap(mut ctx: Context<UpdateCap>, token_id: Pubkey, cap: u64) -> Result<()> {
    let accounts = &mut ctx.accounts;
    process_set_cap(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.capped_token.as_deref_mut(),
        &token_id,
        cap,
    )?;

    emit!(CapSet {
        token_id,
        cap,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(token_id: Pubkey, vault_id: Pubkey)]
pub struct AddTokenVault<'info> {
    #[account(
        seeds = [ORCHESTRATOR_SEED],
        bump = orchestrator.bump
    )]
    pub orchestrator: Account<'info, Orchestrator>,

    /// Absent when the token is not registered
    #[account(
        mut,
        seeds = [CAPPED_TOKEN_SEED, token_id.as_ref()],
        bump
    )]
    pub capped_token: Option<Account<'info, CappedToken>>,

    /// Absent when the vault is not registered
    #[account(
        seeds = [VAULT_SEED, vault_id.as_ref()],
        bump
    )]
    pub vault: Option<Account<'info, VaultRecord>>,

    pub authority: Signer<'info>,
}

pub fn add_token_vault(mut ctx: Context<AddTokenVault>, token_id: Pubkey, vault_id: Pubkey) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let added = process_add_token_vault(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.capped_token.as_deref_mut(),
        accounts.vault.as_deref(),
        &token_id,
        &vault_id,
    )?;
    if !added {
        msg!("Vault {} already authorized for {}", vault_id, token_id);
    }

    emit!(TokenVaultAdded {
        token_id,
        vault_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn process_register_token(
    orchestrator: &mut Orchestrator,
    caller: &Pubkey,
    token: &mut CappedToken,
    token_id: Pubkey,
    bump: u8,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    token.register(token_id, bump)?;
    orchestrator.record_token_registration();
    Ok(())
}

pub fn process_enable_cap(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    token: Option<&mut CappedToken>,
    token_id: &Pubkey,
    enabled: bool,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    require_registered_token(token, token_id)?.enable_cap(enabled);
    Ok(())
}

pub fn process_set_cap(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    token: Option<&mut CappedToken>,
    token_id: &Pubkey,
    cap: u64,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    require_registered_token(token, token_id)?.set_cap(cap);
    Ok(())
}

/// Token identity is checked before vault identity.
pub fn process_add_token_vault(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    token: Option<&mut CappedToken>,
    vault: Option<&VaultRecord>,
    token_id: &Pubkey,
    vault_id: &Pubkey,
) -> Result<bool> {
    orchestrator.require_owner(caller)?;
    let token = require_registered_token(token, token_id)?;
    require_registered_vault(vault, vault_id)?;
    token.add_vault(*vault_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::OrchestratorError, test_utils::*};

    #[test]
    fn registering_a_token_counts_it() {
        let (mut orchestrator, owner) = orchestrator();
        let mut token = CappedToken::default();
        let mint = Pubkey::new_unique();

        assert_eq!(
            error_code(process_register_token(
                &mut orchestrator,
                &Pubkey::new_unique(),
                &mut token,
                mint,
                1
            )),
            u32::from(OrchestratorError::Unauthorized)
        );
        process_register_token(&mut orchestrator, &owner, &mut token, mint, 1).unwrap();
        assert_eq!(token.token_id, mint);
        assert_eq!(orchestrator.token_count, 1);
    }

    #[test]
    fn cap_updates_are_immediate() {
        let (orchestrator, owner) = orchestrator();
        let mut token = registered_token();
        let token_id = token.token_id;

        process_enable_cap(&orchestrator, &owner, Some(&mut token), &token_id, true).unwrap();
        process_set_cap(&orchestrator, &owner, Some(&mut token), &token_id, 100).unwrap();
        assert!(token.cap_enabled);
        assert_eq!(token.cap, 100);

        process_enable_cap(&orchestrator, &owner, Some(&mut token), &token_id, false).unwrap();
        assert!(!token.cap_enabled);
    }

    #[test]
    fn cap_updates_validate_caller_then_token() {
        let (orchestrator, owner) = orchestrator();
        let mut token = registered_token();
        let token_id = token.token_id;

        assert_eq!(
            error_code(process_enable_cap(
                &orchestrator,
                &Pubkey::new_unique(),
                Some(&mut token),
                &token_id,
                true
            )),
            u32::from(OrchestratorError::Unauthorized)
        );
        assert_eq!(
            error_code(process_set_cap(
                &orchestrator,
                &Pubkey::new_unique(),
                None,
                &Pubkey::default(),
                0
            )),
            u32::from(OrchestratorError::Unauthorized)
        );
        assert_eq!(
            error_code(process_enable_cap(&orchestrator, &owner, None, &Pubkey::default(), true)),
            u32::from(OrchestratorError::InvalidToken)
        );
        assert_eq!(
            error_code(process_set_cap(&orchestrator, &owner, None, &Pubkey::default(), 100)),
            u32::from(OrchestratorError::InvalidToken)
        );
        assert!(!token.cap_enabled);
        assert_eq!(token.cap, 0);
    }

    #[test]
    fn adding_a_vault_checks_token_before_vault() {
        let (orchestrator, owner) = orchestrator();
        let mut token = registered_token();
        let vault = registered_vault();
        let (token_id, vault_id) = (token.token_id, vault.vault_id);

        assert_eq!(
            error_code(process_add_token_vault(
                &orchestrator,
                &Pubkey::new_unique(),
                Some(&mut token),
                Some(&vault),
                &token_id,
                &vault_id
            )),
            u32::from(OrchestratorError::Unauthorized)
        );
        assert_eq!(
            error_code(process_add_token_vault(
                &orchestrator,
                &owner,
                None,
                None,
                &Pubkey::default(),
                &Pubkey::default()
            )),
            u32::from(OrchestratorError::InvalidToken)
        );
        assert_eq!(
            error_code(process_add_token_vault(
                &orchestrator,
                &owner,
                Some(&mut token),
                None,
                &token_id,
                &Pubkey::default()
            )),
            u32::from(OrchestratorError::InvalidVault)
        );
        assert!(token.authorized_vaults.is_empty());

        assert!(process_add_token_vault(
            &orchestrator,
            &owner,
            Some(&mut token),
            Some(&vault),
            &token_id,
            &vault_id
        )
        .unwrap());
        assert!(token.is_authorized(&vault_id));
    }
}
