use anchor_lang::prelude::*;
use std::ops::Deref;

use crate::{constants::MAX_TOKEN_VAULTS, errors::OrchestratorError};

/// Supply cap settings and authorized issuers for one capped token mint.
#[account]
#[derive(Default)]
pub struct CappedToken {
    /// Mint of the capped token
    pub token_id: Pubkey,

    pub cap_enabled: bool,

    pub cap: u64,

    /// Vaults allowed to mint and burn against this token
    pub authorized_vaults: Vec<Pubkey>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl CappedToken {
    pub const LEN: usize = 8 + // discriminator
        32 + // token_id
        1 + // cap_enabled
        8 + // cap
        4 + 32 * MAX_TOKEN_VAULTS + // authorized_vaults
        1; // bump

    pub fn register(&mut self, token_id: Pubkey, bump: u8) -> Result<()> {
        require_keys_neq!(token_id, Pubkey::default(), OrchestratorError::InvalidToken);
        self.token_id = token_id;
        self.cap_enabled = false;
        self.cap = 0;
        self.authorized_vaults = Vec::new();
        self.bump = bump;
        Ok(())
    }

    pub fn enable_cap(&mut self, enabled: bool) {
        self.cap_enabled = enabled;
    }

    pub fn set_cap(&mut self, cap: u64) {
        self.cap = cap;
    }

    pub fn is_authorized(&self, vault: &Pubkey) -> bool {
        self.authorized_vaults.contains(vault)
    }

    /// Adds `vault` to the authorized set. Returns false when it was
    /// already present.
    pub fn add_vault(&mut self, vault: Pubkey) -> Result<bool> {
        if self.is_authorized(&vault) {
            return Ok(false);
        }
        require!(
            self.authorized_vaults.len() < MAX_TOKEN_VAULTS,
            OrchestratorError::TooManyVaults
        );
        self.authorized_vaults.push(vault);
        Ok(true)
    }
}

/// Resolves an optional capped token account into the registered record
/// for `token_id`. A zero id or a missing record is `InvalidToken`.
pub fn require_registered_token<T>(token: Option<T>, token_id: &Pubkey) -> Result<T>
where
    T: Deref<Target = CappedToken>,
{
    require_keys_neq!(*token_id, Pubkey::default(), OrchestratorError::InvalidToken);
    match token {
        Some(record) if record.token_id == *token_id => Ok(record),
        _ => err!(OrchestratorError::InvalidToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::error_code;

    #[test]
    fn registration_starts_uncapped() {
        let mut token = CappedToken::default();
        let mint = Pubkey::new_unique();
        token.register(mint, 7).unwrap();

        assert_eq!(token.token_id, mint);
        assert!(!token.cap_enabled);
        assert_eq!(token.cap, 0);
        assert!(token.authorized_vaults.is_empty());
        assert_eq!(
            error_code(CappedToken::default().register(Pubkey::default(), 0)),
            u32::from(OrchestratorError::InvalidToken)
        );
    }

    #[test]
    fn adding_a_vault_twice_keeps_one_entry() {
        let mut token = CappedToken::default();
        token.register(Pubkey::new_unique(), 0).unwrap();
        let vault = Pubkey::new_unique();

        assert!(token.add_vault(vault).unwrap());
        assert!(!token.add_vault(vault).unwrap());
        assert_eq!(token.authorized_vaults, vec![vault]);
    }

    #[test]
    fn authorized_set_is_bounded() {
        let mut token = CappedToken::default();
        token.register(Pubkey::new_unique(), 0).unwrap();
        for _ in 0..MAX_TOKEN_VAULTS {
            token.add_vault(Pubkey::new_unique()).unwrap();
        }

        assert_eq!(
            error_code(token.add_vault(Pubkey::new_unique())),
            u32::from(OrchestratorError::TooManyVaults)
        );
        assert_eq!(token.authorized_vaults.len(), MAX_TOKEN_VAULTS);
    }
}
