use anchor_lang::prelude::*;

use crate::errors::OrchestratorError;

/// Singleton governance account. Holds the owner identity and the fees
/// swept out of managed vaults until the owner retrieves them.
#[account]
#[derive(Default)]
pub struct Orchestrator {
    /// The only identity allowed to mutate registry state
    pub owner: Pubkey,

    /// Lamports retrieved from vaults and not yet sent to the owner
    pub fee_balance: u64,

    /// Number of vault records ever registered
    pub vault_count: u64,

    /// Number of capped tokens ever registered
    pub token_count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl Orchestrator {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        8 + // fee_balance
        8 + // vault_count
        8 + // token_count
        1 + // bump
        32; // _reserved

    pub fn initialize(&mut self, owner: Pubkey, bump: u8) {
        self.owner = owner;
        self.fee_balance = 0;
        self.vault_count = 0;
        self.token_count = 0;
        self.bump = bump;
    }

    /// Gate for every mutating operation.
    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, OrchestratorError::Unauthorized);
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.require_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), OrchestratorError::InvalidOwner);
        let previous = std::mem::replace(&mut self.owner, new_owner);
        Ok(previous)
    }

    pub fn credit_fees(&mut self, amount: u64) -> Result<()> {
        self.fee_balance = self
            .fee_balance
            .checked_add(amount)
            .ok_or(OrchestratorError::MathOverflow)?;
        Ok(())
    }

    /// Empties the fee balance and returns what it held.
    pub fn take_fees(&mut self) -> u64 {
        std::mem::take(&mut self.fee_balance)
    }

    pub fn record_vault_registration(&mut self) {
        self.vault_count = self.vault_count.saturating_add(1);
    }

    pub fn record_token_registration(&mut self) {
        self.token_count = self.token_count.saturating_add(1);
    }
}
