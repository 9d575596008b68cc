use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::{constants::TIMELOCK_DELAY, errors::OrchestratorError};

/// Timelocked vault functions. The discriminant is the parameter id used in
/// commit entry seeds and must stay stable.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VaultParameter {
    #[default]
    Divisor,
    Ratio,
    BurnFee,
    LiquidationPenalty,
    Tcap,
    TcapOracle,
    Collateral,
    CollateralOracle,
    EthOracle,
}

impl VaultParameter {
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Delay between unlock and the earliest execution. Uniform for every
    /// parameter kind.
    pub fn required_delay(self) -> i64 {
        TIMELOCK_DELAY
    }
}

/// A value presented for a timelocked vault function.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    Amount(u64),
    Address(Pubkey),
}

impl ParameterValue {
    /// keccak-256 over the canonical encoding: integers as a 32-byte
    /// big-endian word, addresses as their raw key bytes.
    pub fn commit_hash(&self) -> [u8; 32] {
        match self {
            ParameterValue::Amount(value) => {
                let mut word = [0u8; 32];
                word[24..].copy_from_slice(&value.to_be_bytes());
                keccak::hash(&word).to_bytes()
            }
            ParameterValue::Address(key) => keccak::hash(key.as_ref()).to_bytes(),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommitState {
    #[default]
    Locked,
    Committed { hash: [u8; 32], unlock_at: i64 },
    /// Executed once; behaves as locked until the next unlock.
    Consumed { executed_at: i64 },
}

/// Pending commitment for one (vault, parameter) pair.
#[account]
#[derive(Default)]
pub struct CommitEntry {
    /// Vault identity this entry belongs to
    pub vault: Pubkey,

    /// Vault function this entry belongs to
    pub parameter: VaultParameter,

    pub state: CommitState,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 16],
}

impl CommitEntry {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault
        1 + // parameter
        1 + 32 + 8 + // state (largest variant)
        1 + // bump
        16; // _reserved

    pub fn is_for(&self, vault: &Pubkey, parameter: VaultParameter) -> bool {
        self.vault == *vault && self.parameter == parameter
    }

    /// Records a new commitment, replacing whatever was pending. Binds the
    /// entry to its key the first time it is written.
    pub fn unlock(
        &mut self,
        vault: Pubkey,
        parameter: VaultParameter,
        hash: [u8; 32],
        now: i64,
        bump: u8,
    ) -> Result<i64> {
        if self.vault == Pubkey::default() {
            self.vault = vault;
            self.parameter = parameter;
            self.bump = bump;
        }
        require!(
            self.is_for(&vault, parameter),
            OrchestratorError::InvalidVault
        );

        let unlock_at = now
            .checked_add(parameter.required_delay())
            .ok_or(OrchestratorError::MathOverflow)?;
        self.state = CommitState::Committed { hash, unlock_at };
        Ok(unlock_at)
    }

    pub fn lock(&mut self) {
        self.state = CommitState::Locked;
    }

    /// Checks that `value` may be applied now without consuming the entry.
    pub fn verify(&self, value: &ParameterValue, now: i64) -> Result<()> {
        match self.state {
            CommitState::Committed { hash, unlock_at } => {
                require!(now >= unlock_at, OrchestratorError::StillLocked);
                require!(
                    value.commit_hash() == hash,
                    OrchestratorError::HashMismatch
                );
                Ok(())
            }
            CommitState::Locked | CommitState::Consumed { .. } => {
                err!(OrchestratorError::StillLocked)
            }
        }
    }

    /// One-shot execution: verifies and moves the entry to `Consumed`.
    pub fn try_execute(&mut self, value: &ParameterValue, now: i64) -> Result<()> {
        self.verify(value, now)?;
        self.state = CommitState::Consumed { executed_at: now };
        Ok(())
    }

    /// Earliest execution timestamp, zero when nothing is pending.
    pub fn unlock_at(&self) -> i64 {
        match self.state {
            CommitState::Committed { unlock_at, .. } => unlock_at,
            _ => 0,
        }
    }

    pub fn committed_hash(&self) -> Option<[u8; 32]> {
        match self.state {
            CommitState::Committed { hash, .. } => Some(hash),
            _ => None,
        }
    }
}
