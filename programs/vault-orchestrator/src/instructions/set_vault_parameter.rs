use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::OrchestratorError,
    events::VaultParameterUpdated,
    state::{
        require_registered_vault, CommitEntry, Orchestrator, ParameterValue, VaultParameter,
        VaultRecord,
    },
};

/// Shared by every timelocked setter.
#[derive(Accounts)]
#[instruction(vault_id: Pubkey)]
pub struct ExecuteVaultParameter<'info> {
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

    /// Commit entry of the targeted function; absent when never unlocked.
    /// Its stored key is checked against the instruction.
    #[account(mut)]
    pub commit: Option<Account<'info, CommitEntry>>,

    pub authority: Signer<'info>,
}

pub fn set_vault_parameter(
    mut ctx: Context<ExecuteVaultParameter>,
    vault_id: Pubkey,
    parameter: VaultParameter,
    value: ParameterValue,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut ctx.accounts;
    process_set_vault_parameter(
        &accounts.orchestrator,
        &accounts.authority.key(),
        accounts.vault.as_deref_mut(),
        accounts.commit.as_deref_mut(),
        &vault_id,
        parameter,
        value,
        now,
    )?;

    msg!("Executed {:?} for vault {}", parameter, vault_id);
    emit!(VaultParameterUpdated {
        vault_id,
        parameter,
        value,
        timestamp: now,
    });

    Ok(())
}

/// Owner, vault identity, timelock (delay then hash), then the value's own
/// validity. The commit entry is consumed only when the value is applied.
#[allow(clippy::too_many_arguments)]
pub fn process_set_vault_parameter(
    orchestrator: &Orchestrator,
    caller: &Pubkey,
    vault: Option<&mut VaultRecord>,
    commit: Option<&mut CommitEntry>,
    vault_id: &Pubkey,
    parameter: VaultParameter,
    value: ParameterValue,
    now: i64,
) -> Result<()> {
    orchestrator.require_owner(caller)?;
    let vault = require_registered_vault(vault, vault_id)?;
    let commit = commit
        .filter(|entry| entry.is_for(vault_id, parameter))
        .ok_or_else(|| error!(OrchestratorError::StillLocked))?;

    commit.verify(&value, now)?;
    vault.apply(parameter, value)?;
    commit.try_execute(&value, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    const NOW: i64 = 1_700_000_000;
    const DAY: i64 = SECONDS_PER_DAY;

    struct Fixture {
        orchestrator: Orchestrator,
        owner: Pubkey,
        vault: VaultRecord,
        commit: CommitEntry,
    }

    impl Fixture {
        fn new() -> Self {
            let (orchestrator, owner) = orchestrator();
            let mut vault = registered_vault();
            vault.initialize(sample_params()).unwrap();
            Self {
                orchestrator,
                owner,
                vault,
                commit: CommitEntry::default(),
            }
        }

        fn unlock(&mut self, parameter: VaultParameter, value: ParameterValue, now: i64) {
            let vault_id = self.vault.vault_id;
            self.commit
                .unlock(vault_id, parameter, value.commit_hash(), now, 0)
                .unwrap();
        }

        fn set(
            &mut self,
            caller: Pubkey,
            vault_id: Pubkey,
            parameter: VaultParameter,
            value: ParameterValue,
            now: i64,
        ) -> Result<()> {
            let vault = (vault_id != Pubkey::default()).then_some(&mut self.vault);
            process_set_vault_parameter(
                &self.orchestrator,
                &caller,
                vault,
                Some(&mut self.commit),
                &vault_id,
                parameter,
                value,
                now,
            )
        }
    }

    #[test]
    fn divisor_change_follows_the_delay() {
        let mut fx = Fixture::new();
        let owner = fx.owner;
        let vault_id = fx.vault.vault_id;
        let divisor = ParameterValue::Amount(20_000_000_000);
        fx.unlock(VaultParameter::Divisor, divisor, NOW);

        assert_eq!(
            error_code(fx.set(owner, vault_id, VaultParameter::Divisor, divisor, NOW + 2 * DAY)),
            u32::from(OrchestratorError::StillLocked)
        );

        fx.set(owner, vault_id, VaultParameter::Divisor, divisor, NOW + 3 * DAY)
            .unwrap();
        assert_eq!(fx.vault.params.divisor, 20_000_000_000);

        assert_eq!(
            error_code(fx.set(owner, vault_id, VaultParameter::Divisor, divisor, NOW + 3 * DAY)),
            u32::from(OrchestratorError::StillLocked)
        );
    }

    #[test]
    fn checks_run_in_order() {
        let mut fx = Fixture::new();
        let owner = fx.owner;
        let vault_id = fx.vault.vault_id;
        let ratio = ParameterValue::Amount(200);
        fx.unlock(VaultParameter::Ratio, ratio, NOW);
        let later = NOW + 3 * DAY;

        assert_eq!(
            error_code(fx.set(Pubkey::new_unique(), vault_id, VaultParameter::Ratio, ratio, later)),
            u32::from(OrchestratorError::Unauthorized)
        );
        assert_eq!(
            error_code(fx.set(owner, Pubkey::default(), VaultParameter::Ratio, ratio, later)),
            u32::from(OrchestratorError::InvalidVault)
        );
        assert_eq!(
            error_code(fx.set(owner, vault_id, VaultParameter::Ratio, ParameterValue::Amount(10), later)),
            u32::from(OrchestratorError::HashMismatch)
        );
        assert_eq!(fx.vault.params.ratio, 150);

        fx.set(owner, vault_id, VaultParameter::Ratio, ratio, later).unwrap();
        assert_eq!(fx.vault.params.ratio, 200);
    }

    #[test]
    fn commit_for_another_function_does_not_unlock() {
        let mut fx = Fixture::new();
        let owner = fx.owner;
        let vault_id = fx.vault.vault_id;
        let value = ParameterValue::Amount(15);
        fx.unlock(VaultParameter::BurnFee, value, NOW);

        assert_eq!(
            error_code(fx.set(
                owner,
                vault_id,
                VaultParameter::LiquidationPenalty,
                value,
                NOW + 3 * DAY
            )),
            u32::from(OrchestratorError::StillLocked)
        );
        assert_eq!(fx.vault.params.liquidation_penalty, 10);
    }

    #[test]
    fn missing_commit_entry_is_still_locked() {
        let (orchestrator, owner) = orchestrator();
        let mut vault = registered_vault();
        let vault_id = vault.vault_id;

        assert_eq!(
            error_code(process_set_vault_parameter(
                &orchestrator,
                &owner,
                Some(&mut vault),
                None,
                &vault_id,
                VaultParameter::BurnFee,
                ParameterValue::Amount(0),
                NOW
            )),
            u32::from(OrchestratorError::StillLocked)
        );
    }

    #[test]
    fn zero_identifier_passes_the_hash_but_not_the_apply_check() {
        let mut fx = Fixture::new();
        let owner = fx.owner;
        let vault_id = fx.vault.vault_id;
        let zero = ParameterValue::Address(Pubkey::default());
        let before = fx.vault.params;

        for (parameter, expected) in [
            (VaultParameter::Tcap, OrchestratorError::InvalidToken),
            (VaultParameter::TcapOracle, OrchestratorError::InvalidOracle),
            (VaultParameter::CollateralOracle, OrchestratorError::InvalidOracle),
            (VaultParameter::EthOracle, OrchestratorError::InvalidOracle),
        ] {
            let mut commit = CommitEntry::default();
            commit
                .unlock(vault_id, parameter, zero.commit_hash(), NOW, 0)
                .unwrap();
            fx.commit = commit;

            assert_eq!(
                error_code(fx.set(owner, vault_id, parameter, zero, NOW + 3 * DAY)),
                u32::from(expected)
            );
            // the failed call leaves the commitment pending
            assert_eq!(fx.commit.committed_hash(), Some(zero.commit_hash()));
        }
        assert_eq!(fx.vault.params, before);
    }

    #[test]
    fn address_parameters_apply_after_the_delay() {
        let mut fx = Fixture::new();
        let owner = fx.owner;
        let vault_id = fx.vault.vault_id;
        let token = Pubkey::new_unique();
        let value = ParameterValue::Address(token);
        fx.unlock(VaultParameter::Tcap, value, NOW);

        assert_eq!(
            error_code(fx.set(
                owner,
                vault_id,
                VaultParameter::Tcap,
                ParameterValue::Address(Pubkey::new_unique()),
                NOW + 3 * DAY
            )),
            u32::from(OrchestratorError::HashMismatch)
        );
        fx.set(owner, vault_id, VaultParameter::Tcap, value, NOW + 3 * DAY)
            .unwrap();
        assert_eq!(fx.vault.params.tcap_token, token);
    }
}
