/// PDA seeds
pub const ORCHESTRATOR_SEED: &[u8] = b"orchestrator";
pub const VAULT_SEED: &[u8] = b"vault";
/// Commit entries are keyed by [TIMELOCK_SEED, vault_id, parameter id]
pub const TIMELOCK_SEED: &[u8] = b"timelock";
pub const CAPPED_TOKEN_SEED: &[u8] = b"capped_token";

/// Time constants
pub const SECONDS_PER_DAY: i64 = 86400;

/// Minimum delay between unlocking a vault function and executing it
pub const TIMELOCK_DELAY: i64 = 3 * SECONDS_PER_DAY;

/// Registry limits
pub const MAX_TOKEN_VAULTS: usize = 16;
