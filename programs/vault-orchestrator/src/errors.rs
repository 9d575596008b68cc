use anchor_lang::prelude::*;

#[error_code]
pub enum OrchestratorError {
    #[msg("Caller is not the owner")]
    Unauthorized,

    #[msg("Not a valid vault")]
    InvalidVault,

    #[msg("Not a valid oracle")]
    InvalidOracle,

    #[msg("Not a valid capped token")]
    InvalidToken,

    #[msg("Contract already initialized")]
    AlreadyInitialized,

    #[msg("Function is timelocked")]
    StillLocked,

    #[msg("Not defined timelock value")]
    HashMismatch,

    #[msg("New owner cannot be the zero address")]
    InvalidOwner,

    #[msg("Vault is paused")]
    VaultPaused,

    #[msg("Capped token already authorizes the maximum number of vaults")]
    TooManyVaults,

    #[msg("Value kind does not match the vault parameter")]
    InvalidParameterValue,

    #[msg("Math overflow")]
    MathOverflow,
}
