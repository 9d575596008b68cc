pub mod capped_token;
pub mod fees;
pub mod initialize_orchestrator;
pub mod initialize_vault;
pub mod pause_vault;
pub mod register_vault;
pub mod set_vault_parameter;
pub mod timelock;

pub use capped_token::*;
pub use fees::*;
pub use initialize_orchestrator::*;
pub use initialize_vault::*;
pub use pause_vault::*;
pub use register_vault::*;
pub use set_vault_parameter::*;
pub use timelock::*;
