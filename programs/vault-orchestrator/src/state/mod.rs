pub mod capped_token;
pub mod commit;
pub mod orchestrator;
pub mod vault;

pub use capped_token::*;
pub use commit::*;
pub use orchestrator::*;
pub use vault::*;
