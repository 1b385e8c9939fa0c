//! Pull engine: outcome types, pity counters, rate curve, sampler and session.

pub mod history;
pub mod rates;
pub mod sampler;
pub mod session;
pub mod state;
pub mod types;

pub use history::*;
pub use rates::*;
pub use sampler::*;
pub use session::*;
pub use state::*;
pub use types::*;
