//!The volume estimation core: the signed volume integral and the batch
//!pipeline that drives it.

pub mod volume;

///The primary pipeline and functions
pub mod pipeline;
pub mod prelude;
