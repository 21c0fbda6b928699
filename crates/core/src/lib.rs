pub mod error;
pub mod job;

pub use error::*;
pub use job::*;
