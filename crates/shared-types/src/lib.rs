pub mod common;
pub mod dashboard;
pub mod dose;
pub mod error;

pub use common::*;
pub use dashboard::*;
pub use dose::*;
pub use error::*;
