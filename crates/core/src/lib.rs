pub mod category;
pub mod period;
pub mod plural;
pub mod row;
pub mod sanitize;
pub mod task;
pub mod validate;

pub use task::*;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
