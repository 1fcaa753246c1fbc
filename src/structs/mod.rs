pub mod holding;
pub use holding::*;

pub mod managers;
pub use managers::*;
