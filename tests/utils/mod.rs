mod fakes;
mod setup;

pub use fakes::*;
pub use setup::*;
