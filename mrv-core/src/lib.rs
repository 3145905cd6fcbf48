#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod clock;
mod domain;
pub mod error;
mod ports;
mod queries;
mod schedules;

#[cfg(feature = "test")]
pub mod test_helper;

pub use clock::*;
pub use domain::*;
pub use error::*;
pub use ports::*;
pub use queries::*;
pub use schedules::*;
