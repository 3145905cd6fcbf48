#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod buckets;
mod error;
mod rollup;

pub use buckets::*;
pub use error::*;
pub use rollup::*;
