#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod cii;
mod ets;
mod ghg;

pub use cii::*;
pub use ets::*;
pub use ghg::*;
