#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod error;
mod ingest;
mod lifecycle;
mod settings;
mod startup;

pub use error::*;
pub use ingest::*;
pub use lifecycle::*;
pub use settings::*;
pub use startup::*;
