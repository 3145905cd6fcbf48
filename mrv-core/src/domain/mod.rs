mod compliance;
mod date_range;
mod fuel;
mod trips;
mod vessels;

pub use compliance::*;
pub use date_range::*;
pub use fuel::*;
pub use trips::*;
pub use vessels::*;
