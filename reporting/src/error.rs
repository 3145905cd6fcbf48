use snafu::{Location, Snafu};
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to join tasks"))]
    #[snafu(context(false))]
    Join {
        #[snafu(implicit)]
        location: Location,
        source: JoinError,
    },
    #[snafu(display("Failed a storage operation"))]
    #[snafu(context(false))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        source: mrv_core::Error,
    },
}
