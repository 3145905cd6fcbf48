use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed a storage operation"))]
    #[snafu(context(false))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        source: mrv_core::Error,
    },
}

impl Error {
    /// Whether the underlying cause is a user-actionable validation
    /// conflict; these are surfaced verbatim instead of being treated as
    /// internal failures.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Storage { source, .. } => source.is_conflict(),
        }
    }
}
