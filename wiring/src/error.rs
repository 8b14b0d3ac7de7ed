use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid move token {token:?}: {reason}")]
    InvalidMoveToken { token: String, reason: &'static str },
    #[error("Wire leaves the coordinate range at move {index}")]
    WireTooLong { index: usize },
    #[error("The wires never cross")]
    NoIntersections,
}

impl Error {
    pub(crate) fn invalid_move(token: &str, reason: &'static str) -> Error {
        Error::InvalidMoveToken {
            token: token.to_owned(),
            reason,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
