use thiserror::Error;

use crate::TokenId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Token count must be a number between {min} and {max}")]
    InvalidTokenCount { min: u8, max: u8 },
    #[error("Color palette exhausted")]
    ExhaustedPalette,
    #[error("A session is already in progress")]
    SessionInProgress,
    #[error("No token with id {0} on the surface")]
    MissingToken(TokenId),
    #[error("Surface operation failed")]
    SurfaceFailure,
}

pub type Result<T> = core::result::Result<T, GameError>;
