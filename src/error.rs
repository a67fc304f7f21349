//! Errors for the fallible, non-hot-path surface: scene loading and handle lookup.
//!
//! Per-step numerical degeneracies are not errors; see the notes on
//! [`crate::core::math`].

use crate::domain::body::BodyId;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("scene parse error: {0}")]
    SceneParse(String),

    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("unknown body {0}")]
    UnknownBody(BodyId),

    #[error("joint connects {0} to itself")]
    SelfJoint(BodyId),

    #[error("joint between static bodies {0} and {1}")]
    StaticJoint(BodyId, BodyId),

    #[error("invalid body: {0}")]
    InvalidBody(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::SceneParse(e.to_string())
    }
}
