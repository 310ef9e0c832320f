//! Per-invocation task context.

use std::fmt;

use uuid::Uuid;

/// Identifier correlating all log events of one CLI invocation.
///
/// Recorded on the root tracing span by the CLI; adapters inherit it
/// through span context rather than threading it by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunId(Uuid);

impl RunId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
