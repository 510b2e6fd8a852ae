//! Paste expiration policy
//!
//! A paste either self-destructs after its first read or expires after one
//! of a fixed set of durations.

use std::fmt;

use crate::error::{PastemeError, PastemeResult};

/// Expiry durations accepted by the paste service, in minutes
pub const VALID_EXPIRE_MINUTES: [i64; 6] = [5, 10, 60, 1440, 10080, 43800];

/// Check whether `minutes` is one of the accepted expiry durations
pub fn is_valid_minutes(minutes: i64) -> bool {
    VALID_EXPIRE_MINUTES.contains(&minutes)
}

/// How a paste goes away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// Deleted by the server after the first read
    SelfDestruct,
    /// Deleted after the given number of minutes
    After(i64),
}

impl Expiration {
    /// Resolve the `--destroy` / `--expire` flag pair
    ///
    /// Self-destruct wins and makes `expire` irrelevant; otherwise `expire`
    /// must be present and in [`VALID_EXPIRE_MINUTES`].
    pub fn from_flags(destroy: bool, expire: Option<i64>) -> PastemeResult<Self> {
        if destroy {
            return Ok(Self::SelfDestruct);
        }

        match expire {
            Some(minutes) if is_valid_minutes(minutes) => Ok(Self::After(minutes)),
            _ => Err(PastemeError::Validation(
                "You did not provide a valid minutes flag. See --help for more insight on this one."
                    .into(),
            )),
        }
    }

    pub fn is_self_destruct(&self) -> bool {
        matches!(self, Self::SelfDestruct)
    }

    /// Value sent as `expiresMinutes`; zero for self-destructing pastes
    pub fn wire_minutes(&self) -> i64 {
        match self {
            Self::SelfDestruct => 0,
            Self::After(minutes) => *minutes,
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfDestruct => write!(f, "self-destruct"),
            Self::After(minutes) => write!(f, "{} minutes", minutes),
        }
    }
}
