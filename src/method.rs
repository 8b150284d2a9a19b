//! Match policies for inverse lookup.
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InterpError;

/// How an inverse lookup resolves a query that does not land exactly on a
/// domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Only exact matches; anything else is `NoMatch`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
    /// Closest match.
    #[cfg_attr(feature = "serde", serde(rename = "nearest"))]
    Nearest,
    /// Match whose image is the largest one not above the query.
    #[cfg_attr(feature = "serde", serde(rename = "ffill"))]
    ForwardFill,
    /// Match whose image is the smallest one not below the query.
    #[cfg_attr(feature = "serde", serde(rename = "bfill"))]
    BackwardFill,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::None => "none",
            Method::Nearest => "nearest",
            Method::ForwardFill => "ffill",
            Method::BackwardFill => "bfill",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = InterpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Method::None),
            "nearest" => Ok(Method::Nearest),
            "ffill" => Ok(Method::ForwardFill),
            "bfill" => Ok(Method::BackwardFill),
            other => Err(InterpError::InvalidMethod(other.to_owned())),
        }
    }
}
