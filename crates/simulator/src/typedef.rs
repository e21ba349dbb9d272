use std::fmt;
use std::str::FromStr;

use memsim_error::{errinput, Error};
use serde::{Deserialize, Serialize};

pub type FrameId = usize;

/// Logical time: the index of an access within the reference string.
pub type Timestamp = usize;

/// Identifies a logical page. Numeric and symbolic pages never compare equal,
/// so `7` and `"7a"` are distinct pages.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageId {
    Number(i64),
    Symbol(String),
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Number(n) => write!(f, "{n}"),
            PageId::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for PageId {
    fn from(n: i64) -> Self {
        PageId::Number(n)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId::Symbol(s.to_string())
    }
}

impl FromStr for PageId {
    type Err = Error;

    /// Integers become numeric pages, any other non-blank token a symbolic one.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return errinput!("page token must not be empty");
        }
        Ok(match token.parse::<i64>() {
            Ok(n) => PageId::Number(n),
            Err(_) => PageId::Symbol(token.to_string()),
        })
    }
}
