//! Frontend Models
//!
//! Data structures matching backend records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::dates::deserialize_find_date;

/// Opaque post identifier; numeric and string ids decode to the same text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => PostId(n.to_string()),
            RawId::Text(s) => PostId(s),
        })
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        PostId(value.to_string())
    }
}

/// Lost-item report (matches the `post` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lostitem_name: String,
    #[serde(default, deserialize_with = "deserialize_find_date")]
    pub find_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resolved: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden: bool,
}

/// `null` columns decode like absent ones
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Authenticated backend session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    /// A session without `expires_at` never expires client-side
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now_secs)
    }
}
