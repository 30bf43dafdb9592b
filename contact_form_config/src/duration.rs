use std::ops::Deref;

use serde::Deserialize;

/// A duration written as space separated parts like `30m` or `1h 30m`.
///
/// Supported units are `s`, `m`, `h` and `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = InvalidDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(parse_part)
            .sum::<Option<u64>>()
            .map(|secs| Self(std::time::Duration::from_secs(secs)))
            .ok_or_else(|| InvalidDurationError(s.into()))
    }
}

fn parse_part(part: &str) -> Option<u64> {
    let unit = match part.chars().last()? {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        _ => return None,
    };
    let value = &part[..part.len() - 1];
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok()?.checked_mul(unit)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid duration {0:?}")]
pub struct InvalidDurationError(String);

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
