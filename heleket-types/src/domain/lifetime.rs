//! Permitted invoice lifetimes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoice time-to-live in seconds.
///
/// The gateway accepts a closed set of values: every 5 minutes from 300 to
/// 3600, then hourly up to 43200. Serialized as the raw second count;
/// deserialization rejects values outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Lifetime {
    Minutes5,
    Minutes10,
    Minutes15,
    Minutes20,
    Minutes25,
    Minutes30,
    Minutes35,
    Minutes40,
    Minutes45,
    Minutes50,
    Minutes55,
    Hours1,
    Hours2,
    Hours3,
    Hours4,
    Hours5,
    Hours6,
    Hours7,
    Hours8,
    Hours9,
    Hours10,
    Hours11,
    Hours12,
}

impl Lifetime {
    /// Minimum permitted lifetime.
    pub const MIN: Lifetime = Lifetime::Minutes5;
    /// Maximum permitted lifetime.
    pub const MAX: Lifetime = Lifetime::Hours12;

    /// Returns the lifetime in seconds.
    pub fn as_secs(&self) -> u32 {
        match self {
            Lifetime::Minutes5 => 300,
            Lifetime::Minutes10 => 600,
            Lifetime::Minutes15 => 900,
            Lifetime::Minutes20 => 1200,
            Lifetime::Minutes25 => 1500,
            Lifetime::Minutes30 => 1800,
            Lifetime::Minutes35 => 2100,
            Lifetime::Minutes40 => 2400,
            Lifetime::Minutes45 => 2700,
            Lifetime::Minutes50 => 3000,
            Lifetime::Minutes55 => 3300,
            Lifetime::Hours1 => 3600,
            Lifetime::Hours2 => 7200,
            Lifetime::Hours3 => 10800,
            Lifetime::Hours4 => 14400,
            Lifetime::Hours5 => 18000,
            Lifetime::Hours6 => 21600,
            Lifetime::Hours7 => 25200,
            Lifetime::Hours8 => 28800,
            Lifetime::Hours9 => 32400,
            Lifetime::Hours10 => 36000,
            Lifetime::Hours11 => 39600,
            Lifetime::Hours12 => 43200,
        }
    }

    /// All members of the closed set, ascending.
    pub fn all() -> &'static [Lifetime] {
        &[
            Lifetime::Minutes5,
            Lifetime::Minutes10,
            Lifetime::Minutes15,
            Lifetime::Minutes20,
            Lifetime::Minutes25,
            Lifetime::Minutes30,
            Lifetime::Minutes35,
            Lifetime::Minutes40,
            Lifetime::Minutes45,
            Lifetime::Minutes50,
            Lifetime::Minutes55,
            Lifetime::Hours1,
            Lifetime::Hours2,
            Lifetime::Hours3,
            Lifetime::Hours4,
            Lifetime::Hours5,
            Lifetime::Hours6,
            Lifetime::Hours7,
            Lifetime::Hours8,
            Lifetime::Hours9,
            Lifetime::Hours10,
            Lifetime::Hours11,
            Lifetime::Hours12,
        ]
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Lifetime::Hours1
    }
}

impl From<Lifetime> for u32 {
    fn from(lifetime: Lifetime) -> Self {
        lifetime.as_secs()
    }
}

impl TryFrom<u32> for Lifetime {
    type Error = String;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        Lifetime::all()
            .iter()
            .find(|l| l.as_secs() == secs)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Invalid lifetime {} s: expected 300-3600 in 300 s steps or 3600-43200 in 3600 s steps",
                    secs
                )
            })
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Lifetime::MIN.as_secs(), 300);
        assert_eq!(Lifetime::MAX.as_secs(), 43200);
        assert_eq!(Lifetime::default().as_secs(), 3600);
    }

    #[test]
    fn test_try_from_members() {
        assert_eq!(Lifetime::try_from(300).unwrap(), Lifetime::Minutes5);
        assert_eq!(Lifetime::try_from(3300).unwrap(), Lifetime::Minutes55);
        assert_eq!(Lifetime::try_from(7200).unwrap(), Lifetime::Hours2);
    }

    #[test]
    fn test_try_from_rejects_non_members() {
        assert!(Lifetime::try_from(0).is_err());
        assert!(Lifetime::try_from(299).is_err());
        assert!(Lifetime::try_from(3601).is_err());
        // hourly steps only above one hour
        assert!(Lifetime::try_from(3900).is_err());
        assert!(Lifetime::try_from(43500).is_err());
    }

    #[test]
    fn test_serializes_as_seconds() {
        assert_eq!(serde_json::to_string(&Lifetime::Hours1).unwrap(), "3600");
        assert_eq!(
            serde_json::from_str::<Lifetime>("900").unwrap(),
            Lifetime::Minutes15
        );
        assert!(serde_json::from_str::<Lifetime>("1000").is_err());
    }

    #[test]
    fn test_all_is_ascending_and_closed() {
        let all = Lifetime::all();
        assert_eq!(all.len(), 23);
        assert!(all.windows(2).all(|w| w[0].as_secs() < w[1].as_secs()));
    }
}
