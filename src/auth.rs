//! API key set and tier resolution.

use crate::error::Error;
use std::fmt;

/// Authorization level required by an operation and proven by a key.
///
/// Master and custom keys act at [`KeyTier::Admin`] and satisfy any
/// operation; read and write keys must match the required tier exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyTier {
    Read,
    Write,
    Admin,
}

impl fmt::Display for KeyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KeyTier::Read => "read",
            KeyTier::Write => "write",
            KeyTier::Admin => "admin",
        };
        f.write_str(s)
    }
}

/// The credential set presented to the API.
///
/// Intended use is either a master key, a custom key, or a read/write pair;
/// when several are set, precedence is master > custom > read/write. Empty
/// strings count as absent.
#[derive(Clone, Debug, Default)]
pub struct ApiKeys {
    pub master_key: Option<String>,
    pub custom_key: Option<String>,
    pub write_key: Option<String>,
    pub read_key: Option<String>,
}

impl ApiKeys {
    pub fn master(key: impl Into<String>) -> Self {
        ApiKeys {
            master_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub fn custom(key: impl Into<String>) -> Self {
        ApiKeys {
            custom_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub fn read_write(read_key: impl Into<String>, write_key: impl Into<String>) -> Self {
        ApiKeys {
            read_key: Some(read_key.into()),
            write_key: Some(write_key.into()),
            ..Default::default()
        }
    }

    pub fn read_only(read_key: impl Into<String>) -> Self {
        ApiKeys {
            read_key: Some(read_key.into()),
            ..Default::default()
        }
    }

    pub fn write_only(write_key: impl Into<String>) -> Self {
        ApiKeys {
            write_key: Some(write_key.into()),
            ..Default::default()
        }
    }

    /// Tier this credential set operates at, or `None` when no key is set.
    pub fn tier(&self) -> Option<KeyTier> {
        if non_empty(&self.master_key).is_some() || non_empty(&self.custom_key).is_some() {
            Some(KeyTier::Admin)
        } else if non_empty(&self.write_key).is_some() {
            Some(KeyTier::Write)
        } else if non_empty(&self.read_key).is_some() {
            Some(KeyTier::Read)
        } else {
            None
        }
    }

    /// Pick the key to authorize an operation requiring `required`.
    pub fn resolve(&self, required: KeyTier) -> Result<&str, Error> {
        if let Some(key) = non_empty(&self.master_key).or_else(|| non_empty(&self.custom_key)) {
            return Ok(key);
        }
        let (tier, key) = if let Some(key) = non_empty(&self.write_key) {
            (KeyTier::Write, key)
        } else if let Some(key) = non_empty(&self.read_key) {
            (KeyTier::Read, key)
        } else {
            return Err(Error::Auth("no API key configured".into()));
        };
        if tier != required {
            return Err(Error::Auth(format!(
                "{} key lacks permission to perform this operation",
                tier
            )));
        }
        Ok(key)
    }
}

fn non_empty(key: &Option<String>) -> Option<&str> {
    key.as_deref().filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_key_satisfies_every_tier() {
        let keys = ApiKeys::master("mk");
        for tier in [KeyTier::Read, KeyTier::Write, KeyTier::Admin] {
            assert_eq!(keys.resolve(tier).unwrap(), "mk");
        }
    }

    #[test]
    fn master_key_wins_over_custom() {
        let keys = ApiKeys {
            master_key: Some("mk".into()),
            custom_key: Some("ck".into()),
            ..Default::default()
        };
        assert_eq!(keys.resolve(KeyTier::Admin).unwrap(), "mk");
    }

    #[test]
    fn custom_key_acts_at_admin_tier() {
        let keys = ApiKeys::custom("ck");
        assert_eq!(keys.tier(), Some(KeyTier::Admin));
        assert_eq!(keys.resolve(KeyTier::Write).unwrap(), "ck");
    }

    #[test]
    fn read_key_rejected_for_write_and_admin() {
        let keys = ApiKeys::read_only("rk");
        assert_eq!(keys.resolve(KeyTier::Read).unwrap(), "rk");
        assert!(matches!(keys.resolve(KeyTier::Write), Err(Error::Auth(_))));
        assert!(matches!(keys.resolve(KeyTier::Admin), Err(Error::Auth(_))));
    }

    #[test]
    fn write_key_rejected_for_read() {
        let keys = ApiKeys::write_only("wk");
        assert!(matches!(keys.resolve(KeyTier::Read), Err(Error::Auth(_))));
        assert_eq!(keys.resolve(KeyTier::Write).unwrap(), "wk");
    }

    #[test]
    fn read_write_pair_operates_at_write_tier() {
        let keys = ApiKeys::read_write("rk", "wk");
        assert_eq!(keys.tier(), Some(KeyTier::Write));
        assert_eq!(keys.resolve(KeyTier::Write).unwrap(), "wk");
    }

    #[test]
    fn empty_set_always_fails() {
        let keys = ApiKeys::default();
        assert_eq!(keys.tier(), None);
        assert!(matches!(keys.resolve(KeyTier::Read), Err(Error::Auth(_))));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let keys = ApiKeys {
            master_key: Some(String::new()),
            read_key: Some("rk".into()),
            ..Default::default()
        };
        assert_eq!(keys.tier(), Some(KeyTier::Read));
        assert_eq!(keys.resolve(KeyTier::Read).unwrap(), "rk");
    }
}
