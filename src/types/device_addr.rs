use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Delimiter between key=value pairs in an address string.
pub const ARG_DELIM: char = ',';
/// Delimiter between a key and its value.
pub const PAIR_DELIM: char = '=';

/// An ordered string-to-string mapping identifying a device, parsed
/// from comma-separated `key=value` pairs.
///
/// Backed by a `BTreeMap` so serialization order is deterministic.
/// Round-trips through parse/to_string for any address whose keys and
/// values contain no delimiter characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAddr(BTreeMap<String, String>);

impl DeviceAddr {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Multi-line human-readable report, one indented line per entry.
    pub fn to_pp_string(&self) -> String {
        if self.0.is_empty() {
            return "Empty Device Address".to_string();
        }

        let mut out = String::from("Device Address:\n");
        for (key, val) in &self.0 {
            out.push_str(&format!("    {}: {}\n", key, val));
        }
        out
    }
}

impl FromStr for DeviceAddr {
    type Err = Error;

    fn from_str(args: &str) -> Result<Self, Error> {
        let mut addr = BTreeMap::new();
        for pair in args.split(ARG_DELIM) {
            if pair.trim().is_empty() {
                continue;
            }

            let key_val: Vec<&str> = pair.split(PAIR_DELIM).collect();
            if key_val.len() != 2 {
                return Err(Error::MalformedArgs {
                    args: args.to_string(),
                });
            }
            addr.insert(
                key_val[0].trim().to_string(),
                key_val[1].trim().to_string(),
            );
        }
        Ok(Self(addr))
    }
}

impl fmt::Display for DeviceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (count, (key, val)) in self.0.iter().enumerate() {
            if count > 0 {
                write!(f, "{}", ARG_DELIM)?;
            }
            write!(f, "{}{}{}", key, PAIR_DELIM, val)?;
        }
        Ok(())
    }
}

impl Deref for DeviceAddr {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DeviceAddr {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let addr: DeviceAddr = "key1 = a , key2=b".parse().unwrap();
        assert_eq!(addr.get("key1").unwrap(), "a");
        assert_eq!(addr.get("key2").unwrap(), "b");
        assert_eq!(addr.to_string(), "key1=a,key2=b");
    }

    #[test]
    fn test_empty_segments_skipped() {
        let addr: DeviceAddr = ",, type=usrp ,".parse().unwrap();
        assert_eq!(addr.len(), 1);
        assert_eq!(addr.get("type").unwrap(), "usrp");
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let err = "badpair".parse::<DeviceAddr>().unwrap_err();
        assert!(matches!(err, Error::MalformedArgs { args } if args == "badpair"));
    }

    #[test]
    fn test_double_separator_is_malformed() {
        assert!("a=b=c".parse::<DeviceAddr>().is_err());
    }

    #[test]
    fn test_pp_string() {
        assert_eq!(DeviceAddr::new().to_pp_string(), "Empty Device Address");

        let addr: DeviceAddr = "addr=192.168.10.2,type=usrp".parse().unwrap();
        assert_eq!(
            addr.to_pp_string(),
            "Device Address:\n    addr: 192.168.10.2\n    type: usrp\n"
        );
    }
}
