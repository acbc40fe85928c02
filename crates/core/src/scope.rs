//! Visibility scopes for published data
//!
//! A scope classifies how far a published value is intended to travel.
//! It is metadata only: the external distribution engine reads the tag
//! and decides delivery reach; this crate defines and carries it, never
//! enforces it.

use serde::{Deserialize, Serialize};

/// Intended propagation reach of a published value.
///
/// Numeric tags are ABI-stable and must not be reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Scope {
    /// No scope assigned.
    #[default]
    Undef = 0,
    /// Used internally by the exchange library only; never distributed.
    Internal = 1,
    /// Share only with application processes on the same node; excluded
    /// from packages sent to remote requestors.
    Local = 2,
    /// Share only with application processes on remote nodes; withheld
    /// from processes on the same node.
    Remote = 3,
    /// Share with all requesting processes regardless of location.
    Global = 4,
    /// Published data available to the owning namespace only.
    Namespace = 5,
    /// Published data available to all.
    Universal = 6,
    /// Published data available to all namespaces owned by this user.
    User = 7,
}

impl Scope {
    /// The ABI value of this scope.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up the scope for a raw ABI code.
    pub fn from_code(code: u32) -> Option<Scope> {
        let scope = match code {
            0 => Scope::Undef,
            1 => Scope::Internal,
            2 => Scope::Local,
            3 => Scope::Remote,
            4 => Scope::Global,
            5 => Scope::Namespace,
            6 => Scope::Universal,
            7 => Scope::User,
            _ => return None,
        };
        Some(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in 0..=7 {
            let scope = Scope::from_code(code).unwrap();
            assert_eq!(scope.code(), code);
        }
        assert_eq!(Scope::from_code(8), None);
    }

    #[test]
    fn test_default_is_undef() {
        assert_eq!(Scope::default(), Scope::Undef);
        assert_eq!(Scope::default().code(), 0);
    }
}
