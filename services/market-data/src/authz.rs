//! The authorization rule
//!
//! One rule for the whole system: reads are open to everyone, mutations
//! require an authenticated admin. Every mutating entry point calls this
//! exactly once, before any parsing or validation work.

use crate::error::MarketError;
use types::principal::Principal;

/// Class of operation being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Mutate,
}

/// Decide whether `principal` may perform `operation`.
///
/// `Unauthorized` when a mutation has no principal at all, `Forbidden`
/// when the principal is present but not an admin. The two are distinct
/// outcomes and are never merged.
pub fn authorize(principal: Option<&Principal>, operation: Operation) -> Result<(), MarketError> {
    match operation {
        Operation::Read => Ok(()),
        Operation::Mutate => match principal {
            None => Err(MarketError::Unauthorized),
            Some(p) if p.is_admin() => Ok(()),
            Some(_) => Err(MarketError::Forbidden),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::principal::Role;
    use uuid::Uuid;

    fn principal(role: Role) -> Principal {
        Principal {
            id: Uuid::now_v7(),
            username: "tester".to_string(),
            role,
        }
    }

    #[test]
    fn test_read_always_allowed() {
        assert_eq!(authorize(None, Operation::Read), Ok(()));
        assert_eq!(
            authorize(Some(&principal(Role::Farmer)), Operation::Read),
            Ok(())
        );
        assert_eq!(
            authorize(Some(&principal(Role::Admin)), Operation::Read),
            Ok(())
        );
    }

    #[test]
    fn test_mutate_truth_table() {
        // absent principal
        assert_eq!(
            authorize(None, Operation::Mutate),
            Err(MarketError::Unauthorized)
        );
        // present, farmer
        assert_eq!(
            authorize(Some(&principal(Role::Farmer)), Operation::Mutate),
            Err(MarketError::Forbidden)
        );
        // present, admin
        assert_eq!(
            authorize(Some(&principal(Role::Admin)), Operation::Mutate),
            Ok(())
        );
    }
}
