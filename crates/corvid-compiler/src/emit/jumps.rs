//! Tracking of reserved jump slots.
//!
//! A forward jump is emitted as a placeholder before its target exists. The
//! manager remembers which placeholders are still open so that a patch can be
//! checked against a real reservation and so that finishing with an open
//! placeholder is caught.

use corvid_core::{CodegenError, Result};

use super::JumpLabel;

/// Open jump placeholders, in reservation order.
#[derive(Debug, Default)]
pub struct JumpManager {
    pending: Vec<u32>,
}

impl JumpManager {
    /// Record a placeholder at `address`.
    pub fn reserve(&mut self, address: u32) -> JumpLabel {
        self.pending.push(address);
        JumpLabel(address)
    }

    /// Close the placeholder for `label`.
    ///
    /// Fails if the label is not open, e.g. because it was already patched.
    pub fn resolve(&mut self, label: JumpLabel) -> Result<()> {
        // Inner constructs close first, so the match is usually last.
        match self.pending.iter().rposition(|&a| a == label.0) {
            Some(pos) => {
                self.pending.remove(pos);
                Ok(())
            }
            None => Err(CodegenError::InvalidPatch { address: label.0 }),
        }
    }

    /// Oldest placeholder still waiting for a target.
    pub fn first_pending(&self) -> Option<u32> {
        self.pending.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_has_nothing_pending() {
        let manager = JumpManager::default();
        assert_eq!(manager.first_pending(), None);
    }

    #[test]
    fn reserve_and_resolve() {
        let mut manager = JumpManager::default();
        let label = manager.reserve(4);
        assert_eq!(label, JumpLabel(4));
        assert_eq!(manager.first_pending(), Some(4));

        assert_eq!(manager.resolve(label), Ok(()));
        assert_eq!(manager.first_pending(), None);
    }

    #[test]
    fn nested_reservations_resolve_in_any_order() {
        let mut manager = JumpManager::default();
        let outer = manager.reserve(2);
        let inner = manager.reserve(5);

        manager.resolve(inner).unwrap();
        assert_eq!(manager.first_pending(), Some(2));
        manager.resolve(outer).unwrap();
        assert_eq!(manager.first_pending(), None);
    }

    #[test]
    fn double_resolve_is_invalid() {
        let mut manager = JumpManager::default();
        let label = manager.reserve(1);
        manager.resolve(label).unwrap();

        assert_eq!(
            manager.resolve(label),
            Err(CodegenError::InvalidPatch { address: 1 })
        );
    }
}
