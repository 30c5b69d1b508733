//! Per-product session state
//!
//! Holds everything about the running detector that is not hardware
//! state: the current identity, the product's capability list, and the
//! operator-settable mode flags.

use std::collections::HashSet;

use muic_protocol::{DeviceKind, RULE_TABLE};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The set of accessory identities a product supports
///
/// Identities outside the set still classify, but the transition engine
/// treats them as unsupported: with VBUS present they degrade to a
/// charge-only attach, otherwise the event is treated as a detach.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    kinds: HashSet<DeviceKind>,
}

impl CapabilitySet {
    /// Empty capability set (nothing supported)
    pub fn new() -> Self {
        Self::default()
    }

    /// Capability set covering every classifiable identity
    pub fn all() -> Self {
        CapabilitySet {
            kinds: DeviceKind::ALL.iter().copied().collect(),
        }
    }

    /// Add one identity to the set
    pub fn allow(&mut self, kind: DeviceKind) -> &mut Self {
        self.kinds.insert(kind);
        self
    }

    /// Whether the product supports `kind`
    pub fn supports(&self, kind: DeviceKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Build a set from rule-table display names, as read from a
    /// product configuration file
    ///
    /// Unrecognized names are skipped with a warning rather than
    /// rejected, so an old configuration keeps working on a table that
    /// dropped a row.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = CapabilitySet::new();
        for name in names {
            match RULE_TABLE.iter().find(|rule| rule.name == name) {
                Some(rule) => {
                    set.allow(rule.kind);
                }
                None => warn!(name, "unknown device name in capability list, skipping"),
            }
        }
        set
    }
}

/// Mutable state of one detection session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Identity currently considered attached
    ///
    /// Starts at `Unknown` so the very first detection cycle always
    /// observes a transition, even to `None`.
    pub current_device: DeviceKind,
    /// Factory OTG test is running (refines the JIG UART-off + VB split)
    pub otg_test_mode: bool,
    /// Device is booted in factory mode
    pub factory_mode: bool,
    /// Treat flagged ADC readings as valid
    pub ignore_adc_error: bool,
    /// The product's supported accessory list
    pub capabilities: CapabilitySet,
}

impl SessionState {
    /// Fresh session with the given capability set
    pub fn new(capabilities: CapabilitySet) -> Self {
        SessionState {
            current_device: DeviceKind::Unknown,
            otg_test_mode: false,
            factory_mode: false,
            ignore_adc_error: false,
            capabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_names_resolves_table_names() {
        let set = CapabilitySet::from_names(["OTG", "TA", "USB", "Smartdock + TA"]);
        assert!(set.supports(DeviceKind::Otg));
        assert!(set.supports(DeviceKind::Ta));
        assert!(set.supports(DeviceKind::SmartdockTa));
        assert!(!set.supports(DeviceKind::Deskdock));
    }

    #[test]
    fn from_names_skips_unknown_entries() {
        let set = CapabilitySet::from_names(["OTG", "Flux Capacitor"]);
        assert!(set.supports(DeviceKind::Otg));
        assert!(!set.supports(DeviceKind::Unknown));
    }

    #[test]
    fn all_covers_every_identity() {
        let set = CapabilitySet::all();
        for kind in DeviceKind::ALL {
            assert!(set.supports(*kind));
        }
    }

    #[test]
    fn new_session_starts_unknown() {
        let session = SessionState::new(CapabilitySet::all());
        assert_eq!(session.current_device, DeviceKind::Unknown);
    }
}
