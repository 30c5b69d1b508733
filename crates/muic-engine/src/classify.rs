//! Snapshot classification
//!
//! Resolves one status snapshot into an attach/detach/ignore decision:
//! a JIG-settle debounce pre-filter, a first-match scan of the rule
//! table, the capability filter, and the two context refinements that
//! rewrite ambiguous identities before they reach the transition
//! engine.

use muic_protocol::{AdcCode, AdcSampleMode, DeviceKind, SignalSnapshot, RULE_TABLE};
use tracing::{debug, info};

use crate::session::SessionState;

/// Result of classifying one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The snapshot resolved to an attached identity
    Attach(DeviceKind),
    /// Nothing matched; whatever is attached should be detached
    Detach,
    /// Spurious reading, drop it without touching any state
    Ignored,
}

/// Classify one snapshot in the context of `session`
///
/// Pure: inspects but never mutates the session.
pub fn classify(snapshot: &SignalSnapshot, session: &SessionState) -> Classification {
    if snapshot.adc_error && session.ignore_adc_error {
        // The chip can be told to keep flagged readings; this build does
        // not, so the flag only changes what we log.
        info!(adc = snapshot.adc.raw(), "ADC error flagged, reading dropped despite ignore request");
    }

    if is_jig_settle_bounce(snapshot, session) {
        debug!(adc = snapshot.adc.raw(), "adjacent ADC bounce while JIG UART attached, ignoring");
        return Classification::Ignored;
    }

    let matched = RULE_TABLE.iter().find(|rule| rule.matches(snapshot));
    let rule = match matched {
        Some(rule) => rule,
        None => {
            debug!(
                adc = snapshot.adc.raw(),
                vbus = snapshot.vbus_high,
                "no rule matched"
            );
            return Classification::Detach;
        }
    };

    debug!(rule = rule.name, "snapshot matched");

    if !session.capabilities.supports(rule.kind) {
        return if snapshot.vbus_high {
            // Charge from the unsupported accessory but expose no identity.
            info!(rule = rule.name, "unsupported accessory with VBUS, charging only");
            Classification::Attach(DeviceKind::UnsupportedIdVb)
        } else {
            info!(rule = rule.name, "unsupported accessory, treating as detach");
            Classification::Detach
        };
    }

    Classification::Attach(refine(rule.kind, session))
}

/// A JIG UART plug settles through neighboring ADC codes; readings one
/// quantization step away from the JIG UART-off code are transient while
/// that plug is attached. The JIG UART-on code escapes the filter in
/// factory mode, where the off-to-on promotion is a real event.
fn is_jig_settle_bounce(snapshot: &SignalSnapshot, session: &SessionState) -> bool {
    session.current_device == DeviceKind::JigUartOff
        && snapshot.adc.is_adjacent_to(AdcCode::JIG_UART_OFF)
        && !(session.factory_mode && snapshot.adc == AdcCode::JIG_UART_ON)
}

/// Context-dependent identity rewrites
fn refine(kind: DeviceKind, session: &SessionState) -> DeviceKind {
    match kind {
        // JIG UART-off with VBUS is either the OTG test harness or a
        // foreign-ground supply; only the session can tell them apart.
        DeviceKind::JigUartOffVb => {
            if session.otg_test_mode && session.capabilities.supports(DeviceKind::Otg) {
                DeviceKind::JigUartOffVbOtg
            } else {
                DeviceKind::JigUartOffVbFg
            }
        }
        // A LAN hub whose upstream power drops momentarily reads as a
        // plain USB host; while a hub is attached, keep the hub identity.
        DeviceKind::Usb if session.current_device == DeviceKind::UsbLanhub => {
            info!("USB reading while LANHUB attached, keeping LANHUB identity");
            DeviceKind::UsbLanhub
        }
        other => other,
    }
}

/// Sampling mode to program after acting on a classification
///
/// Accessories that must be monitored while attached keep the ADC
/// always on; a JIG UART-off plug gets the slow pulse mode so the
/// settle bounce quiets down; everything else samples once per event.
pub fn recommended_sample_mode(
    classification: Classification,
    snapshot: &SignalSnapshot,
) -> AdcSampleMode {
    if let Classification::Attach(kind) = classification {
        if matches!(kind, DeviceKind::Otg | DeviceKind::UsbLanhub) || kind.is_smartdock_variant() {
            return AdcSampleMode::Continuous;
        }
    }
    if snapshot.adc == AdcCode::JIG_UART_OFF {
        AdcSampleMode::Pulse2s
    } else {
        AdcSampleMode::OneShot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CapabilitySet;
    use muic_protocol::ChargerType;

    fn session() -> SessionState {
        SessionState::new(CapabilitySet::all())
    }

    fn uart_off_vb() -> SignalSnapshot {
        SignalSnapshot {
            adc: AdcCode::JIG_UART_OFF,
            vbus_high: true,
            ..SignalSnapshot::open()
        }
    }

    #[test]
    fn open_connector_classifies_as_detach() {
        assert_eq!(
            classify(&SignalSnapshot::open(), &session()),
            Classification::Detach
        );
    }

    #[test]
    fn adjacent_bounce_ignored_while_jig_uart_attached() {
        let mut session = session();
        session.current_device = DeviceKind::JigUartOff;
        let snapshot = SignalSnapshot {
            adc: AdcCode::JIG_UART_ON,
            ..SignalSnapshot::open()
        };
        assert_eq!(classify(&snapshot, &session), Classification::Ignored);
        let snapshot = SignalSnapshot {
            adc: AdcCode::CEA936A_TYPE2_CHG,
            ..SignalSnapshot::open()
        };
        assert_eq!(classify(&snapshot, &session), Classification::Ignored);
    }

    #[test]
    fn factory_mode_lets_jig_uart_on_through_the_bounce_filter() {
        let mut session = session();
        session.current_device = DeviceKind::JigUartOff;
        session.factory_mode = true;
        let snapshot = SignalSnapshot {
            adc: AdcCode::JIG_UART_ON,
            ..SignalSnapshot::open()
        };
        assert_eq!(
            classify(&snapshot, &session),
            Classification::Attach(DeviceKind::JigUartOn)
        );
    }

    #[test]
    fn bounce_filter_only_applies_while_jig_uart_attached() {
        let snapshot = SignalSnapshot {
            adc: AdcCode::JIG_UART_ON,
            ..SignalSnapshot::open()
        };
        assert_eq!(
            classify(&snapshot, &session()),
            Classification::Attach(DeviceKind::JigUartOn)
        );
    }

    #[test]
    fn uart_off_vb_splits_on_otg_test_mode() {
        let mut session = session();
        assert_eq!(
            classify(&uart_off_vb(), &session),
            Classification::Attach(DeviceKind::JigUartOffVbFg)
        );
        session.otg_test_mode = true;
        assert_eq!(
            classify(&uart_off_vb(), &session),
            Classification::Attach(DeviceKind::JigUartOffVbOtg)
        );
    }

    #[test]
    fn uart_off_vb_without_otg_capability_stays_foreign_ground() {
        let mut caps = CapabilitySet::new();
        for kind in DeviceKind::ALL {
            if *kind != DeviceKind::Otg {
                caps.allow(*kind);
            }
        }
        let mut session = SessionState::new(caps);
        session.otg_test_mode = true;
        assert_eq!(
            classify(&uart_off_vb(), &session),
            Classification::Attach(DeviceKind::JigUartOffVbFg)
        );
    }

    #[test]
    fn usb_reading_keeps_lanhub_identity() {
        let mut session = session();
        session.current_device = DeviceKind::UsbLanhub;
        let snapshot = SignalSnapshot {
            adc: AdcCode::OPEN,
            vbus_high: true,
            charger_type: ChargerType::Usb,
            ..SignalSnapshot::open()
        };
        assert_eq!(
            classify(&snapshot, &session),
            Classification::Attach(DeviceKind::UsbLanhub)
        );
    }

    #[test]
    fn lanhub_reading_never_rewrites_to_usb() {
        let mut session = session();
        session.current_device = DeviceKind::Usb;
        let snapshot = SignalSnapshot {
            adc: AdcCode::USB_LANHUB,
            vbus_high: true,
            ..SignalSnapshot::open()
        };
        assert_eq!(
            classify(&snapshot, &session),
            Classification::Attach(DeviceKind::UsbLanhub)
        );
    }

    #[test]
    fn unsupported_with_vbus_degrades_to_charging_attach() {
        let mut session = SessionState::new(CapabilitySet::new());
        session.capabilities.allow(DeviceKind::Ta);
        let snapshot = SignalSnapshot {
            adc: AdcCode::DESKDOCK,
            vbus_high: true,
            charger_type: ChargerType::Dedicated,
            ..SignalSnapshot::open()
        };
        assert_eq!(
            classify(&snapshot, &session),
            Classification::Attach(DeviceKind::UnsupportedIdVb)
        );
    }

    #[test]
    fn unsupported_without_vbus_is_detach() {
        let session = SessionState::new(CapabilitySet::new());
        let snapshot = SignalSnapshot {
            adc: AdcCode::DESKDOCK,
            ..SignalSnapshot::open()
        };
        assert_eq!(classify(&snapshot, &session), Classification::Detach);
    }

    #[test]
    fn sample_mode_tracks_identity_and_adc() {
        let open = SignalSnapshot::open();
        assert_eq!(
            recommended_sample_mode(Classification::Attach(DeviceKind::Otg), &open),
            AdcSampleMode::Continuous
        );
        assert_eq!(
            recommended_sample_mode(Classification::Attach(DeviceKind::SmartdockUsb), &open),
            AdcSampleMode::Continuous
        );
        let uart_off = SignalSnapshot {
            adc: AdcCode::JIG_UART_OFF,
            ..SignalSnapshot::open()
        };
        assert_eq!(
            recommended_sample_mode(Classification::Attach(DeviceKind::JigUartOff), &uart_off),
            AdcSampleMode::Pulse2s
        );
        assert_eq!(
            recommended_sample_mode(Classification::Detach, &open),
            AdcSampleMode::OneShot
        );
    }
}
