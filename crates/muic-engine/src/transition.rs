//! Transition exception policies
//!
//! Most transitions follow one default shape; the accessory pairs that
//! deviate from it are captured in two policy tables, one for plain
//! detach and one for attach-over-attach supersede. Keeping the
//! exceptions as data keeps the transition engine itself a straight
//! sequence of steps.

use muic_protocol::DeviceKind;
use tracing::warn;

/// How to handle a plain detach of the current accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetachPolicy {
    /// Emit a `Detached` notification for the outgoing identity
    pub notify: bool,
    /// Also emit a logical detach of the dock layer
    pub logical: bool,
    /// Re-enable the charger-detection engine that the attach disabled
    pub reenable_charger_detect: bool,
}

/// Detach policy for the given outgoing identity
pub fn detach_policy(current: DeviceKind) -> DetachPolicy {
    // Charging accessories disabled charger detection on attach;
    // re-enabling it restarts the handshake, which re-announces whatever
    // is really there, so their plain detach notification is suppressed.
    // CDP is the exception: its handshake result does not re-announce,
    // so the detach still notifies.
    if current.is_charging_accessory() {
        return DetachPolicy {
            notify: current == DeviceKind::Cdp,
            logical: false,
            reenable_charger_detect: true,
        };
    }
    match current {
        // Never announced on attach, so nothing to retract.
        DeviceKind::UnofficialId | DeviceKind::Smartdock => DetachPolicy {
            notify: false,
            logical: false,
            reenable_charger_detect: false,
        },
        // Only the dock layer was announced.
        DeviceKind::SmartdockVb => DetachPolicy {
            notify: false,
            logical: true,
            reenable_charger_detect: false,
        },
        // Both the host-side identity and the dock layer go away.
        DeviceKind::SmartdockTa | DeviceKind::SmartdockUsb => DetachPolicy {
            notify: true,
            logical: true,
            reenable_charger_detect: false,
        },
        _ => DetachPolicy {
            notify: true,
            logical: false,
            reenable_charger_detect: false,
        },
    }
}

/// How to retire the current accessory when a new one supersedes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupersedePolicy {
    /// Emit a `Detached` notification for the outgoing identity
    pub notify: bool,
    /// Also emit a logical detach of the dock layer
    pub logical: bool,
    /// Open the data path before the new accessory configures it
    pub force_path_open: bool,
    /// Re-enable accessory detection before the new accessory attaches
    pub enable_accessory_detect: bool,
}

impl SupersedePolicy {
    const DEFAULT: SupersedePolicy = SupersedePolicy {
        notify: true,
        logical: false,
        force_path_open: true,
        enable_accessory_detect: true,
    };
}

/// Supersede policy for replacing `current` with `incoming`
pub fn supersede_policy(current: DeviceKind, incoming: DeviceKind) -> SupersedePolicy {
    match current {
        // Nothing attached, nothing to retire.
        DeviceKind::None => SupersedePolicy {
            notify: false,
            force_path_open: false,
            ..SupersedePolicy::DEFAULT
        },
        // OTG and LAN hub share a GND-class ID signature and flip into
        // each other when hub power comes and goes. The path and the
        // detection setup are already correct, only the identity moves.
        DeviceKind::Otg if incoming == DeviceKind::UsbLanhub => SupersedePolicy {
            notify: false,
            force_path_open: false,
            enable_accessory_detect: false,
            ..SupersedePolicy::DEFAULT
        },
        DeviceKind::UsbLanhub if incoming == DeviceKind::Otg => SupersedePolicy {
            force_path_open: false,
            enable_accessory_detect: false,
            ..SupersedePolicy::DEFAULT
        },
        // Never announced on attach.
        DeviceKind::UnofficialId => SupersedePolicy {
            notify: false,
            ..SupersedePolicy::DEFAULT
        },
        // Anything growing out of an unpowered smart dock is an
        // attribute refinement, not a device change.
        DeviceKind::Smartdock => SupersedePolicy {
            notify: false,
            logical: false,
            force_path_open: false,
            enable_accessory_detect: false,
        },
        // JIG UART variants trade places while the plug stays seated;
        // dropping the UART path would cut an active factory console.
        DeviceKind::JigUartOff
            if matches!(
                incoming,
                DeviceKind::JigUartOffVbOtg | DeviceKind::JigUartOffVbFg | DeviceKind::JigUartOn
            ) =>
        {
            SupersedePolicy {
                force_path_open: false,
                ..SupersedePolicy::DEFAULT
            }
        }
        DeviceKind::JigUartOffVbOtg | DeviceKind::JigUartOffVbFg
            if incoming == DeviceKind::JigUartOff =>
        {
            SupersedePolicy {
                force_path_open: false,
                ..SupersedePolicy::DEFAULT
            }
        }
        DeviceKind::JigUartOn if incoming == DeviceKind::JigUartOff => SupersedePolicy {
            force_path_open: false,
            ..SupersedePolicy::DEFAULT
        },
        // Pre-detection state retires like any other identity, except a
        // JIG seated across a reboot keeps the path the boot chain
        // already set up.
        DeviceKind::Unknown => SupersedePolicy {
            force_path_open: incoming != DeviceKind::JigUartOff,
            ..SupersedePolicy::DEFAULT
        },
        // Desk dock gaining or losing VBUS is not a new accessory.
        DeviceKind::Deskdock if incoming == DeviceKind::DeskdockVb => SupersedePolicy {
            notify: false,
            logical: false,
            force_path_open: false,
            enable_accessory_detect: false,
        },
        DeviceKind::DeskdockVb if incoming == DeviceKind::Deskdock => SupersedePolicy {
            notify: false,
            logical: false,
            force_path_open: false,
            enable_accessory_detect: false,
        },
        // Powered smart dock gaining a host keeps the dock layer.
        DeviceKind::SmartdockVb => {
            if matches!(incoming, DeviceKind::SmartdockTa | DeviceKind::SmartdockUsb) {
                SupersedePolicy {
                    notify: false,
                    logical: false,
                    force_path_open: false,
                    enable_accessory_detect: false,
                }
            } else {
                SupersedePolicy {
                    logical: true,
                    ..SupersedePolicy::DEFAULT
                }
            }
        }
        // Host leaving the dock drops only the host identity unless the
        // dock itself goes with it.
        DeviceKind::SmartdockTa | DeviceKind::SmartdockUsb => SupersedePolicy {
            logical: incoming != DeviceKind::SmartdockVb,
            ..SupersedePolicy::DEFAULT
        },
        DeviceKind::VzwAccessory
        | DeviceKind::VzwIncompatible
        | DeviceKind::Type2Charger
        | DeviceKind::JigUartOffVb => {
            warn!(?current, "superseding an identity that should never be current");
            SupersedePolicy {
                notify: false,
                ..SupersedePolicy::DEFAULT
            }
        }
        _ => SupersedePolicy::DEFAULT,
    }
}
