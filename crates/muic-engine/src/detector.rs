//! The transition engine
//!
//! Owns the hardware control handle, the session, and the notification
//! buffer. Each detection cycle feeds one snapshot through the
//! classifier, retires the previous accessory per the supersede or
//! detach policy, configures the chip for the new one, and buffers the
//! notifications for the caller to drain.
//!
//! Control writes are best effort: a failed I2C write is logged and the
//! engine carries on, because the decision about what is attached was
//! made from the status registers and rolling it back would desync the
//! session from the connector.

use muic_protocol::{rule_for_kind, AdcCode, DeviceKind, PathMode, RouteTarget, SignalSnapshot};
use tracing::{debug, info, warn};

use crate::classify::{classify, recommended_sample_mode, Classification};
use crate::error::MuicError;
use crate::events::Notification;
use crate::hal::PathControl;
use crate::session::{CapabilitySet, SessionState};
use crate::transition::{detach_policy, supersede_policy};

/// Product routing policy for the switched data paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingConfig {
    /// Processor that owns the UART path
    pub uart: RouteTarget,
    /// Processor that owns the USB path
    pub usb: RouteTarget,
    /// Whether the UART path may be closed at all (water-damage fuse
    /// products ship with it forced off)
    pub uart_enabled: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            uart: RouteTarget::Ap,
            usb: RouteTarget::Ap,
            uart_enabled: true,
        }
    }
}

/// What one detection cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An accessory is now attached (possibly the same one as before)
    Attached(DeviceKind),
    /// Nothing is attached
    Detached,
    /// The snapshot was spurious and no state changed
    Ignored,
}

/// Accessory detection engine
pub struct Detector<H: PathControl> {
    hal: H,
    session: SessionState,
    routing: RoutingConfig,
    notifications: Vec<Notification>,
}

impl<H: PathControl> Detector<H> {
    /// Create a detector with default routing (everything to the AP)
    pub fn new(hal: H, capabilities: CapabilitySet) -> Self {
        Self::with_routing(hal, capabilities, RoutingConfig::default())
    }

    /// Create a detector with an explicit routing policy
    pub fn with_routing(hal: H, capabilities: CapabilitySet, routing: RoutingConfig) -> Self {
        Detector {
            hal,
            session: SessionState::new(capabilities),
            routing,
            notifications: Vec::new(),
        }
    }

    /// Identity currently considered attached
    pub fn current_device(&self) -> DeviceKind {
        self.session.current_device
    }

    /// The session state
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The hardware control handle
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// Mutable access to the hardware control handle
    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    /// Set whether a factory OTG test is running
    pub fn set_otg_test_mode(&mut self, enabled: bool) {
        info!(enabled, "OTG test mode");
        self.session.otg_test_mode = enabled;
    }

    /// Set whether the device is booted in factory mode
    pub fn set_factory_mode(&mut self, enabled: bool) {
        info!(enabled, "factory mode");
        self.session.factory_mode = enabled;
    }

    /// Set whether flagged ADC readings should be kept
    pub fn set_ignore_adc_error(&mut self, enabled: bool) {
        info!(enabled, "ignore ADC error");
        self.session.ignore_adc_error = enabled;
    }

    /// Change the UART route; re-programs the path if a UART accessory
    /// is attached right now
    pub fn set_uart_route(&mut self, target: RouteTarget) {
        info!(?target, "UART route");
        self.routing.uart = target;
        if matches!(
            self.session.current_device,
            DeviceKind::JigUartOff
                | DeviceKind::JigUartOffVbOtg
                | DeviceKind::JigUartOffVbFg
                | DeviceKind::JigUartOn
        ) {
            self.attach_uart_path();
        }
    }

    /// Change the USB route (takes effect on the next USB attach)
    pub fn set_usb_route(&mut self, target: RouteTarget) {
        info!(?target, "USB route");
        self.routing.usb = target;
    }

    /// Allow or forbid closing the UART path
    pub fn set_uart_enabled(&mut self, enabled: bool) {
        info!(enabled, "UART path");
        self.routing.uart_enabled = enabled;
    }

    /// Take the notifications buffered since the last drain
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Run one detection cycle over a snapshot
    pub fn handle_snapshot(&mut self, snapshot: &SignalSnapshot) -> Result<Outcome, MuicError> {
        let classification = classify(snapshot, &self.session);
        if classification == Classification::Ignored {
            return Ok(Outcome::Ignored);
        }
        let mode = recommended_sample_mode(classification, snapshot);
        if let Err(err) = self.hal.set_adc_sample_mode(mode) {
            warn!(%err, mode = mode.name(), "sample mode write failed");
        }
        match classification {
            Classification::Attach(kind) => self.handle_attach(kind, snapshot),
            Classification::Detach => self.handle_detach(),
            Classification::Ignored => Ok(Outcome::Ignored),
        }
    }

    /// Detach whatever is attached and return the chip to idle
    pub fn handle_detach(&mut self) -> Result<Outcome, MuicError> {
        let current = self.session.current_device;
        if current == DeviceKind::None {
            debug!("detach with nothing attached");
            return Ok(Outcome::Detached);
        }
        info!(device = current.name(), "detach");

        self.try_enable_accessory_detect(true);

        let policy = detach_policy(current);
        if policy.notify {
            self.notifications.push(Notification::Detached(current));
        }
        if policy.logical {
            self.notifications
                .push(Notification::LogicallyDetached(DeviceKind::SmartdockVb));
        }
        if policy.reenable_charger_detect {
            self.try_enable_charger_detect(true);
        }

        self.try_set_path(PathMode::Open);
        self.session.current_device = DeviceKind::None;
        Ok(Outcome::Detached)
    }

    /// Attach `new`, retiring the current accessory first if necessary
    pub fn handle_attach(
        &mut self,
        new: DeviceKind,
        snapshot: &SignalSnapshot,
    ) -> Result<Outcome, MuicError> {
        let current = self.session.current_device;
        if current == new {
            debug!(device = new.name(), "already attached");
            return Ok(Outcome::Attached(new));
        }
        info!(from = current.name(), to = new.name(), "attach");

        self.retire_current(new, snapshot);

        // Dock-layer bookkeeping: `logical` switches the main
        // notification to the logical variant, `announce_dock` prefixes
        // it with the dock layer appearing.
        let mut logical = false;
        let mut announce_dock = false;

        match new {
            DeviceKind::Otg | DeviceKind::UsbLanhub | DeviceKind::ChargingCable | DeviceKind::Hmt => {
                self.apply_rule_path(new)?;
                self.try_enable_charger_detect(false);
            }
            DeviceKind::Usb | DeviceKind::Cdp => {
                self.attach_usb_path();
                self.try_enable_charger_detect(false);
            }
            DeviceKind::JigUsbOn | DeviceKind::UnofficialIdUsb | DeviceKind::UnofficialIdCdp => {
                self.attach_usb_path();
            }
            DeviceKind::JigUartOff
            | DeviceKind::JigUartOffVbOtg
            | DeviceKind::JigUartOffVbFg => {
                self.attach_uart_path();
            }
            DeviceKind::JigUartOn => {
                // Only a promotion from an established factory UART
                // session is real; anything else is line noise.
                if !(self.session.factory_mode && current == DeviceKind::JigUartOff) {
                    warn!("JIG UART On outside a factory UART session, dropping");
                    return Ok(Outcome::Ignored);
                }
                self.attach_uart_path();
            }
            DeviceKind::Ta
            | DeviceKind::UnofficialTa
            | DeviceKind::UnofficialIdTa
            | DeviceKind::UnofficialIdAny
            | DeviceKind::UndefinedCharging
            | DeviceKind::Mhl
            | DeviceKind::Audiodock
            | DeviceKind::UniversalMmdock => {
                self.apply_rule_path(new)?;
            }
            DeviceKind::UnofficialId => {
                // Holds an unknown pull resistor against the ID pin;
                // keep sampling off so it cannot flood us with readings.
                self.try_enable_accessory_detect(false);
                self.session.current_device = new;
                return Ok(Outcome::Attached(new));
            }
            DeviceKind::Smartdock => {
                // Unpowered dock, nothing to announce until VBUS shows up.
                self.apply_rule_path(new)?;
                self.session.current_device = new;
                return Ok(Outcome::Attached(new));
            }
            DeviceKind::SmartdockVb => {
                logical = true;
                self.apply_rule_path(new)?;
            }
            DeviceKind::SmartdockTa | DeviceKind::SmartdockUsb => {
                logical = true;
                announce_dock = current != DeviceKind::SmartdockVb;
                self.apply_rule_path(new)?;
            }
            DeviceKind::Deskdock => {
                logical = current == DeviceKind::DeskdockVb;
                self.apply_rule_path(new)?;
            }
            DeviceKind::DeskdockVb => {
                logical = current == DeviceKind::Deskdock;
                self.apply_rule_path(new)?;
            }
            DeviceKind::UnsupportedIdVb => {
                self.try_set_path(PathMode::Open);
            }
            _ => return Err(MuicError::UnsupportedDevice(new)),
        }

        if announce_dock {
            self.notifications
                .push(Notification::LogicallyAttached(DeviceKind::SmartdockVb));
        }
        self.notifications.push(if logical {
            Notification::LogicallyAttached(new)
        } else {
            Notification::Attached(new)
        });
        self.session.current_device = new;
        Ok(Outcome::Attached(new))
    }

    /// Retire the current accessory per the supersede policy
    fn retire_current(&mut self, incoming: DeviceKind, snapshot: &SignalSnapshot) {
        let current = self.session.current_device;
        let policy = supersede_policy(current, incoming);
        if policy.notify {
            self.notifications.push(Notification::Detached(current));
        }
        if policy.logical {
            self.notifications
                .push(Notification::LogicallyDetached(DeviceKind::SmartdockVb));
        }
        if policy.enable_accessory_detect {
            // A JIG USB-off plug with VBUS is the factory charging rig;
            // re-arming detection there makes the line chatter.
            if snapshot.adc == AdcCode::JIG_USB_OFF && snapshot.vbus_high {
                debug!("factory charging signature, leaving accessory detect alone");
            } else {
                self.try_enable_accessory_detect(true);
            }
        }
        if policy.force_path_open {
            self.try_set_path(PathMode::Open);
        }
    }

    fn apply_rule_path(&mut self, kind: DeviceKind) -> Result<(), MuicError> {
        let rule = rule_for_kind(kind).ok_or(MuicError::UnsupportedDevice(kind))?;
        self.try_set_path(rule.path);
        Ok(())
    }

    fn attach_usb_path(&mut self) {
        let path = match self.routing.usb {
            RouteTarget::Ap => PathMode::Usb,
            RouteTarget::Cp => PathMode::UsbCp,
        };
        self.try_set_path(path);
    }

    fn attach_uart_path(&mut self) {
        if !self.routing.uart_enabled {
            info!("UART path disabled by product policy, leaving open");
            self.try_set_path(PathMode::Open);
            return;
        }
        let path = match self.routing.uart {
            RouteTarget::Ap => PathMode::Uart,
            RouteTarget::Cp => PathMode::UartCp,
        };
        self.try_set_path(path);
    }

    fn try_set_path(&mut self, path: PathMode) {
        if let Err(err) = self.hal.set_path(path) {
            warn!(%err, path = path.name(), "path write failed");
        }
    }

    fn try_enable_charger_detect(&mut self, enabled: bool) {
        if let Err(err) = self.hal.enable_charger_detect(enabled) {
            warn!(%err, enabled, "charger detect write failed");
        }
    }

    fn try_enable_accessory_detect(&mut self, enabled: bool) {
        if let Err(err) = self.hal.enable_accessory_detect(enabled) {
            warn!(%err, enabled, "accessory detect write failed");
        }
    }
}
