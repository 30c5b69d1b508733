//! Accessory device identities

/// Identity of the accessory attached to the connector
///
/// Closed enumeration: every value the classifier can resolve to is
/// listed here, and exactly one value is "current" in the session at
/// any time. `JigUartOffVb` is an intermediate identity; the
/// classifier always refines it into the OTG or foreign-ground variant
/// before it reaches the transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceKind {
    /// Nothing attached
    None,
    /// Detection has not run yet, or nothing matched
    Unknown,
    /// USB host (SDP)
    Usb,
    /// Charging downstream port
    Cdp,
    /// USB OTG cable (device acts as host)
    Otg,
    /// Dedicated travel adapter
    Ta,
    /// Charger with a non-standard handshake
    UnofficialTa,
    /// Unofficial resistance ID with no charger voltage
    UnofficialId,
    /// Unofficial resistance ID + dedicated charger
    UnofficialIdTa,
    /// Unofficial resistance ID + USB host
    UnofficialIdUsb,
    /// Unofficial resistance ID + CDP
    UnofficialIdCdp,
    /// Unofficial resistance ID + any non-standard charger
    UnofficialIdAny,
    /// Resistance ID not in the product's support list, but VBUS present
    UnsupportedIdVb,
    /// Unnamed resistance ID with VBUS present
    UndefinedCharging,
    /// Powered charging cable
    ChargingCable,
    /// Factory JIG, USB boot-on signature
    JigUsbOn,
    /// Factory JIG, UART boot-off signature
    JigUartOff,
    /// Factory JIG, UART boot-off with VBUS (ambiguous, refined by classifier)
    JigUartOffVb,
    /// JIG UART-off + VBUS while an OTG test is running
    JigUartOffVbOtg,
    /// JIG UART-off + VBUS from a foreign-ground supply
    JigUartOffVbFg,
    /// Factory JIG, UART boot-on signature
    JigUartOn,
    /// Desk dock
    Deskdock,
    /// Desk dock with VBUS
    DeskdockVb,
    /// Smart dock, unpowered
    Smartdock,
    /// Smart dock with VBUS
    SmartdockVb,
    /// Smart dock with a dedicated charger behind it
    SmartdockTa,
    /// Smart dock with a USB host behind it
    SmartdockUsb,
    /// MHL adapter (1 Mohm ID signature)
    Mhl,
    /// Head-mounted display
    Hmt,
    /// Audio dock
    Audiodock,
    /// Universal multimedia dock
    UniversalMmdock,
    /// USB LAN hub
    UsbLanhub,
    /// Carrier-specific accessory (classifiable, never configurable)
    VzwAccessory,
    /// Carrier-specific incompatible accessory
    VzwIncompatible,
    /// CEA-936A type-2 charger
    Type2Charger,
}

impl DeviceKind {
    /// Every identity, for capability-set and totality checks
    pub const ALL: &'static [DeviceKind] = &[
        DeviceKind::None,
        DeviceKind::Unknown,
        DeviceKind::Usb,
        DeviceKind::Cdp,
        DeviceKind::Otg,
        DeviceKind::Ta,
        DeviceKind::UnofficialTa,
        DeviceKind::UnofficialId,
        DeviceKind::UnofficialIdTa,
        DeviceKind::UnofficialIdUsb,
        DeviceKind::UnofficialIdCdp,
        DeviceKind::UnofficialIdAny,
        DeviceKind::UnsupportedIdVb,
        DeviceKind::UndefinedCharging,
        DeviceKind::ChargingCable,
        DeviceKind::JigUsbOn,
        DeviceKind::JigUartOff,
        DeviceKind::JigUartOffVb,
        DeviceKind::JigUartOffVbOtg,
        DeviceKind::JigUartOffVbFg,
        DeviceKind::JigUartOn,
        DeviceKind::Deskdock,
        DeviceKind::DeskdockVb,
        DeviceKind::Smartdock,
        DeviceKind::SmartdockVb,
        DeviceKind::SmartdockTa,
        DeviceKind::SmartdockUsb,
        DeviceKind::Mhl,
        DeviceKind::Hmt,
        DeviceKind::Audiodock,
        DeviceKind::UniversalMmdock,
        DeviceKind::UsbLanhub,
        DeviceKind::VzwAccessory,
        DeviceKind::VzwIncompatible,
        DeviceKind::Type2Charger,
    ];

    /// Returns a human-readable name for the identity
    pub fn name(&self) -> &'static str {
        match self {
            DeviceKind::None => "None",
            DeviceKind::Unknown => "Unknown",
            DeviceKind::Usb => "USB",
            DeviceKind::Cdp => "CDP",
            DeviceKind::Otg => "OTG",
            DeviceKind::Ta => "TA",
            DeviceKind::UnofficialTa => "unofficial TA",
            DeviceKind::UnofficialId => "Unofficial ID",
            DeviceKind::UnofficialIdTa => "Unofficial ID + TA",
            DeviceKind::UnofficialIdUsb => "Unofficial ID + USB",
            DeviceKind::UnofficialIdCdp => "Unofficial ID + CDP",
            DeviceKind::UnofficialIdAny => "Unofficial ID + ANY TA",
            DeviceKind::UnsupportedIdVb => "Unsupported ID + VB",
            DeviceKind::UndefinedCharging => "Undefined Charging",
            DeviceKind::ChargingCable => "Charging Cable",
            DeviceKind::JigUsbOn => "Jig USB On",
            DeviceKind::JigUartOff => "Jig UART Off",
            DeviceKind::JigUartOffVb => "Jig UART Off + VB",
            DeviceKind::JigUartOffVbOtg => "Jig UART Off + VB (OTG)",
            DeviceKind::JigUartOffVbFg => "Jig UART Off + VB (FG)",
            DeviceKind::JigUartOn => "Jig UART On",
            DeviceKind::Deskdock => "Deskdock",
            DeviceKind::DeskdockVb => "Deskdock + VB",
            DeviceKind::Smartdock => "Smartdock",
            DeviceKind::SmartdockVb => "Smartdock + VB",
            DeviceKind::SmartdockTa => "Smartdock + TA",
            DeviceKind::SmartdockUsb => "Smartdock + USB",
            DeviceKind::Mhl => "MHL",
            DeviceKind::Hmt => "HMT",
            DeviceKind::Audiodock => "Audiodock",
            DeviceKind::UniversalMmdock => "Universal Multimedia dock",
            DeviceKind::UsbLanhub => "USB LANHUB",
            DeviceKind::VzwAccessory => "VZW Accessory",
            DeviceKind::VzwIncompatible => "VZW Incompatible",
            DeviceKind::Type2Charger => "TYPE2 Charger",
        }
    }

    /// Whether this identity is one of the smart dock variants
    pub fn is_smartdock_variant(&self) -> bool {
        matches!(
            self,
            DeviceKind::Smartdock
                | DeviceKind::SmartdockVb
                | DeviceKind::SmartdockTa
                | DeviceKind::SmartdockUsb
        )
    }

    /// Accessories that draw or supply power over the data path and must
    /// not run charger detection while attached
    pub fn is_charging_accessory(&self) -> bool {
        matches!(
            self,
            DeviceKind::Otg
                | DeviceKind::UsbLanhub
                | DeviceKind::ChargingCable
                | DeviceKind::Hmt
                | DeviceKind::Usb
                | DeviceKind::Cdp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_list_has_no_duplicates() {
        let set: HashSet<DeviceKind> = DeviceKind::ALL.iter().copied().collect();
        assert_eq!(set.len(), DeviceKind::ALL.len());
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = DeviceKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), DeviceKind::ALL.len());
    }

    #[test]
    fn smartdock_grouping() {
        assert!(DeviceKind::SmartdockTa.is_smartdock_variant());
        assert!(!DeviceKind::Deskdock.is_smartdock_variant());
    }
}
