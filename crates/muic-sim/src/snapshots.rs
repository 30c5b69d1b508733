//! Preset status snapshots for common accessories

use muic_protocol::{AdcCode, ChargerType, SignalSnapshot};

/// Empty connector
pub fn open() -> SignalSnapshot {
    SignalSnapshot::open()
}

/// USB host (SDP handshake)
pub fn usb() -> SignalSnapshot {
    SignalSnapshot {
        vbus_high: true,
        charger_type: ChargerType::Usb,
        ..SignalSnapshot::open()
    }
}

/// Charging downstream port
pub fn cdp() -> SignalSnapshot {
    SignalSnapshot {
        vbus_high: true,
        charger_type: ChargerType::Cdp,
        ..SignalSnapshot::open()
    }
}

/// Dedicated charger
pub fn dedicated_charger() -> SignalSnapshot {
    SignalSnapshot {
        vbus_high: true,
        charger_type: ChargerType::Dedicated,
        ..SignalSnapshot::open()
    }
}

/// Non-standard charger with the given handshake result
pub fn unofficial_charger(charger_type: ChargerType) -> SignalSnapshot {
    SignalSnapshot {
        vbus_high: true,
        charger_type,
        ..SignalSnapshot::open()
    }
}

/// OTG cable (ID pin grounded, no bus power)
pub fn otg() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::GND,
        ..SignalSnapshot::open()
    }
}

/// USB LAN hub
pub fn lanhub() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::USB_LANHUB,
        vbus_high: true,
        ..SignalSnapshot::open()
    }
}

/// Powered charging cable
pub fn charging_cable() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::CHARGING_CABLE,
        ..SignalSnapshot::open()
    }
}

/// Head-mounted display
pub fn hmt() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::HMT,
        vbus_high: true,
        ..SignalSnapshot::open()
    }
}

/// MHL adapter (1 Mohm ID signature)
pub fn mhl() -> SignalSnapshot {
    SignalSnapshot {
        adc1k: true,
        ..SignalSnapshot::open()
    }
}

/// Factory JIG, USB boot-on
pub fn jig_usb_on() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::JIG_USB_ON,
        vbus_high: true,
        ..SignalSnapshot::open()
    }
}

/// Factory JIG, UART boot-off, with or without bus power
pub fn jig_uart_off(vbus_high: bool) -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::JIG_UART_OFF,
        vbus_high,
        ..SignalSnapshot::open()
    }
}

/// Factory JIG, UART boot-on
pub fn jig_uart_on() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::JIG_UART_ON,
        ..SignalSnapshot::open()
    }
}

/// Smart dock, unpowered
pub fn smartdock() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::SMARTDOCK,
        ..SignalSnapshot::open()
    }
}

/// Smart dock with bus power and the given host-side handshake
///
/// `ChargerType::NoVoltage` is the powered dock alone, `Dedicated` and
/// `Usb` are the dock with a charger or host behind it.
pub fn smartdock_vb(charger_type: ChargerType) -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::SMARTDOCK,
        vbus_high: true,
        charger_type,
        ..SignalSnapshot::open()
    }
}

/// Desk dock, with or without bus power
pub fn deskdock(vbus_high: bool) -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::DESKDOCK,
        vbus_high,
        ..SignalSnapshot::open()
    }
}

/// Audio dock
pub fn audiodock() -> SignalSnapshot {
    SignalSnapshot {
        adc: AdcCode::AUDIODOCK,
        vbus_high: true,
        ..SignalSnapshot::open()
    }
}
