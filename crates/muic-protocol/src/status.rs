//! Raw status vocabulary and hardware control vocabulary
//!
//! Field values as reported by the chip's status registers, plus the
//! small enums shared with the hardware control seam (path routing and
//! ADC sampling modes).

/// 5-bit quantized resistance-ID reading from the accessory ID pin
///
/// Each accessory class presents a known pull resistor; the chip
/// quantizes it into one of 32 codes. Codes outside the named set are
/// legal readings (they classify as "undefined charging" when VBUS is
/// present).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdcCode(u8);

impl AdcCode {
    /// Status register mask for the ADC field
    pub const MASK: u8 = 0x1f;

    pub const GND: AdcCode = AdcCode(0x00);
    pub const SEND_END: AdcCode = AdcCode(0x01);
    pub const REMOTE_S12: AdcCode = AdcCode(0x0d);
    pub const RESERVED_VZW: AdcCode = AdcCode(0x0e);
    pub const INCOMPATIBLE_VZW: AdcCode = AdcCode(0x0f);
    pub const SMARTDOCK: AdcCode = AdcCode(0x10);
    pub const HMT: AdcCode = AdcCode(0x11);
    pub const AUDIODOCK: AdcCode = AdcCode(0x12);
    pub const USB_LANHUB: AdcCode = AdcCode(0x13);
    pub const CHARGING_CABLE: AdcCode = AdcCode(0x14);
    pub const UNIVERSAL_MMDOCK: AdcCode = AdcCode(0x15);
    pub const UART_CABLE: AdcCode = AdcCode(0x16);
    pub const CEA936A_TYPE1_CHG: AdcCode = AdcCode(0x17);
    pub const JIG_USB_OFF: AdcCode = AdcCode(0x18);
    pub const JIG_USB_ON: AdcCode = AdcCode(0x19);
    pub const DESKDOCK: AdcCode = AdcCode(0x1a);
    pub const CEA936A_TYPE2_CHG: AdcCode = AdcCode(0x1b);
    pub const JIG_UART_OFF: AdcCode = AdcCode(0x1c);
    pub const JIG_UART_ON: AdcCode = AdcCode(0x1d);
    pub const AUDIOMODE_W_REMOTE: AdcCode = AdcCode(0x1e);
    pub const OPEN: AdcCode = AdcCode(0x1f);

    /// Create a code from a raw register value (masked to 5 bits)
    pub const fn new(raw: u8) -> Self {
        AdcCode(raw & Self::MASK)
    }

    /// Get the raw 5-bit value
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether this code is exactly one quantization step away from `other`
    ///
    /// Adjacent codes show up transiently while a factory JIG settles.
    pub const fn is_adjacent_to(self, other: AdcCode) -> bool {
        self.0 == other.0.wrapping_add(1) || self.0.wrapping_add(1) == other.0
    }
}

/// Result of the charger-detection handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChargerType {
    /// No voltage seen on the charger detection pins
    NoVoltage = 0x00,
    /// USB host / SDP
    Usb = 0x01,
    /// Charging downstream port
    Cdp = 0x02,
    /// Dedicated charger (D+/D- shorted)
    Dedicated = 0x03,
    /// Apple-style 500 mA charger
    Ma500 = 0x04,
    /// Apple-style 1 A charger
    Ma1000 = 0x05,
    /// Reserved handshake result
    Reserved = 0x06,
    /// Special 3.3 V bias charger
    Special3_3V = 0x07,
}

impl ChargerType {
    /// Decode from the 3-bit status register field
    pub const fn from_raw(raw: u8) -> ChargerType {
        match raw & 0x07 {
            0x00 => ChargerType::NoVoltage,
            0x01 => ChargerType::Usb,
            0x02 => ChargerType::Cdp,
            0x03 => ChargerType::Dedicated,
            0x04 => ChargerType::Ma500,
            0x05 => ChargerType::Ma1000,
            0x06 => ChargerType::Reserved,
            _ => ChargerType::Special3_3V,
        }
    }

    /// Returns a human-readable name for the handshake result
    pub fn name(&self) -> &'static str {
        match self {
            ChargerType::NoVoltage => "No Voltage",
            ChargerType::Usb => "USB",
            ChargerType::Cdp => "CDP",
            ChargerType::Dedicated => "Dedicated Charger",
            ChargerType::Ma500 => "500mA Charger",
            ChargerType::Ma1000 => "1A Charger",
            ChargerType::Reserved => "Reserved",
            ChargerType::Special3_3V => "Special 3.3V Charger",
        }
    }
}

/// One parsed status reading, produced per detection event
///
/// The register-read collaborator decodes the two status registers into
/// this struct; the classifier consumes it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalSnapshot {
    /// 1 Mohm ID resistance detected (MHL signature)
    pub adc1k: bool,
    /// The chip flagged the ADC reading as unstable
    pub adc_error: bool,
    /// Quantized resistance-ID code
    pub adc: AdcCode,
    /// VBUS power present
    pub vbus_high: bool,
    /// Charger-detection handshake still in progress
    pub charger_detect_running: bool,
    /// Charger-detection handshake result
    pub charger_type: ChargerType,
}

impl SignalSnapshot {
    /// Snapshot for an empty connector: ID pin open, no VBUS
    pub const fn open() -> Self {
        SignalSnapshot {
            adc1k: false,
            adc_error: false,
            adc: AdcCode::OPEN,
            vbus_high: false,
            charger_detect_running: false,
            charger_type: ChargerType::NoVoltage,
        }
    }
}

impl Default for SignalSnapshot {
    fn default() -> Self {
        Self::open()
    }
}

/// Electrical routing of the connector data lines
///
/// AP is the application processor, CP the modem processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathMode {
    /// Data lines disconnected (idle)
    Open,
    /// D+/D- routed to the AP USB block
    Usb,
    /// D+/D- routed to the CP USB block
    UsbCp,
    /// Data lines routed to the AP UART
    Uart,
    /// Data lines routed to the CP UART
    UartCp,
}

impl PathMode {
    /// Returns a human-readable name for the path
    pub fn name(&self) -> &'static str {
        match self {
            PathMode::Open => "OPEN",
            PathMode::Usb => "USB (AP)",
            PathMode::UsbCp => "USB (CP)",
            PathMode::Uart => "UART (AP)",
            PathMode::UartCp => "UART (CP)",
        }
    }
}

/// ADC sampling mode of the detection chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdcSampleMode {
    /// Always-on sampling, for accessories that must be monitored while attached
    Continuous,
    /// Always-on sampling with the 1 Mohm monitor enabled
    ContinuousMonitor,
    /// Single conversion per detection event
    OneShot,
    /// One conversion every two seconds
    Pulse2s,
}

impl AdcSampleMode {
    /// Returns a human-readable name for the mode
    pub fn name(&self) -> &'static str {
        match self {
            AdcSampleMode::Continuous => "Always ON",
            AdcSampleMode::ContinuousMonitor => "Always ON + 1Mohm monitor",
            AdcSampleMode::OneShot => "One Shot",
            AdcSampleMode::Pulse2s => "2s Pulse",
        }
    }
}

/// Destination processor for a routed USB or UART path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteTarget {
    /// Application processor
    Ap,
    /// Modem (communication) processor
    Cp,
}
