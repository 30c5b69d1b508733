//! The classification rule table
//!
//! An ordered, first-match-wins table mapping snapshot field patterns
//! to candidate device identities. Order is significant: more specific
//! rules precede wildcard rules that could also match the same
//! snapshot (the MHL row must stay first, the undefined-charging row
//! must follow every named VBUS-high row it would otherwise shadow).

use tracing::trace;

use crate::device::DeviceKind;
use crate::pattern::{AdcPattern, ChargerPattern, DetectRunPattern, VbusPattern};
use crate::status::{AdcCode, ChargerType, PathMode, SignalSnapshot};

/// One row of the classification table
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Required value of the 1 Mohm ID bit (bitwise equality)
    pub adc1k: bool,
    /// Required value of the ADC-error bit (bitwise equality)
    pub adc_error: bool,
    /// Pattern over the ADC code
    pub adc: AdcPattern,
    /// Pattern over VBUS presence
    pub vbus: VbusPattern,
    /// Pattern over the charger-detect-running bit
    pub detect_run: DetectRunPattern,
    /// Pattern over the charger handshake result
    pub charger: ChargerPattern,
    /// Data-line path to program when this identity attaches
    pub path: PathMode,
    /// Display name, also used to key the product capability list
    pub name: &'static str,
    /// Candidate identity this row resolves to
    pub kind: DeviceKind,
}

impl ClassificationRule {
    /// Whether every field of `snapshot` satisfies this rule
    pub fn matches(&self, snapshot: &SignalSnapshot) -> bool {
        let matched = self.adc1k == snapshot.adc1k
            && self.adc_error == snapshot.adc_error
            && self.adc.matches(snapshot.adc)
            && self.vbus.matches(snapshot.vbus_high)
            && self.detect_run.matches(snapshot.charger_detect_running)
            && self.charger.matches(snapshot.charger_type);
        trace!(rule = self.name, matched, "rule evaluated");
        matched
    }
}

/// The classification table, in match priority order
pub static RULE_TABLE: &[ClassificationRule] = &[
    ClassificationRule {
        adc1k: true,
        adc_error: false,
        adc: AdcPattern::Any,
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Open,
        name: "MHL",
        kind: DeviceKind::Mhl,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::GND),
        vbus: VbusPattern::Low,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Any,
        path: PathMode::Usb,
        name: "OTG",
        kind: DeviceKind::Otg,
    },
    // OTG keeps its charging pump running, which raises VBUS on our own
    // connector; without this row that reading would look like a charger.
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::GND),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Usb,
        name: "OTG charging pump (vbvolt)",
        kind: DeviceKind::Otg,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::CHARGING_CABLE),
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Usb,
        name: "Charging Cable",
        kind: DeviceKind::ChargingCable,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::JIG_USB_ON),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Usb,
        name: "Jig USB On",
        kind: DeviceKind::JigUsbOn,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::JIG_UART_OFF),
        vbus: VbusPattern::Low,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Uart,
        name: "Jig UART Off",
        kind: DeviceKind::JigUartOff,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::JIG_UART_OFF),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Uart,
        name: "Jig UART Off + VB",
        kind: DeviceKind::JigUartOffVb,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::JIG_UART_ON),
        vbus: VbusPattern::Low,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Uart,
        name: "Jig UART On",
        kind: DeviceKind::JigUartOn,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::OPEN),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Dedicated),
        path: PathMode::Open,
        name: "TA",
        kind: DeviceKind::Ta,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::OPEN),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Unofficial,
        path: PathMode::Open,
        name: "unofficial TA",
        kind: DeviceKind::UnofficialTa,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::OPEN),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Usb),
        path: PathMode::Usb,
        name: "USB",
        kind: DeviceKind::Usb,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::OPEN),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Cdp),
        path: PathMode::Usb,
        name: "CDP",
        kind: DeviceKind::Cdp,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::JIG_USB_OFF),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Open,
        name: "Unofficial ID",
        kind: DeviceKind::UnofficialId,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Combined219,
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Dedicated),
        path: PathMode::Open,
        name: "Unofficial ID + TA",
        kind: DeviceKind::UnofficialIdTa,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Combined219,
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Cdp),
        path: PathMode::Open,
        name: "Unofficial ID + CDP",
        kind: DeviceKind::UnofficialIdCdp,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Combined219,
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Unofficial,
        path: PathMode::Open,
        name: "Unofficial ID + ANY TA",
        kind: DeviceKind::UnofficialIdAny,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Combined219,
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Usb),
        path: PathMode::Open,
        name: "Unofficial ID + USB",
        kind: DeviceKind::UnofficialIdUsb,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::OPEN),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Dedicated),
        path: PathMode::Open,
        name: "TA or AFC",
        kind: DeviceKind::Ta,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Undefined,
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Open,
        name: "Undefined Charging",
        kind: DeviceKind::UndefinedCharging,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::DESKDOCK),
        vbus: VbusPattern::Low,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Open,
        name: "Deskdock",
        kind: DeviceKind::Deskdock,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::DESKDOCK),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Open,
        name: "Deskdock + VB",
        kind: DeviceKind::DeskdockVb,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::SMARTDOCK),
        vbus: VbusPattern::Low,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Open,
        name: "Smartdock",
        kind: DeviceKind::Smartdock,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::SMARTDOCK),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Exact(ChargerType::NoVoltage),
        path: PathMode::Open,
        name: "Smartdock + VB",
        kind: DeviceKind::SmartdockVb,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::SMARTDOCK),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Dedicated),
        path: PathMode::Usb,
        name: "Smartdock + TA",
        kind: DeviceKind::SmartdockTa,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::SMARTDOCK),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Exact(ChargerType::Usb),
        path: PathMode::Usb,
        name: "Smartdock + USB",
        kind: DeviceKind::SmartdockUsb,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::AUDIODOCK),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Usb,
        name: "Audiodock",
        kind: DeviceKind::Audiodock,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::HMT),
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Any,
        path: PathMode::Usb,
        name: "HMT",
        kind: DeviceKind::Hmt,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::UNIVERSAL_MMDOCK),
        vbus: VbusPattern::High,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Usb,
        name: "Universal Multimedia dock",
        kind: DeviceKind::UniversalMmdock,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::RESERVED_VZW),
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Open,
        name: "VZW Accessory",
        kind: DeviceKind::VzwAccessory,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::INCOMPATIBLE_VZW),
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Open,
        name: "VZW Incompatible",
        kind: DeviceKind::VzwIncompatible,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::USB_LANHUB),
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Stopped,
        charger: ChargerPattern::Any,
        path: PathMode::Usb,
        name: "USB LANHUB",
        kind: DeviceKind::UsbLanhub,
    },
    ClassificationRule {
        adc1k: false,
        adc_error: false,
        adc: AdcPattern::Exact(AdcCode::CEA936A_TYPE2_CHG),
        vbus: VbusPattern::Any,
        detect_run: DetectRunPattern::Any,
        charger: ChargerPattern::Any,
        path: PathMode::Open,
        name: "TYPE2 Charger",
        kind: DeviceKind::Type2Charger,
    },
];

/// Find the table row for a resolved identity
///
/// Used to program the data-line path on attach. Returns the first row
/// carrying the identity (`Ta` and `Otg` each own more than one row;
/// their rows agree on the path).
pub fn rule_for_kind(kind: DeviceKind) -> Option<&'static ClassificationRule> {
    RULE_TABLE.iter().find(|rule| rule.kind == kind)
}
