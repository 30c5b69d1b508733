//! Per-field match patterns
//!
//! Each classification rule constrains a snapshot field with one of
//! these patterns: an exact value, a don't-care wildcard, or (for the
//! ADC and charger-type fields) a named extended set covering several
//! raw codes that are electrically ambiguous. All matching is pure.

use crate::status::{AdcCode, ChargerType};

/// Pattern over the 5-bit ADC code field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcPattern {
    /// Matches one code exactly
    Exact(AdcCode),
    /// The "219 ohm" group: the combined-219 code region where a type-1
    /// charger and a JIG USB-off signature read alike
    Combined219,
    /// Any code with no accessory meaning of its own: the send-end /
    /// remote-button range plus the UART cable and audio-remote codes
    Undefined,
    /// Don't care
    Any,
}

impl AdcPattern {
    /// Whether `observed` satisfies this pattern
    pub fn matches(&self, observed: AdcCode) -> bool {
        match *self {
            AdcPattern::Exact(code) => code == observed,
            AdcPattern::Combined219 => {
                observed == AdcCode::CEA936A_TYPE1_CHG || observed == AdcCode::JIG_USB_OFF
            }
            AdcPattern::Undefined => {
                (AdcCode::SEND_END.raw()..=AdcCode::REMOTE_S12.raw()).contains(&observed.raw())
                    || observed == AdcCode::UART_CABLE
                    || observed == AdcCode::AUDIOMODE_W_REMOTE
            }
            AdcPattern::Any => true,
        }
    }
}

/// Pattern over the VBUS presence bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VbusPattern {
    /// No bus power
    Low,
    /// Bus power present
    High,
    /// Don't care
    Any,
}

impl VbusPattern {
    /// Whether the observed VBUS level satisfies this pattern
    pub fn matches(&self, vbus_high: bool) -> bool {
        match *self {
            VbusPattern::Low => !vbus_high,
            VbusPattern::High => vbus_high,
            VbusPattern::Any => true,
        }
    }
}

/// Pattern over the charger-detection-running bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectRunPattern {
    /// Handshake must have finished
    Stopped,
    /// Handshake must be in progress
    Running,
    /// Don't care
    Any,
}

impl DetectRunPattern {
    /// Whether the observed run bit satisfies this pattern
    pub fn matches(&self, running: bool) -> bool {
        match *self {
            DetectRunPattern::Stopped => !running,
            DetectRunPattern::Running => running,
            DetectRunPattern::Any => true,
        }
    }
}

/// Pattern over the charger-type handshake result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargerPattern {
    /// Matches one handshake result exactly
    Exact(ChargerType),
    /// Any charger outside the BC1.2 official set: 500 mA, 1 A, or the
    /// special 3.3 V bias type
    Unofficial,
    /// Any result that indicates a powered upstream: USB, CDP,
    /// dedicated, 500 mA, or 1 A
    AnyCharger,
    /// Don't care
    Any,
}

impl ChargerPattern {
    /// Whether `observed` satisfies this pattern
    pub fn matches(&self, observed: ChargerType) -> bool {
        match *self {
            ChargerPattern::Exact(chg) => chg == observed,
            ChargerPattern::Unofficial => matches!(
                observed,
                ChargerType::Ma500 | ChargerType::Ma1000 | ChargerType::Special3_3V
            ),
            ChargerPattern::AnyCharger => matches!(
                observed,
                ChargerType::Usb
                    | ChargerType::Cdp
                    | ChargerType::Dedicated
                    | ChargerType::Ma500
                    | ChargerType::Ma1000
            ),
            ChargerPattern::Any => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn combined_219_covers_both_ambiguous_codes() {
        let p = AdcPattern::Combined219;
        assert!(p.matches(AdcCode::CEA936A_TYPE1_CHG));
        assert!(p.matches(AdcCode::JIG_USB_OFF));
        assert!(!p.matches(AdcCode::JIG_USB_ON));
        assert!(!p.matches(AdcCode::OPEN));
    }

    #[test]
    fn undefined_covers_button_range_and_outliers() {
        let p = AdcPattern::Undefined;
        for raw in AdcCode::SEND_END.raw()..=AdcCode::REMOTE_S12.raw() {
            assert!(p.matches(AdcCode::new(raw)), "raw 0x{raw:02x}");
        }
        assert!(p.matches(AdcCode::UART_CABLE));
        assert!(p.matches(AdcCode::AUDIOMODE_W_REMOTE));
        assert!(!p.matches(AdcCode::GND));
        assert!(!p.matches(AdcCode::RESERVED_VZW));
        assert!(!p.matches(AdcCode::DESKDOCK));
    }

    #[test]
    fn unofficial_charger_set() {
        let p = ChargerPattern::Unofficial;
        assert!(p.matches(ChargerType::Ma500));
        assert!(p.matches(ChargerType::Ma1000));
        assert!(p.matches(ChargerType::Special3_3V));
        assert!(!p.matches(ChargerType::Usb));
        assert!(!p.matches(ChargerType::Dedicated));
    }

    #[test]
    fn any_charger_set_excludes_special_types() {
        let p = ChargerPattern::AnyCharger;
        assert!(p.matches(ChargerType::Dedicated));
        assert!(!p.matches(ChargerType::NoVoltage));
        assert!(!p.matches(ChargerType::Special3_3V));
        assert!(!p.matches(ChargerType::Reserved));
    }

    proptest! {
        #[test]
        fn wildcard_matches_every_adc_code(raw in 0u8..32) {
            prop_assert!(AdcPattern::Any.matches(AdcCode::new(raw)));
        }

        #[test]
        fn exact_adc_matches_iff_equal(a in 0u8..32, b in 0u8..32) {
            let matched = AdcPattern::Exact(AdcCode::new(a)).matches(AdcCode::new(b));
            prop_assert_eq!(matched, a == b);
        }

        #[test]
        fn exact_charger_matches_iff_equal(a in 0u8..8, b in 0u8..8) {
            let matched = ChargerPattern::Exact(ChargerType::from_raw(a))
                .matches(ChargerType::from_raw(b));
            prop_assert_eq!(matched, a == b);
        }

        #[test]
        fn vbus_patterns_partition(vbus in any::<bool>()) {
            prop_assert!(VbusPattern::Any.matches(vbus));
            prop_assert_ne!(VbusPattern::Low.matches(vbus), VbusPattern::High.matches(vbus));
        }
    }
}
