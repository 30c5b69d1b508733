//! MUIC Signal Protocol Library
//!
//! This crate provides the signal vocabulary for a MUIC (Micro-USB
//! Interface Controller) accessory detection chip:
//!
//! - **Raw codes**: 5-bit resistance-ID ADC codes and charger-detection
//!   handshake results as reported by the chip status registers
//! - **SignalSnapshot**: one parsed status reading, the unit of input for
//!   classification
//! - **DeviceKind**: the closed set of accessory identities the detector
//!   can resolve to
//! - **Patterns**: per-field match patterns (exact, don't-care, extended
//!   set) and the ordered first-match-wins classification rule table
//!
//! # Architecture
//!
//! Matching is pure: a [`ClassificationRule`] either matches a
//! [`SignalSnapshot`] or it doesn't, with no side effects and no state.
//! Table order is significant: more specific rules precede wildcard
//! rules that could also match the same snapshot, and the first match
//! wins.
//!
//! # Example
//!
//! ```rust
//! use muic_protocol::{AdcCode, ChargerType, DeviceKind, SignalSnapshot, RULE_TABLE};
//!
//! // A dedicated charger: ID pin open, VBUS present, DCP handshake result
//! let snapshot = SignalSnapshot {
//!     adc: AdcCode::OPEN,
//!     vbus_high: true,
//!     charger_type: ChargerType::Dedicated,
//!     ..SignalSnapshot::open()
//! };
//!
//! let rule = RULE_TABLE.iter().find(|r| r.matches(&snapshot)).unwrap();
//! assert_eq!(rule.kind, DeviceKind::Ta);
//! ```

pub mod device;
pub mod pattern;
pub mod rules;
pub mod status;

pub use device::DeviceKind;
pub use pattern::{AdcPattern, ChargerPattern, DetectRunPattern, VbusPattern};
pub use rules::{rule_for_kind, ClassificationRule, RULE_TABLE};
pub use status::{AdcCode, AdcSampleMode, ChargerType, PathMode, RouteTarget, SignalSnapshot};
