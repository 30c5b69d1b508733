//! Product configuration
//!
//! A JSON file describing what the product supports and how its data
//! paths are routed. Capabilities are listed by rule-table display
//! name, the same strings the rule table itself carries.
//!
//! ```json
//! {
//!   "capabilities": ["OTG", "TA", "USB", "CDP", "Jig UART Off"],
//!   "uart_route": "Ap",
//!   "usb_route": "Ap",
//!   "uart_enabled": true
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use muic_engine::{CapabilitySet, RoutingConfig};
use muic_protocol::RouteTarget;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProductConfig {
    /// Supported accessories, by rule-table display name. Empty means
    /// everything is supported.
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default = "default_route")]
    pub uart_route: RouteTarget,
    #[serde(default = "default_route")]
    pub usb_route: RouteTarget,
    #[serde(default = "default_true")]
    pub uart_enabled: bool,
    /// Boot with factory mode on
    #[serde(default)]
    pub factory_mode: bool,
}

fn default_route() -> RouteTarget {
    RouteTarget::Ap
}

fn default_true() -> bool {
    true
}

impl Default for ProductConfig {
    fn default() -> Self {
        ProductConfig {
            capabilities: Vec::new(),
            uart_route: RouteTarget::Ap,
            usb_route: RouteTarget::Ap,
            uart_enabled: true,
            factory_mode: false,
        }
    }
}

impl ProductConfig {
    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// The configured capability set
    pub fn capability_set(&self) -> CapabilitySet {
        if self.capabilities.is_empty() {
            CapabilitySet::all()
        } else {
            CapabilitySet::from_names(self.capabilities.iter().map(String::as_str))
        }
    }

    /// The configured routing policy
    pub fn routing(&self) -> RoutingConfig {
        RoutingConfig {
            uart: self.uart_route,
            usb: self.usb_route,
            uart_enabled: self.uart_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muic_protocol::DeviceKind;

    #[test]
    fn minimal_config_supports_everything_on_ap() {
        let config: ProductConfig = serde_json::from_str("{}").unwrap();
        assert!(config.capability_set().supports(DeviceKind::Deskdock));
        assert_eq!(config.routing(), RoutingConfig::default());
    }

    #[test]
    fn explicit_config_narrows_support() {
        let config: ProductConfig = serde_json::from_str(
            r#"{
                "capabilities": ["OTG", "TA"],
                "uart_route": "Cp",
                "uart_enabled": false
            }"#,
        )
        .unwrap();
        let caps = config.capability_set();
        assert!(caps.supports(DeviceKind::Otg));
        assert!(!caps.supports(DeviceKind::Deskdock));
        let routing = config.routing();
        assert_eq!(routing.uart, RouteTarget::Cp);
        assert!(!routing.uart_enabled);
    }
}
