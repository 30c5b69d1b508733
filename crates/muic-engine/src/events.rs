//! Notifications emitted to accessory subscribers
//!
//! The transition engine buffers notifications as it processes detection
//! events; callers drain them after each cycle. Logical variants report
//! attachment of a dock's host-side identity without the connector state
//! actually changing, so subscribers can track both layers.

use muic_protocol::DeviceKind;

/// One accessory notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// An accessory attached and its path was configured
    Attached(DeviceKind),
    /// The current accessory detached
    Detached(DeviceKind),
    /// A dock-layer identity attached without a physical connector change
    LogicallyAttached(DeviceKind),
    /// A dock-layer identity detached without a physical connector change
    LogicallyDetached(DeviceKind),
}

impl Notification {
    /// The identity this notification concerns
    pub fn device(&self) -> DeviceKind {
        match *self {
            Notification::Attached(kind)
            | Notification::Detached(kind)
            | Notification::LogicallyAttached(kind)
            | Notification::LogicallyDetached(kind) => kind,
        }
    }

    /// Whether this is an attach-class notification (physical or logical)
    pub fn is_attach_class(&self) -> bool {
        matches!(
            self,
            Notification::Attached(_) | Notification::LogicallyAttached(_)
        )
    }

    /// Whether this is a detach-class notification (physical or logical)
    pub fn is_detach_class(&self) -> bool {
        !self.is_attach_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_and_detach_classes_partition() {
        let attach = Notification::Attached(DeviceKind::Usb);
        let logical = Notification::LogicallyAttached(DeviceKind::SmartdockVb);
        let detach = Notification::Detached(DeviceKind::Ta);
        assert!(attach.is_attach_class() && !attach.is_detach_class());
        assert!(logical.is_attach_class());
        assert!(detach.is_detach_class());
    }

    #[test]
    fn device_accessor_returns_payload() {
        assert_eq!(
            Notification::LogicallyDetached(DeviceKind::SmartdockVb).device(),
            DeviceKind::SmartdockVb
        );
    }
}
