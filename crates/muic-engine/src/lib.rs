//! MUIC Accessory Detection Engine
//!
//! Turns status snapshots from a MUIC (Micro-USB Interface Controller)
//! chip into accessory attach/detach decisions and the hardware writes
//! that carry them out:
//!
//! - **Classification**: first-match scan of the rule table plus the
//!   capability filter and context refinements ([`classify`])
//! - **Transitions**: detach and supersede exception policies, and the
//!   [`Detector`] engine that applies them through the [`PathControl`]
//!   hardware seam
//! - **Notifications**: buffered accessory events drained after each
//!   cycle, physical and dock-layer ([`Notification`])
//! - **Actor**: a tokio task serializing detection cycles and control
//!   commands ([`actor::run_detector_actor`])
//!
//! The engine never reads hardware on its own; a [`SnapshotSource`]
//! hands it one snapshot per detection event and every decision is a
//! function of that snapshot and the session.

pub mod actor;
pub mod classify;
pub mod detector;
pub mod error;
pub mod events;
pub mod hal;
pub mod session;
pub mod transition;

pub use classify::{classify, recommended_sample_mode, Classification};
pub use detector::{Detector, Outcome, RoutingConfig};
pub use error::MuicError;
pub use events::Notification;
pub use hal::{PathControl, SnapshotSource};
pub use session::{CapabilitySet, SessionState};
pub use transition::{detach_policy, supersede_policy, DetachPolicy, SupersedePolicy};
