//! Detection actor
//!
//! Wraps a [`Detector`] and a [`SnapshotSource`] in an async task so
//! detection cycles are serialized: interrupt-style detect requests and
//! control commands arrive on one channel and are processed one at a
//! time, and notifications stream out on another.
//!
//! # Example
//!
//! ```rust,ignore
//! use muic_engine::actor::{run_detector_actor, DetectorCommand};
//! use tokio::sync::mpsc;
//!
//! let (cmd_tx, cmd_rx) = mpsc::channel(64);
//! let (noti_tx, mut noti_rx) = mpsc::channel(64);
//!
//! tokio::spawn(run_detector_actor(detector, source, cmd_rx, noti_tx));
//!
//! cmd_tx.send(DetectorCommand::Detect { respond: None }).await?;
//! while let Some(notification) = noti_rx.recv().await { /* ... */ }
//! ```

use muic_protocol::{DeviceKind, RouteTarget};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::detector::{Detector, Outcome};
use crate::error::MuicError;
use crate::events::Notification;
use crate::hal::{PathControl, SnapshotSource};

/// Commands accepted by the detection actor
#[derive(Debug)]
pub enum DetectorCommand {
    /// Run one detection cycle (sent on a chip interrupt)
    Detect {
        /// Optional channel for the cycle outcome
        respond: Option<oneshot::Sender<Result<Outcome, MuicError>>>,
    },
    /// Set whether a factory OTG test is running
    SetOtgTestMode(bool),
    /// Set whether the device is booted in factory mode
    SetFactoryMode(bool),
    /// Set whether flagged ADC readings should be kept
    SetIgnoreAdcError(bool),
    /// Change the UART route
    SetUartRoute(RouteTarget),
    /// Change the USB route
    SetUsbRoute(RouteTarget),
    /// Allow or forbid closing the UART path
    SetUartEnabled(bool),
    /// Ask for the currently attached identity
    QueryDevice {
        /// Channel for the answer
        respond: oneshot::Sender<DeviceKind>,
    },
    /// Stop the actor
    Shutdown,
}

/// Run the detection actor until shutdown or channel close
///
/// An initial detection cycle runs before the command loop, so an
/// accessory already seated when the actor starts is reported without
/// waiting for an interrupt.
pub async fn run_detector_actor<H, S>(
    mut detector: Detector<H>,
    mut source: S,
    mut commands: mpsc::Receiver<DetectorCommand>,
    notifications: mpsc::Sender<Notification>,
) where
    H: PathControl + Send,
    S: SnapshotSource + Send,
{
    info!("detection actor started");

    if let Err(err) = run_cycle(&mut detector, &mut source, &notifications).await {
        warn!(%err, "initial detection cycle failed");
    }

    while let Some(command) = commands.recv().await {
        match command {
            DetectorCommand::Detect { respond } => {
                let outcome = run_cycle(&mut detector, &mut source, &notifications).await;
                if let Err(err) = &outcome {
                    warn!(%err, "detection cycle failed");
                }
                if let Some(respond) = respond {
                    let _ = respond.send(outcome);
                }
            }
            DetectorCommand::SetOtgTestMode(enabled) => detector.set_otg_test_mode(enabled),
            DetectorCommand::SetFactoryMode(enabled) => detector.set_factory_mode(enabled),
            DetectorCommand::SetIgnoreAdcError(enabled) => detector.set_ignore_adc_error(enabled),
            DetectorCommand::SetUartRoute(target) => detector.set_uart_route(target),
            DetectorCommand::SetUsbRoute(target) => detector.set_usb_route(target),
            DetectorCommand::SetUartEnabled(enabled) => detector.set_uart_enabled(enabled),
            DetectorCommand::QueryDevice { respond } => {
                let _ = respond.send(detector.current_device());
            }
            DetectorCommand::Shutdown => {
                info!("detection actor shutting down");
                break;
            }
        }
    }

    debug!("detection actor stopped");
}

async fn run_cycle<H, S>(
    detector: &mut Detector<H>,
    source: &mut S,
    notifications: &mpsc::Sender<Notification>,
) -> Result<Outcome, MuicError>
where
    H: PathControl,
    S: SnapshotSource,
{
    let snapshot = source.read_snapshot()?;
    debug!(?snapshot, "snapshot read");
    let outcome = detector.handle_snapshot(&snapshot)?;
    for notification in detector.drain_notifications() {
        if notifications.send(notification).await.is_err() {
            debug!("notification receiver dropped");
            break;
        }
    }
    Ok(outcome)
}
