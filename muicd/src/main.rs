//! MUIC Accessory Detection Daemon
//!
//! Runs the detection engine against a simulated MUIC chip and walks a
//! scripted connector session through it: chargers, OTG/LAN-hub flips,
//! a smart dock picking up a host, and a factory JIG with its settle
//! bounce. Notifications are logged as subscribers would see them.
//!
//! An optional argument names a JSON product configuration file; see
//! [`config::ProductConfig`]. Without one, every accessory is supported
//! and both paths route to the AP.

mod config;

use std::env;

use anyhow::Context;
use muic_engine::actor::{run_detector_actor, DetectorCommand};
use muic_engine::{Detector, Notification};
use muic_protocol::{ChargerType, SignalSnapshot};
use muic_sim::{snapshots, VirtualMuic};
use tokio::sync::{mpsc, oneshot};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ProductConfig;

/// Connector activity for the demo session
fn session_script() -> Vec<SignalSnapshot> {
    vec![
        snapshots::dedicated_charger(),
        snapshots::open(),
        snapshots::otg(),
        snapshots::lanhub(),
        snapshots::otg(),
        snapshots::open(),
        snapshots::smartdock_vb(ChargerType::NoVoltage),
        snapshots::smartdock_vb(ChargerType::Usb),
        snapshots::open(),
        snapshots::jig_uart_off(false),
        snapshots::jig_uart_on(),
        snapshots::open(),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "muicd=info,muic_protocol=info,muic_engine=info,muic_sim=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("starting muicd");

    let config = match env::args().nth(1) {
        Some(path) => ProductConfig::load(&path)?,
        None => ProductConfig::default(),
    };

    let mut detector = Detector::with_routing(
        VirtualMuic::new(),
        config.capability_set(),
        config.routing(),
    );
    if config.factory_mode {
        detector.set_factory_mode(true);
    }

    let mut source = VirtualMuic::new();
    let script = session_script();
    let cycles = script.len();
    for snapshot in script {
        source.plug(snapshot);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (noti_tx, mut noti_rx) = mpsc::channel::<Notification>(64);

    let actor = tokio::spawn(run_detector_actor(detector, source, cmd_rx, noti_tx));
    let subscriber = tokio::spawn(async move {
        while let Some(notification) = noti_rx.recv().await {
            info!(?notification, "accessory event");
        }
    });

    // The actor's startup cycle consumed the first scripted snapshot
    for _ in 1..cycles {
        let (tx, rx) = oneshot::channel();
        cmd_tx
            .send(DetectorCommand::Detect { respond: Some(tx) })
            .await
            .context("detection actor stopped")?;
        let outcome = rx.await.context("detection actor dropped the cycle")??;
        info!(?outcome, "detection cycle");
    }

    cmd_tx
        .send(DetectorCommand::Shutdown)
        .await
        .context("detection actor stopped")?;
    actor.await.context("joining detection actor")?;
    subscriber.await.context("joining subscriber")?;

    info!("session complete");
    Ok(())
}
