//! Virtual MUIC chip
//!
//! Implements both hardware seams of the engine. Status reads come from
//! a queue of plugged snapshots; once the queue is empty the last
//! snapshot repeats, matching a real chip whose status registers hold
//! their value until the connector changes. Every control write is
//! recorded so tests can assert the exact write sequence.

use std::collections::VecDeque;
use std::io;

use muic_engine::{PathControl, SnapshotSource};
use muic_protocol::{AdcSampleMode, PathMode, SignalSnapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One recorded control write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlOp {
    /// Data-line path programmed
    SetPath(PathMode),
    /// Charger-detection engine enabled or disabled
    ChargerDetect(bool),
    /// Accessory detection enabled or disabled
    AccessoryDetect(bool),
    /// ADC sampling mode programmed
    SampleMode(AdcSampleMode),
}

/// Simulated detection chip
pub struct VirtualMuic {
    path: PathMode,
    charger_detect: bool,
    accessory_detect: bool,
    sample_mode: AdcSampleMode,
    pending: VecDeque<SignalSnapshot>,
    last: SignalSnapshot,
    ops: Vec<ControlOp>,
    fail_io: bool,
}

impl VirtualMuic {
    /// Fresh chip: path open, detection armed, nothing plugged
    pub fn new() -> Self {
        VirtualMuic {
            path: PathMode::Open,
            charger_detect: true,
            accessory_detect: true,
            sample_mode: AdcSampleMode::OneShot,
            pending: VecDeque::new(),
            last: SignalSnapshot::open(),
            ops: Vec::new(),
            fail_io: false,
        }
    }

    /// Queue a snapshot as if an accessory changed the status registers
    pub fn plug(&mut self, snapshot: SignalSnapshot) {
        debug!(?snapshot, "plug");
        self.pending.push_back(snapshot);
        self.last = snapshot;
    }

    /// Queue the empty-connector snapshot
    pub fn unplug(&mut self) {
        self.plug(SignalSnapshot::open());
    }

    /// Make every bus access fail until cleared
    pub fn set_fail_io(&mut self, fail: bool) {
        self.fail_io = fail;
    }

    /// Control writes recorded so far
    pub fn ops(&self) -> &[ControlOp] {
        &self.ops
    }

    /// Take and clear the recorded control writes
    pub fn take_ops(&mut self) -> Vec<ControlOp> {
        std::mem::take(&mut self.ops)
    }

    /// Currently programmed data-line path
    pub fn path(&self) -> PathMode {
        self.path
    }

    /// Whether the charger-detection engine is enabled
    pub fn charger_detect_enabled(&self) -> bool {
        self.charger_detect
    }

    /// Whether accessory detection is enabled
    pub fn accessory_detect_enabled(&self) -> bool {
        self.accessory_detect
    }

    /// Currently programmed sampling mode
    pub fn sample_mode(&self) -> AdcSampleMode {
        self.sample_mode
    }

    fn bus(&self) -> io::Result<()> {
        if self.fail_io {
            Err(io::Error::new(io::ErrorKind::Other, "simulated bus fault"))
        } else {
            Ok(())
        }
    }
}

impl Default for VirtualMuic {
    fn default() -> Self {
        Self::new()
    }
}

impl PathControl for VirtualMuic {
    fn set_path(&mut self, path: PathMode) -> io::Result<()> {
        self.bus()?;
        self.path = path;
        self.ops.push(ControlOp::SetPath(path));
        Ok(())
    }

    fn enable_charger_detect(&mut self, enabled: bool) -> io::Result<()> {
        self.bus()?;
        self.charger_detect = enabled;
        self.ops.push(ControlOp::ChargerDetect(enabled));
        Ok(())
    }

    fn enable_accessory_detect(&mut self, enabled: bool) -> io::Result<()> {
        self.bus()?;
        self.accessory_detect = enabled;
        self.ops.push(ControlOp::AccessoryDetect(enabled));
        Ok(())
    }

    fn set_adc_sample_mode(&mut self, mode: AdcSampleMode) -> io::Result<()> {
        self.bus()?;
        self.sample_mode = mode;
        self.ops.push(ControlOp::SampleMode(mode));
        Ok(())
    }
}

impl SnapshotSource for VirtualMuic {
    fn read_snapshot(&mut self) -> io::Result<SignalSnapshot> {
        self.bus()?;
        Ok(self.pending.pop_front().unwrap_or(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshots;

    #[test]
    fn snapshots_drain_in_plug_order_then_repeat() {
        let mut chip = VirtualMuic::new();
        chip.plug(snapshots::usb());
        chip.plug(snapshots::open());
        assert_eq!(chip.read_snapshot().unwrap(), snapshots::usb());
        assert_eq!(chip.read_snapshot().unwrap(), snapshots::open());
        // Registers hold their last value
        assert_eq!(chip.read_snapshot().unwrap(), snapshots::open());
    }

    #[test]
    fn control_writes_are_recorded_in_order() {
        let mut chip = VirtualMuic::new();
        chip.set_path(PathMode::Usb).unwrap();
        chip.enable_charger_detect(false).unwrap();
        assert_eq!(
            chip.take_ops(),
            vec![
                ControlOp::SetPath(PathMode::Usb),
                ControlOp::ChargerDetect(false),
            ]
        );
        assert!(chip.ops().is_empty());
    }

    #[test]
    fn bus_faults_fail_reads_and_writes() {
        let mut chip = VirtualMuic::new();
        chip.set_fail_io(true);
        assert!(chip.read_snapshot().is_err());
        assert!(chip.set_path(PathMode::Uart).is_err());
        chip.set_fail_io(false);
        assert!(chip.set_path(PathMode::Uart).is_ok());
    }
}
