//! Hardware control and status seams
//!
//! The transition engine drives the chip exclusively through these
//! traits, so the same engine runs against real register access or the
//! simulated chip. All methods are fallible: control writes go over an
//! I2C-class bus that can NAK.

use std::io;

use muic_protocol::{AdcSampleMode, PathMode, SignalSnapshot};

/// Control side of the detection chip
pub trait PathControl {
    /// Program the electrical routing of the connector data lines
    fn set_path(&mut self, path: PathMode) -> io::Result<()>;

    /// Enable or disable the charger-detection handshake engine
    fn enable_charger_detect(&mut self, enabled: bool) -> io::Result<()>;

    /// Enable or disable accessory (resistance-ID) detection
    fn enable_accessory_detect(&mut self, enabled: bool) -> io::Result<()>;

    /// Select how often the chip samples the resistance-ID pin
    fn set_adc_sample_mode(&mut self, mode: AdcSampleMode) -> io::Result<()>;
}

/// Status side of the detection chip
pub trait SnapshotSource {
    /// Read and decode the status registers into one snapshot
    fn read_snapshot(&mut self) -> io::Result<SignalSnapshot>;
}
