//! The closed set of simulated devices.
//!
//! Each device carries a total-order priority rank: the keyboard preempts
//! everything, the printer yields to everything. Identity is a plain value
//! type shared freely across threads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A simulated interrupt source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Keyboard,
    Mouse,
    Printer,
}

impl Device {
    /// Number of known devices. The mask table is sized by this.
    pub const COUNT: usize = 3;

    /// Every known device, in priority order.
    pub const ALL: [Device; Self::COUNT] = [Device::Keyboard, Device::Mouse, Device::Printer];

    /// Priority rank; lower means dispatched first.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Device::Keyboard => 0,
            Device::Mouse => 1,
            Device::Printer => 2,
        }
    }

    /// Stable display name used in audit lines and console output.
    pub fn name(self) -> &'static str {
        match self {
            Device::Keyboard => "Keyboard",
            Device::Mouse => "Mouse",
            Device::Printer => "Printer",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.rank() as usize
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
