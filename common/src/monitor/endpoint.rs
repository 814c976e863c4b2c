use std::fmt;
use std::net::IpAddr;

/// One monitored station/sensor/address triple.
///
/// The address is already a parsed [`IpAddr`], so probes can never be handed
/// a malformed literal. Two endpoints with identical fields are still two
/// endpoints; the engine addresses results by [`SlotId`], never by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub station: String,
    pub sensor: String,
    pub address: IpAddr,
}

impl Endpoint {
    pub fn new(station: impl Into<String>, sensor: impl Into<String>, address: IpAddr) -> Self {
        Self {
            station: station.into(),
            sensor: sensor.into(),
            address,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.station, self.sensor, self.address)
    }
}

/// Position of an endpoint inside the project currently being checked.
///
/// Row order comes from ingestion and is meaningful to observers, so the
/// slot doubles as the display row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for SlotId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
