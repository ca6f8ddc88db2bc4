//! Field module - kinds and well-known names of report fields

use std::fmt;

/// Name of the server under test
pub const SERVER_NAME: &str = "server_name";
/// Year the result was published
pub const PUBLICATION_YEAR: &str = "publication_year";
/// Rack units occupied by the server
pub const FORM_FACTOR: &str = "form_factor";
/// Average power at 100% target load (W)
pub const MAX_POWER: &str = "max_power_w";
/// Average power at active idle (W)
pub const IDLE_POWER: &str = "idle_power_w";
/// Nominal CPU frequency (MHz)
pub const CPU_FREQUENCY: &str = "cpu_frequency_mhz";
/// Number of enabled cores
pub const CORES_ENABLED: &str = "cores_enabled";

const LOAD_POINT_FIELDS: [&str; 9] = [
    "load_10_power_w",
    "load_20_power_w",
    "load_30_power_w",
    "load_40_power_w",
    "load_50_power_w",
    "load_60_power_w",
    "load_70_power_w",
    "load_80_power_w",
    "load_90_power_w",
];

/// Expected value kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Whitespace-normalized text
    Text,

    /// Whole number
    Integer,

    /// Floating-point number
    Decimal,

    /// Text restricted to a fixed set of variants
    Enumerated,
}

impl FieldKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Enumerated => "enumerated",
        }
    }

    /// Whether values of this kind are numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::Decimal)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An intermediate target-load point of the power table (10% to 90%)
///
/// The 100% point is the maximum-power field and active idle is the idle
/// field; they are not load points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadPoint(u8);

impl LoadPoint {
    /// Create a load point from a percentage; only 10, 20, ..., 90 are valid
    pub fn new(percent: u8) -> Option<Self> {
        if (10..=90).contains(&percent) && percent % 10 == 0 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// All nine load points in ascending order
    pub fn all() -> impl Iterator<Item = LoadPoint> {
        (1..=9u8).map(|step| LoadPoint(step * 10))
    }

    /// Target load percentage
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Record field name holding this point's power reading
    pub fn field_name(&self) -> &'static str {
        LOAD_POINT_FIELDS[usize::from(self.0 / 10 - 1)]
    }
}

impl fmt::Display for LoadPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
