/// A pair of comparable bounds splitting a metric into three bands.
///
/// Precondition: `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub low: f64,
    pub high: f64,
}

pub const DISK_USAGE: Threshold = Threshold {
    low: 33.0,
    high: 66.0,
};

pub const MEMORY_USAGE: Threshold = Threshold {
    low: 60.0,
    high: 80.0,
};

pub const CPU_USAGE: Threshold = Threshold {
    low: 30.0,
    high: 70.0,
};

/// Temperatures at or above this render the hot symbol; there is no warning
/// tier for temperature.
pub const TEMPERATURE_HOT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Nominal,
    Warning,
    Severe,
}

impl Indicator {
    /// Classify a value against a threshold pair.
    ///
    /// Bands are closed-open: `value >= high` is severe, `low <= value <
    /// high` is warning, everything below `low` is nominal.
    pub fn classify(value: f64, threshold: Threshold) -> Indicator {
        if value >= threshold.high {
            return Indicator::Severe;
        }

        if value >= threshold.low {
            return Indicator::Warning;
        }

        Indicator::Nominal
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Indicator::Nominal => "🟢",
            Indicator::Warning => "🟡",
            Indicator::Severe => "🔴",
        }
    }
}

/// Binary temperature rule: below [`TEMPERATURE_HOT`] is cool, else hot.
pub fn temperature_symbol(celsius: f64) -> &'static str {
    if celsius < TEMPERATURE_HOT { "❄️" } else { "🔥" }
}
