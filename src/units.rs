//! Time unit selection for human-readable reporting.
//!
//! Statistics are computed in nanoseconds and rescaled for display. Each
//! value picks its own unit independently, so a summary line can mix units
//! (e.g. a total in microseconds next to a minimum in nanoseconds).

/// Display unit for a scaled duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Nanoseconds (no scaling).
    Nanoseconds,
    /// Microseconds (ns × 1e-3).
    Microseconds,
    /// Milliseconds (ns × 1e-6).
    Milliseconds,
    /// Seconds (ns × 1e-9).
    Seconds,
    /// Minutes (ns × 1e-9 / 60).
    Minutes,
    /// Hours (ns × 1e-9 / 3600).
    Hours,
}

impl TimeUnit {
    /// Short label appended directly after the scaled value.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "\u{00B5}s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "hr",
        }
    }
}

/// A duration rescaled to its most readable unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledTime {
    /// Value expressed in `unit`.
    pub value: f64,
    /// Unit the value is expressed in.
    pub unit: TimeUnit,
}

impl std::fmt::Display for ScaledTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit.label())
    }
}

/// Rescale a nanosecond duration to its most readable unit.
///
/// Bracket upper bounds are inclusive: exactly 1000 ns still reports as
/// nanoseconds, exactly 1e6 ns as microseconds, and so on. The bracket
/// boundaries sit at one microsecond, one millisecond, one second, ten
/// minutes, and three hours.
pub fn scale_ns(ns: f64) -> ScaledTime {
    if ns <= 1.0e3 {
        ScaledTime {
            value: ns,
            unit: TimeUnit::Nanoseconds,
        }
    } else if ns <= 1.0e6 {
        ScaledTime {
            value: ns * 1e-3,
            unit: TimeUnit::Microseconds,
        }
    } else if ns <= 1.0e9 {
        ScaledTime {
            value: ns * 1e-6,
            unit: TimeUnit::Milliseconds,
        }
    } else if ns <= 6.0e11 {
        ScaledTime {
            value: ns * 1e-9,
            unit: TimeUnit::Seconds,
        }
    } else if ns <= 1.08e13 {
        ScaledTime {
            value: ns * 1e-9 / 60.0,
            unit: TimeUnit::Minutes,
        }
    } else {
        ScaledTime {
            value: ns * 1e-9 / 3600.0,
            unit: TimeUnit::Hours,
        }
    }
}
