//! Fuel categories and time-lag size classes.
//!
//! The stylized US fuel models (NFFL, NFDRS) describe a fuel bed as loadings
//! grouped by category (dead or live) and by time-lag size class. The size
//! class reflects how quickly a particle equilibrates its moisture with the
//! surrounding air: fine 1-hr fuels respond within the hour, heavy 1000-hr
//! fuels take weeks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of fuel as dead or live vegetation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Dead,
    Live,
}

impl Category {
    /// Both categories, in aggregation order.
    pub const ALL: [Category; 2] = [Category::Dead, Category::Live];

    /// Lowercase name as used in the fuel model literature.
    pub fn name(self) -> &'static str {
        match self {
            Category::Dead => "dead",
            Category::Live => "live",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Time-lag size class of a fuel particle.
///
/// The standard fuel models specify at most 1-hr, 10-hr and 100-hr classes;
/// the 1000-hr class appears in some custom fuel beds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    OneHour,
    TenHour,
    HundredHour,
    ThousandHour,
}

impl SizeClass {
    /// All size classes, finest first.
    pub const ALL: [SizeClass; 4] = [
        SizeClass::OneHour,
        SizeClass::TenHour,
        SizeClass::HundredHour,
        SizeClass::ThousandHour,
    ];

    /// Characteristic moisture time lag in hours.
    pub fn timelag_hours(self) -> f64 {
        match self {
            SizeClass::OneHour => 1.0,
            SizeClass::TenHour => 10.0,
            SizeClass::HundredHour => 100.0,
            SizeClass::ThousandHour => 1000.0,
        }
    }

    /// Conventional short label.
    pub fn name(self) -> &'static str {
        match self {
            SizeClass::OneHour => "1-hr",
            SizeClass::TenHour => "10-hr",
            SizeClass::HundredHour => "100-hr",
            SizeClass::ThousandHour => "1000-hr",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_class_timelags_are_ordered() {
        let mut last = 0.0;
        for class in SizeClass::ALL {
            assert!(class.timelag_hours() > last);
            last = class.timelag_hours();
        }
    }

    #[test]
    fn display_matches_literature_labels() {
        assert_eq!(Category::Dead.to_string(), "dead");
        assert_eq!(SizeClass::HundredHour.to_string(), "100-hr");
    }
}
