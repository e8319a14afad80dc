//! Time-of-day crowd curves
//!
//! Each venue category maps to one curve. A curve is a list of peak windows
//! checked in order; the first window containing the hour decides the
//! adjustment, otherwise the off-peak adjustment applies.

/// How a window changes the base crowd level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Keep the base level
    Unchanged,
    /// `min(cap, base + by)`
    Raise { by: i32, cap: i32 },
    /// `max(floor, base - by)`
    Lower { by: i32, floor: i32 },
    /// `min(cap, base + (hour - from_hour) * per_hour)`
    Ramp { from_hour: u32, per_hour: i32, cap: i32 },
}

impl Adjustment {
    pub fn apply(&self, base: i32, hour: u32) -> i32 {
        match *self {
            Adjustment::Unchanged => base,
            Adjustment::Raise { by, cap } => cap.min(base + by),
            Adjustment::Lower { by, floor } => floor.max(base - by),
            Adjustment::Ramp {
                from_hour,
                per_hour,
                cap,
            } => {
                let steps = hour as i32 - from_hour as i32;
                cap.min(base + steps * per_hour)
            }
        }
    }
}

/// An inclusive range of hours with its adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    pub first_hour: u32,
    pub last_hour: u32,
    pub adjustment: Adjustment,
}

impl PeakWindow {
    pub fn contains(&self, hour: u32) -> bool {
        (self.first_hour..=self.last_hour).contains(&hour)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct CrowdCurve {
    pub name: &'static str,
    pub windows: &'static [PeakWindow],
    pub off_peak: Adjustment,
}

impl CrowdCurve {
    /// Adjusted crowd level for `hour` (0-23)
    pub fn crowd_at(&self, base: i32, hour: u32) -> i32 {
        self.windows
            .iter()
            .find(|w| w.contains(hour))
            .map_or(self.off_peak, |w| w.adjustment)
            .apply(base, hour)
    }
}

/// Dinner ramp from 5 PM, lunch bump at midday, quiet otherwise
pub static DINING: CrowdCurve = CrowdCurve {
    name: "dining",
    windows: &[
        PeakWindow {
            first_hour: 17,
            last_hour: 21,
            adjustment: Adjustment::Ramp {
                from_hour: 17,
                per_hour: 8,
                cap: 95,
            },
        },
        PeakWindow {
            first_hour: 12,
            last_hour: 14,
            adjustment: Adjustment::Raise { by: 15, cap: 85 },
        },
    ],
    off_peak: Adjustment::Lower { by: 20, floor: 20 },
};

/// Afternoon browsing peak
pub static ARTS_AND_SHOPPING: CrowdCurve = CrowdCurve {
    name: "arts_and_shopping",
    windows: &[PeakWindow {
        first_hour: 14,
        last_hour: 19,
        adjustment: Adjustment::Raise { by: 15, cap: 90 },
    }],
    off_peak: Adjustment::Lower { by: 10, floor: 30 },
};

pub static FLAT: CrowdCurve = CrowdCurve {
    name: "flat",
    windows: &[],
    off_peak: Adjustment::Unchanged,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dining_curve() {
        // Dinner ramp
        assert_eq!(DINING.crowd_at(85, 17), 85);
        assert_eq!(DINING.crowd_at(85, 18), 93);
        assert_eq!(DINING.crowd_at(85, 21), 95);
        assert_eq!(DINING.crowd_at(40, 20), 64);
        // Lunch bump
        assert_eq!(DINING.crowd_at(60, 13), 75);
        assert_eq!(DINING.crowd_at(80, 12), 85);
        // Off-peak dip
        assert_eq!(DINING.crowd_at(85, 9), 65);
        assert_eq!(DINING.crowd_at(30, 23), 20);
    }

    #[test]
    fn test_arts_curve() {
        assert_eq!(ARTS_AND_SHOPPING.crowd_at(68, 14), 83);
        assert_eq!(ARTS_AND_SHOPPING.crowd_at(80, 19), 90);
        assert_eq!(ARTS_AND_SHOPPING.crowd_at(68, 20), 58);
        assert_eq!(ARTS_AND_SHOPPING.crowd_at(28, 10), 30);
    }

    #[test]
    fn test_flat_curve_ignores_hour() {
        for hour in 0..24 {
            assert_eq!(FLAT.crowd_at(42, hour), 42);
        }
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let window = DINING.windows[1];
        assert!(!window.contains(11));
        assert!(window.contains(12));
        assert!(window.contains(14));
        assert!(!window.contains(15));
    }
}
