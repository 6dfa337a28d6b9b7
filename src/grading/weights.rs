use crate::types::scores::Component;

/// Year-end total that rounds up to the pass line of 60.
pub const PASS_TARGET_YEAR_END: f64 = 59.51;
pub const PASS_LINE: f64 = 60.0;
/// Lowest final-exam score that still allows a pass.
pub const FINAL_FLOOR: f64 = 50.0;
/// Normalized year-in average that rounds up to 80 and exempts the final.
pub const FINALLESS_TARGET_NORM: f64 = 79.51;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
    pub k5: f64,
    pub bil: f64,
    pub ihu: f64,
    pub final_exam: f64,
}

impl WeightTable {
    pub const STANDARD: WeightTable = WeightTable {
        k1: 11.0,
        k2: 12.0,
        k3: 11.0,
        k4: 12.0,
        k5: 10.0,
        bil: 2.0,
        ihu: 2.0,
        final_exam: 40.0,
    };

    pub fn component(&self, component: Component) -> f64 {
        match component {
            Component::K1 => self.k1,
            Component::K2 => self.k2,
            Component::K3 => self.k3,
            Component::K4 => self.k4,
            Component::K5 => self.k5,
            Component::Bil => self.bil,
            Component::Ihu => self.ihu,
        }
    }

    /// Points the seven components can contribute to the year-end total.
    pub fn year_in_total(&self) -> f64 {
        Component::ALL
            .iter()
            .map(|component| self.component(*component))
            .sum()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
