//! Running energy totals for one mission.

/// Cumulative energy (Wh) by phase.
///
/// `total_wh` is accumulated alongside the sub-totals rather than derived
/// from them, so it matches the sum in the order the phases were charged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyLedger {
    total_wh: f64,
    fly_wh:   f64,
    hover_wh: f64,
    tx_wh:    f64,
}

impl EnergyLedger {
    #[inline]
    pub fn add_flight(&mut self, e_wh: f64) {
        self.total_wh += e_wh;
        self.fly_wh += e_wh;
    }

    #[inline]
    pub fn add_hover_tx(&mut self, hover_wh: f64, tx_wh: f64) {
        self.total_wh += hover_wh + tx_wh;
        self.hover_wh += hover_wh;
        self.tx_wh += tx_wh;
    }

    /// `true` once the total reaches `capacity_wh`.
    #[inline]
    pub fn exhausted(&self, capacity_wh: f64) -> bool {
        self.total_wh >= capacity_wh
    }

    #[inline]
    pub fn total_wh(&self) -> f64 {
        self.total_wh
    }

    #[inline]
    pub fn fly_wh(&self) -> f64 {
        self.fly_wh
    }

    #[inline]
    pub fn hover_wh(&self) -> f64 {
        self.hover_wh
    }

    #[inline]
    pub fn tx_wh(&self) -> f64 {
        self.tx_wh
    }
}
