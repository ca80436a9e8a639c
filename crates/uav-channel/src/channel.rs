//! SNR, Shannon-style rate and the coverage test.

/// Distance floor applied before the path-loss power law.
const MIN_DISTANCE_M: f64 = 1e-6;

/// Radio/channel parameters shared read-only by every link computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Radio {
    pub bandwidth_hz: f64,
    /// Receiver noise power (W).
    pub noise_w: f64,
    /// Path-loss exponent `n` (2.0 free space, ~2.7–3.5 urban).
    pub pathloss_exponent: f64,
    /// Minimum linear SNR for a link to count as covered.
    pub snr_threshold_linear: f64,
    /// Hard coverage radius (m).
    pub comm_radius_m: f64,
}

/// Received SNR (linear) at distance `d_m` for transmit power `tx_power_w`.
#[inline]
pub fn snr_linear(tx_power_w: f64, d_m: f64, radio: &Radio) -> f64 {
    let path_loss = d_m.max(MIN_DISTANCE_M).powf(-radio.pathloss_exponent);
    tx_power_w * path_loss / radio.noise_w
}

/// `B · log2(1 + SNR)` in bit/s.  At `d_m = 0` this is the peak at-node rate.
#[inline]
pub fn achievable_rate_bps(tx_power_w: f64, d_m: f64, radio: &Radio) -> f64 {
    radio.bandwidth_hz * (1.0 + snr_linear(tx_power_w, d_m, radio)).log2()
}

/// `true` if `d_m` is inside the hard radius or the unit-power SNR clears the
/// threshold.
///
/// Both tests are always evaluated; the result is their union.
pub fn in_coverage(d_m: f64, radio: &Radio) -> bool {
    let within_radius = d_m <= radio.comm_radius_m;
    let above_threshold = snr_linear(1.0, d_m, radio) >= radio.snr_threshold_linear;
    within_radius || above_threshold
}
