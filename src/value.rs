//! Linear range interpolation.

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The operation order is fixed so results are bit-identical wherever the
/// same inputs are used.
pub fn map(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_endpoints() {
        assert_eq!(map(0.0, 0.0, 15.0, 10.0, 60.0), 10.0);
        assert_eq!(map(15.0, 0.0, 15.0, 10.0, 60.0), 60.0);
        assert_eq!(map(0.0, 0.0, 4095.0, 0.0, 359.0), 0.0);
        assert_eq!(map(4095.0, 0.0, 4095.0, 0.0, 359.0), 359.0);
    }

    #[test]
    fn map_is_bit_exact() {
        assert_eq!(map(5.0, 0.0, 15.0, 10.0, 60.0), 26.666666666666668);
        assert_eq!(map(4.0, 0.0, 15.0, 0.02, 0.15), 0.05466666666666667);
    }

    #[test]
    fn map_handles_reversed_output_range() {
        assert_eq!(map(15.0, 0.0, 15.0, 1.0, 0.0), 0.0);
        assert_eq!(map(0.0, 0.0, 15.0, 1.0, 0.0), 1.0);
    }
}
