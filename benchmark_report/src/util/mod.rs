//!
//! Small numeric helpers shared across the report model.
//!

///
/// Rounds a value to the given number of decimal places.
///
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.2345, 2), 1.23);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(2.0, 1), 2.0);
    }
}
