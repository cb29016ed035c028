/// Trailing simple moving average over the last `window` closes.
/// Returns None if there isn't enough data (or the window is zero).
pub fn simple_moving_average(prices: &[f64], window: usize) -> Option<f64> {
    if window == 0 || prices.len() < window {
        return None;
    }

    let tail = &prices[prices.len() - window..];
    let sum: f64 = tail.iter().copied().sum();
    Some(sum / window as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) {
        assert!(
            (a - b).abs() <= eps,
            "expected {b}, got {a} (diff = {})",
            (a - b).abs()
        );
    }

    #[test]
    fn test_simple_moving_average_returns_none_when_not_enough_data() {
        let prices = vec![1.0, 2.0, 3.0];
        assert_eq!(simple_moving_average(&prices, 4), None);
    }

    #[test]
    fn test_simple_moving_average_returns_none_for_zero_window() {
        let prices = vec![1.0, 2.0, 3.0];
        assert_eq!(simple_moving_average(&prices, 0), None);
    }

    #[test]
    fn test_simple_moving_average_with_exact_window_length_uses_all_values() {
        let prices = vec![1.0, 2.0, 3.0, 4.0];
        // average = (1 + 2 + 3 + 4) / 4 = 2.5
        let sma = simple_moving_average(&prices, 4).unwrap();
        approx_eq(sma, 2.5, 1e-9);
    }

    #[test]
    fn test_simple_moving_average_with_window_smaller_than_length_uses_last_window_values() {
        let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // window = 3 -> last 3 values: 3, 4, 5
        // average = (3 + 4 + 5) / 3 = 4.0
        let sma = simple_moving_average(&prices, 3).unwrap();
        approx_eq(sma, 4.0, 1e-9);
    }

    #[test]
    fn test_simple_moving_average_with_window_one_is_last_element() {
        let prices = vec![10.0, 20.0, 30.0];
        let sma = simple_moving_average(&prices, 1).unwrap();
        approx_eq(sma, 30.0, 1e-9);
    }
}
