use crate::error::EngineError;

/// Day-over-day direction of a close-price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

/// Classify every day-over-day move in `closes`.
///
/// Element `i` describes the move from `closes[i]` to `closes[i + 1]`,
/// so the output is one element shorter than the input (the first day
/// has nothing to compare against).
pub fn day_directions(closes: &[f64]) -> Result<Vec<Direction>, EngineError> {
    if closes.len() < 2 {
        return Err(EngineError::InsufficientData {
            needed: 2,
            got: closes.len(),
        });
    }

    Ok(closes
        .windows(2)
        .map(|pair| {
            if pair[1] > pair[0] {
                Direction::Up
            } else if pair[1] < pair[0] {
                Direction::Down
            } else {
                Direction::Flat
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_directions_fails_on_empty_series() {
        let err = day_directions(&[]).unwrap_err();
        assert_eq!(err, EngineError::InsufficientData { needed: 2, got: 0 });
    }

    #[test]
    fn test_day_directions_fails_on_single_close() {
        let err = day_directions(&[100.0]).unwrap_err();
        assert_eq!(err, EngineError::InsufficientData { needed: 2, got: 1 });
    }

    #[test]
    fn test_day_directions_output_is_one_shorter_than_input() {
        let closes = vec![100.0, 101.0, 102.0, 103.0];
        let directions = day_directions(&closes).unwrap();
        assert_eq!(directions.len(), 3);
    }

    #[test]
    fn test_day_directions_classifies_up_down_and_flat() {
        // 100 -> 101: Up
        // 101 -> 99:  Down
        // 99 -> 99:   Flat
        let closes = vec![100.0, 101.0, 99.0, 99.0];
        let directions = day_directions(&closes).unwrap();
        assert_eq!(
            directions,
            vec![Direction::Up, Direction::Down, Direction::Flat]
        );
    }
}
