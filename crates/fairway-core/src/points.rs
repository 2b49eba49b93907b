//! Order of Merit points awarded per finishing position.

/// Points for 1st through 10th. Anything lower scores nothing.
pub const POINTS_TABLE: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

/// Points for a 1-based finishing position.
pub fn points_for_position(position: usize) -> u32 {
    position
        .checked_sub(1)
        .and_then(|index| POINTS_TABLE.get(index))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_points_table() {
        let awarded: Vec<u32> = (1..=10).map(points_for_position).collect();
        assert_eq!(awarded, vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1]);
    }

    #[test]
    fn test_points_outside_table() {
        assert_eq!(points_for_position(0), 0);
        assert_eq!(points_for_position(11), 0);
        assert_eq!(points_for_position(usize::MAX), 0);
    }

    proptest! {
        #[test]
        fn points_never_increase_down_the_field(a in 1usize..=10, b in 1usize..=10) {
            let (better, worse) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(points_for_position(better) >= points_for_position(worse));
        }

        #[test]
        fn points_beyond_tenth_are_zero(position in 11usize..10_000) {
            prop_assert_eq!(points_for_position(position), 0);
        }
    }
}
