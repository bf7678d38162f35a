//! Index arithmetic shared by top-level and submenu navigation

/// Clamp with wrap-around.
///
/// A value past `max` wraps to `min`; a value below `min` wraps to `max`.
/// Anything inside the range is returned unchanged.
pub fn wrapping_clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        min
    } else if value < min {
        max
    } else {
        value
    }
}

/// Step `current` by one in the given direction within `0..len`.
///
/// Returns `None` when there is nothing to step through.
pub fn step_index(current: usize, forward: bool, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let max = len as isize - 1;
    let next = current as isize + if forward { 1 } else { -1 };
    Some(wrapping_clamp(next, 0, max) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wraps_past_upper_bound() {
        assert_eq!(wrapping_clamp(5, 0, 4), 0);
    }

    #[test]
    fn test_wraps_below_lower_bound() {
        assert_eq!(wrapping_clamp(-1, 0, 4), 4);
    }

    #[test]
    fn test_inside_range_unchanged() {
        for i in 0..=4 {
            assert_eq!(wrapping_clamp(i, 0, 4), i);
        }
    }

    #[test]
    fn test_step_index() {
        assert_eq!(step_index(4, true, 5), Some(0));
        assert_eq!(step_index(0, false, 5), Some(4));
        assert_eq!(step_index(2, true, 5), Some(3));
        assert_eq!(step_index(0, true, 1), Some(0));
        assert_eq!(step_index(0, true, 0), None);
    }

    #[test]
    fn test_step_index_out_of_range_start() {
        // A stale index past the end wraps to the first entry
        assert_eq!(step_index(7, true, 3), Some(0));
    }

    proptest! {
        #[test]
        fn test_step_stays_in_range(current in 0usize..64, len in 1usize..64, forward: bool) {
            let current = current % len;
            let next = step_index(current, forward, len).unwrap();
            prop_assert!(next < len);
        }

        #[test]
        fn test_forward_then_back_is_identity(current in 0usize..64, len in 1usize..64) {
            let current = current % len;
            let next = step_index(current, true, len).unwrap();
            prop_assert_eq!(step_index(next, false, len), Some(current));
        }
    }
}
