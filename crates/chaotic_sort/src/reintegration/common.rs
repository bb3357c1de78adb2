/// First `i` in `0..=len` with `working[i-1] <= value <= working[i]`, missing bounds
/// counting as satisfied. Always `Some` for a sorted `working`, since `i == len` only
/// needs the left bound and the scan stops earlier otherwise.
#[inline]
pub fn scan_insertion_point(working: &[i64], value: i64) -> Option<usize> {
    let len = working.len();
    (0..=len).find(|&i| {
        let left_ok = i == 0 || working[i - 1] <= value;
        let right_ok = i == len || value <= working[i];
        left_ok && right_ok
    })
}

/// Slot used when an item runs out of pity: before the first element not smaller
/// than `value`, or at the end.
#[inline]
pub fn forced_insertion_point(working: &[i64], value: i64) -> usize {
    let len = working.len();
    (0..=len)
        .find(|&i| i == len || value <= working[i])
        .unwrap_or(len)
}

/// Rightmost slot that keeps `working` non-decreasing; ties go after equal elements.
#[inline]
pub fn upper_bound(working: &[i64], value: i64) -> usize {
    let mut left = 0usize;
    let mut right = working.len();
    while left < right {
        let mid = left + ((right - left) >> 1);
        if working[mid] <= value {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

#[inline]
pub fn is_sorted_non_decreasing(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn scan_edges() {
        assert_eq!(scan_insertion_point(&[], 3), Some(0));
        assert_eq!(scan_insertion_point(&[5], 3), Some(0));
        assert_eq!(scan_insertion_point(&[5], 9), Some(1));
        assert_eq!(scan_insertion_point(&[1, 3, 5], 4), Some(2));
        // Ties take the first admissible slot.
        assert_eq!(scan_insertion_point(&[1, 3, 3, 5], 3), Some(1));
    }

    #[test]
    fn forced_point_matches_lower_bound() {
        assert_eq!(forced_insertion_point(&[], 3), 0);
        assert_eq!(forced_insertion_point(&[1, 3, 3, 5], 3), 1);
        assert_eq!(forced_insertion_point(&[1, 3, 3, 5], 9), 4);
    }

    #[test]
    fn upper_bound_puts_ties_last() {
        assert_eq!(upper_bound(&[], 0), 0);
        assert_eq!(upper_bound(&[1, 3, 3, 5], 3), 3);
        assert_eq!(upper_bound(&[1, 3, 3, 5], 0), 0);
        assert_eq!(upper_bound(&[1, 3, 3, 5], 7), 4);
    }

    #[test]
    fn scan_always_finds_a_slot_on_sorted_input() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let mut working: Vec<i64> = (0..len).map(|_| rng.random_range(-20..=20)).collect();
            working.sort_unstable();
            let value = rng.random_range(-25..=25);

            let slot = scan_insertion_point(&working, value).expect("slot");
            assert_eq!(slot, working.partition_point(|&x| x < value));

            let mut after = working.clone();
            after.insert(slot, value);
            assert!(is_sorted_non_decreasing(&after));
        }
    }

    #[test]
    fn upper_bound_matches_partition_point() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for _ in 0..200 {
            let len = rng.random_range(0..128);
            let mut working: Vec<i64> = (0..len).map(|_| rng.random_range(-8..=8)).collect();
            working.sort_unstable();
            let value = rng.random_range(-10..=10);
            assert_eq!(
                upper_bound(&working, value),
                working.partition_point(|&x| x <= value)
            );
        }
    }
}
