//! Deterministic series decimation
//!
//! Charts cap the number of drawn points for readability. This is a lossy
//! stride-based down-selection, not a statistical sample: it exists purely
//! to bound rendering cost.

/// Reduce `values` to at most `size` elements.
///
/// Sequences no longer than `size` come back unchanged. Longer sequences
/// are strided by `floor(len / size)` starting at index 0, stopping once
/// `size` elements are collected, so the output length is exactly
/// `min(len, size)`.
pub fn sample_series<T: Clone>(values: &[T], size: usize) -> Vec<T> {
    if values.len() <= size {
        return values.to_vec();
    }
    let step = values.len() / size;
    values
        .iter()
        .step_by(step.max(1))
        .take(size)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_identity() {
        let values = vec![1, 2, 3];
        assert_eq!(sample_series(&values, 10), values);
        assert_eq!(sample_series(&values, 3), values);
    }

    #[test]
    fn hundred_down_to_ten() {
        let values: Vec<usize> = (0..100).collect();
        let sampled = sample_series(&values, 10);
        assert_eq!(sampled.len(), 10);
        assert_eq!(sampled[0], 0);
        assert_eq!(sampled, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn output_length_is_min_of_len_and_size() {
        for len in [0usize, 1, 7, 50, 99, 100, 101, 1000] {
            let values: Vec<usize> = (0..len).collect();
            for size in [1usize, 3, 10, 50] {
                assert_eq!(
                    sample_series(&values, size).len(),
                    len.min(size),
                    "len={len} size={size}"
                );
            }
        }
    }

    #[test]
    fn non_divisible_stride_still_fills_the_budget() {
        // len 103, size 10 -> step 10, take 10
        let values: Vec<usize> = (0..103).collect();
        let sampled = sample_series(&values, 10);
        assert_eq!(sampled.len(), 10);
        assert_eq!(*sampled.last().unwrap(), 90);
    }
}
