//! Equal-width histogram binning

use pv_core::{Error, Result};

/// Frequencies of values grouped into equal-width bins.
///
/// `labels` holds the lower edge of each bin formatted to two decimals;
/// `frequencies` is parallel to it. The sum of the frequencies equals the
/// number of finite input values.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub labels: Vec<String>,
    pub frequencies: Vec<u64>,
}

/// Partition `values` into `num_bins` equal-width bins over `[min, max]`.
///
/// Bins are half-open `[min + i*w, min + (i+1)*w)` with the last bin closed,
/// so a value equal to the maximum lands in the final bin instead of falling
/// off the end. Non-finite values are dropped before binning. When every
/// value is identical the width degenerates to zero and everything counts
/// into the first bin.
///
/// Empty input (or input that is entirely non-finite) is rejected: there is
/// no min/max to label the edges with.
pub fn histogram_bins(values: &[f64], num_bins: usize) -> Result<HistogramBins> {
    let num_bins = num_bins.max(1);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(Error::EmptyInput);
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / num_bins as f64;

    let labels = (0..num_bins)
        .map(|i| format!("{:.2}", min + i as f64 * width))
        .collect();

    let mut frequencies = vec![0u64; num_bins];
    for &value in &finite {
        let index = if width > 0.0 {
            (((value - min) / width) as usize).min(num_bins - 1)
        } else {
            0
        };
        frequencies[index] += 1;
    }

    Ok(HistogramBins { labels, frequencies })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_sum_to_input_length() {
        let values: Vec<f64> = (0..137).map(|i| (i as f64).sin() * 10.0).collect();
        let bins = histogram_bins(&values, 12).unwrap();
        assert_eq!(bins.frequencies.len(), 12);
        assert_eq!(bins.labels.len(), 12);
        assert_eq!(bins.frequencies.iter().sum::<u64>(), values.len() as u64);
    }

    #[test]
    fn ten_values_into_five_bins() {
        let values: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let bins = histogram_bins(&values, 5).unwrap();
        // width = (10 - 1) / 5 = 1.8
        assert_eq!(
            bins.labels,
            vec!["1.00", "2.80", "4.60", "6.40", "8.20"]
        );
        assert_eq!(bins.frequencies.iter().sum::<u64>(), 10);
        // [1, 2.8) holds 1 and 2; [8.2, 10] holds 9 and 10.
        assert_eq!(bins.frequencies[0], 2);
        assert_eq!(bins.frequencies[4], 2);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = histogram_bins(&[0.0, 5.0, 10.0], 4).unwrap();
        assert_eq!(*bins.frequencies.last().unwrap(), 1);
    }

    #[test]
    fn identical_values_all_count_into_first_bin() {
        let bins = histogram_bins(&[7.0, 7.0, 7.0], 6).unwrap();
        assert_eq!(bins.frequencies[0], 3);
        assert_eq!(bins.frequencies[1..].iter().sum::<u64>(), 0);
        assert!(bins.labels.iter().all(|l| l == "7.00"));
    }

    #[test]
    fn single_value_is_accepted() {
        let bins = histogram_bins(&[3.5], 3).unwrap();
        assert_eq!(bins.frequencies, vec![1, 0, 0]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            histogram_bins(&[], 10),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let bins = histogram_bins(&[1.0, f64::NAN, 2.0, f64::INFINITY, 3.0], 3).unwrap();
        assert_eq!(bins.frequencies.iter().sum::<u64>(), 3);
    }

    #[test]
    fn all_non_finite_counts_as_empty() {
        assert!(matches!(
            histogram_bins(&[f64::NAN, f64::NEG_INFINITY], 5),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn zero_bins_is_clamped_to_one() {
        let bins = histogram_bins(&[1.0, 2.0], 0).unwrap();
        assert_eq!(bins.frequencies, vec![2]);
    }
}
