/// Overall confidence for a ranked result set:
/// `mean · (1 − population_stddev)`, clamped to [0, 1]; 0.0 for no scores.
///
/// Agreement among the top candidates keeps confidence close to their mean;
/// a spread of scores pulls it down. Identical scores return that score
/// exactly.
pub fn confidence(scores: &[f64]) -> f64 {
    let Some(&first) = scores.first() else {
        return 0.0;
    };
    if scores.iter().all(|&s| s == first) {
        return first.clamp(0.0, 1.0);
    }
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (mean * (1.0 - variance.sqrt())).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_is_zero() {
        assert_eq!(confidence(&[]), 0.0);
    }

    #[test]
    fn identical_scores_keep_their_value() {
        for x in [0.0, 0.1, 0.2, 0.25, 0.3, 0.35, 0.46, 0.5, 0.57, 0.7, 0.73, 0.83, 0.99, 1.0] {
            assert_eq!(confidence(&[x, x, x]), x, "confidence([{x}; 3])");
            assert_eq!(confidence(&[x, x]), x, "confidence([{x}; 2])");
        }
    }

    #[test]
    fn spread_reduces_confidence() {
        // mean 0.5, population stddev 0.4
        let c = confidence(&[0.9, 0.1]);
        assert!((c - 0.3).abs() < EPS);
        assert!(c < confidence(&[0.5, 0.5]));
    }

    #[test]
    fn single_score_is_its_own_confidence() {
        assert_eq!(confidence(&[0.62]), 0.62);
    }

    #[test]
    fn stays_in_unit_interval() {
        for scores in [vec![0.0, 1.0], vec![1.0, 1.0, 0.0], vec![0.11, 0.99, 0.5]] {
            let c = confidence(&scores);
            assert!((0.0..=1.0).contains(&c), "{scores:?}: {c}");
        }
    }
}
