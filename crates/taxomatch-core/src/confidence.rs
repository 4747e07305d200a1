//! Maps raw keyword scores onto a bounded 0–100 confidence value.

/// Normalize a raw category score against the best score this product name
/// could possibly reach: every character participating in a full-weight
/// (3×) title match.
///
/// This is a heuristic, not a probability — a short name with one strong
/// keyword hit can legitimately reach 100.
pub fn confidence(top_score: u32, product_name_len: usize) -> u8 {
    if product_name_len == 0 || top_score == 0 {
        return 0;
    }
    let max_possible = (product_name_len * 3) as f64;
    let ratio = top_score as f64 / max_possible;
    (ratio * 100.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_is_zero() {
        assert_eq!(confidence(0, 20), 0);
    }

    #[test]
    fn zero_length_name_is_zero() {
        assert_eq!(confidence(50, 0), 0);
    }

    #[test]
    fn clamped_to_100() {
        // Huge score against a tiny name saturates instead of overflowing.
        assert_eq!(confidence(10_000, 3), 100);
    }

    #[test]
    fn proportional_in_range() {
        // Score of half the maximum → 50.
        let name_len = 20;
        assert_eq!(confidence((name_len * 3 / 2) as u32, name_len), 50);
    }

    #[test]
    fn pathological_lengths_stay_bounded() {
        for len in [1, 2, 1000, 100_000] {
            for score in [0u32, 1, 500, 1_000_000] {
                assert!(confidence(score, len) <= 100);
            }
        }
    }
}
