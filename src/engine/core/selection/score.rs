/// Cost per amortised byte of merging `count` parts totalling `sum_size`. Lower is better.
///
/// Only meaningful for `count >= 2`, where the denominator is at least `0.1`.
pub fn score(count: usize, sum_size: u64, fixed_cost: u64) -> f64 {
    let count = count as f64;
    (sum_size as f64 + fixed_cost as f64 * count) / (count - 1.9)
}
