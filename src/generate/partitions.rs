//! Non-increasing integer partitions.

/// Every sequence `a1 >= a2 >= ... >= ak >= 1` with `a1 + ... + ak = n`,
/// in deterministic order (smallest leading part first).
///
/// `n = 0, k = 0` yields one empty partition; `k = 0` with `n > 0` and
/// `k > n` yield nothing.
pub fn partitions_nonincreasing(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    extend(n, k, &mut current, &mut result);
    result
}

fn extend(n: usize, k: usize, current: &mut Vec<usize>, result: &mut Vec<Vec<usize>>) {
    if k == 0 {
        if n == 0 {
            result.push(current.clone());
        }
        return;
    }
    if n < k {
        return;
    }

    // The remaining k-1 parts need at least one unit each; non-increasing
    // order also bounds this part by the previous one.
    let mut max_part = n - (k - 1);
    if let Some(&previous) = current.last() {
        max_part = max_part.min(previous);
    }

    for part in 1..=max_part {
        current.push(part);
        extend(n - part, k - 1, current, result);
        current.pop();
    }
}
