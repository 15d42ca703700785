//! Shared LCS backtracking, used at line and token granularity.

/// One step of an LCS-aligned edit script, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiffOp {
    /// `a[i]` matches `b[j]`.
    Both(usize, usize),
    /// `a[i]` only (removed).
    OldOnly(usize),
    /// `b[j]` only (added).
    NewOnly(usize),
}

/// Exact LCS edit script via the full O(m*n) DP table.
///
/// Backtracks from `(m, n)`; on a tie between moving either pointer, the
/// new-side pointer moves first, so runs come out as removals before
/// additions when read forward. Callers guard the cell budget.
pub(crate) fn diff_ops<T: PartialEq>(a: &[T], b: &[T]) -> Vec<DiffOp> {
    let m = a.len();
    let n = b.len();

    // dp[i][j] = LCS length of a[0..i) and b[0..j)
    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    // Built tail-first, reversed at the end.
    let mut ops = Vec::with_capacity(m + n);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            ops.push(DiffOp::Both(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i][j - 1] >= dp[i - 1][j] {
            ops.push(DiffOp::NewOnly(j - 1));
            j -= 1;
        } else {
            ops.push(DiffOp::OldOnly(i - 1));
            i -= 1;
        }
    }
    while j > 0 {
        ops.push(DiffOp::NewOnly(j - 1));
        j -= 1;
    }
    while i > 0 {
        ops.push(DiffOp::OldOnly(i - 1));
        i -= 1;
    }
    ops.reverse();
    ops
}
