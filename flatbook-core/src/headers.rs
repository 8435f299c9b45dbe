//! Revenue..Cash Flow column range detection

use crate::normalize::normalize;

/// Find the inclusive (start, end) index pair covering 'Revenue' through
/// 'Cash Flow' in an ordered sequence of column labels, or `None` if either
/// boundary is missing.
///
/// Matching is exact on the normalized label: "revenue" for the start,
/// "cash flow" or "cashflow" for the end. Each boundary is the first match
/// scanning left to right. If Cash Flow precedes Revenue the pair is
/// swapped so the range is always non-decreasing; a reversed layout is
/// repaired, a missing boundary is a structural failure for the caller.
pub fn revenue_cashflow_range<S: AsRef<str>>(columns: &[S]) -> Option<(usize, usize)> {
    let norm: Vec<String> = columns.iter().map(|c| normalize(c.as_ref())).collect();

    let start = norm.iter().position(|c| c == "revenue")?;
    let end = norm.iter().position(|c| c == "cash flow" || c == "cashflow")?;

    if end < start {
        Some((end, start))
    } else {
        Some((start, end))
    }
}
