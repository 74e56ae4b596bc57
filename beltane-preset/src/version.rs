//! Dotted-integer version string comparison.

use std::cmp::Ordering;

/// Compare two dotted-integer version strings component-wise ("0.9.0" vs
/// "1.2.0"). Missing trailing components count as zero, so "1.2" equals
/// "1.2.0". A component that does not parse as an integer also counts as
/// zero; version comparison itself never fails.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = components(a);
    let b = components(b);
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|c| c.trim().parse::<u64>().unwrap_or(0))
        .collect()
}
