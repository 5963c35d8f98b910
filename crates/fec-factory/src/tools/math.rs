//! Integer helpers shared by validators and code constructions

/// `true` if `n` is an exact power of two (`1, 2, 4, ...`).
pub fn is_power_of_2(n: i64) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// `true` if `n + 1` is an exact power of two (`0, 1, 3, 7, 15, ...`).
///
/// BCH codeword lengths are only defined for `N = 2^m - 1`.
pub fn is_power_of_2_minus_1(n: i64) -> bool {
    n.checked_add(1).is_some_and(is_power_of_2)
}

/// Base-2 logarithm of a power of two.
pub fn log2_exact(n: usize) -> Option<u32> {
    n.is_power_of_two().then(|| n.trailing_zeros())
}
