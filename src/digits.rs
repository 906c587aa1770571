/// Maximum number of decimal digits an input value may have.
pub const MAX_DIGITS: u32 = 4;

/// Number of decimal digits in `n`. Zero counts as one digit.
pub fn digit_count(n: u32) -> u32 {
    if n == 0 {
        return 1;
    }
    n.ilog10() + 1
}
