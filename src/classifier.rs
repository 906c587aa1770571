/// Substring that marks an apocalyptic number.
const APOCALYPTIC_MARK: &str = "666";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedNumber {
    pub value: u32,
    pub is_sastry: bool,
    pub is_apocalyptic: bool,
}

/// True when the digits of `n` followed by the digits of `n + 1` form a
/// perfect square.
pub fn is_sastry(n: u32) -> bool {
    let next = u64::from(n) + 1;
    let concatenated: u64 = match format!("{}{}", n, next).parse() {
        Ok(value) => value,
        Err(_) => return false,
    };

    let root = concatenated.isqrt();
    root * root == concatenated
}

/// True when the decimal form of `n` contains "666".
pub fn is_apocalyptic(n: u32) -> bool {
    n.to_string().contains(APOCALYPTIC_MARK)
}

pub fn classify(value: u32) -> ClassifiedNumber {
    ClassifiedNumber {
        value,
        is_sastry: is_sastry(value),
        is_apocalyptic: is_apocalyptic(value),
    }
}
