use crate::digits::{digit_count, MAX_DIGITS};
use crate::input::InputTriple;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is not a natural number")]
    NotNatural(i64),
    #[error("{0} appears more than once")]
    Duplicate(i64),
    #[error("{0} has more than four digits")]
    TooManyDigits(i64),
}

/// Three distinct natural numbers of at most four digits, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTriple {
    values: [u32; 3],
}

impl ValidatedTriple {
    pub fn values(&self) -> [u32; 3] {
        self.values
    }
}

/// Boolean form of [`validate`].
pub fn is_valid(a: i64, b: i64, c: i64) -> bool {
    validate(&InputTriple::new(a, b, c)).is_ok()
}

/// Check positivity, then distinctness, then digit length.
pub fn validate(triple: &InputTriple) -> Result<ValidatedTriple, ValidationError> {
    let [a, b, c] = triple.values();

    if let Some(&v) = [a, b, c].iter().find(|&&v| v <= 0) {
        return Err(ValidationError::NotNatural(v));
    }

    if a == b || a == c {
        return Err(ValidationError::Duplicate(a));
    }
    if b == c {
        return Err(ValidationError::Duplicate(b));
    }

    let mut values = [0u32; 3];
    for (slot, v) in values.iter_mut().zip([a, b, c]) {
        // Anything that does not fit in u32 has far more than four digits.
        let n = u32::try_from(v).map_err(|_| ValidationError::TooManyDigits(v))?;
        if digit_count(n) > MAX_DIGITS {
            return Err(ValidationError::TooManyDigits(v));
        }
        *slot = n;
    }

    Ok(ValidatedTriple { values })
}
