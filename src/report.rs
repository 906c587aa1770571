use crate::classifier::{classify, ClassifiedNumber};
use crate::validator::ValidatedTriple;
use std::io::{self, Write};

/// The single line printed when the input does not pass validation.
pub const INVALID_INPUT_MESSAGE: &str = "Por lo menos uno de los datos de entrada no es correcto.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Largest,
    Intermediate,
    Smallest,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Largest, Position::Intermediate, Position::Smallest];

    pub fn label(self) -> &'static str {
        match self {
            Position::Largest => "mayor",
            Position::Intermediate => "intermedio",
            Position::Smallest => "menor",
        }
    }
}

/// Pairwise exchange sort, largest first.
pub fn sort_descending(mut values: [u32; 3]) -> [u32; 3] {
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if values[j] > values[i] {
                values.swap(i, j);
            }
        }
    }
    values
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: [(Position, ClassifiedNumber); 3],
}

impl Report {
    pub fn build(triple: &ValidatedTriple) -> Self {
        let sorted = sort_descending(triple.values());
        let entries = [0usize, 1, 2].map(|i| (Position::ALL[i], classify(sorted[i])));
        Self { entries }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (position, number) in &self.entries {
            writeln!(out, "Numero {}: {}.", position.label(), number.value)?;
            writeln!(out, "- Es Sastry: {}", u8::from(number.is_sastry))?;
            writeln!(out, "- Es Apocaliptico:{}", u8::from(number.is_apocalyptic))?;
        }
        Ok(())
    }
}

pub fn write_rejection<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", INVALID_INPUT_MESSAGE)
}
