use crate::input::{read_triple, InputError};
use crate::report::{write_rejection, Report};
use crate::validator::{validate, ValidationError};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reported(Report),
    Rejected(ValidationError),
}

/// Read, validate, classify and print one triple.
///
/// Input errors are returned before anything is written to `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<Outcome, PipelineError> {
    let triple = read_triple(input)?;
    debug!(a = triple.a, b = triple.b, c = triple.c, "read input");

    let validated = match validate(&triple) {
        Ok(validated) => validated,
        Err(reason) => {
            info!(%reason, "input rejected");
            write_rejection(output)?;
            output.flush()?;
            return Ok(Outcome::Rejected(reason));
        }
    };

    let report = Report::build(&validated);
    for (position, number) in &report.entries {
        debug!(
            position = position.label(),
            value = number.value,
            sastry = number.is_sastry,
            apocalyptic = number.is_apocalyptic,
            "classified"
        );
    }

    report.write_to(output)?;
    output.flush()?;
    Ok(Outcome::Reported(report))
}
