#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "std")]
use crate::error::AppError;
#[cfg(feature = "std")]
use crate::models::{Evaluation, Query};

/// Evaluate `query`, rejecting results that are not finite.
#[cfg(feature = "std")]
pub fn evaluate_checked(query: &Query) -> Result<Evaluation, AppError> {
    let out = query.evaluate();
    if out.is_finite() {
        Ok(out)
    } else {
        Err(AppError::NonFiniteResult {
            property: out.property,
        })
    }
}

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), AppError> {
    use crate::adapters::cli::{Args, parse_query, print_output};

    let args = Args::parse();
    let query = parse_query(&args)?;

    let out = evaluate_checked(&query)?;

    print_output(&out, &args)?;

    Ok(())
}
