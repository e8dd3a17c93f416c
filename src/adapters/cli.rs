use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{Evaluation, Query};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater properties (UNESCO 1983), optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON document {\"query\": {...}}; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON query, e.g. {\"property\":\"depth\",\"pressure\":1000,\"latitude\":45} (overrides --input)"
    )]
    query_json: Option<String>,
}

#[derive(serde::Deserialize)]
struct CmdInput {
    query: Query,
}

fn parse_inline_query(query_json: &str) -> Result<Query, AppError> {
    serde_json::from_str(query_json).map_err(|source| AppError::ParseQueryJson { source })
}

fn parse_cmd_input_doc(doc: &str) -> Result<Query, AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok(parsed.query)
}

pub fn parse_query(args: &Args) -> Result<Query, AppError> {
    match (&args.query_json, &args.input) {
        (Some(query_json), _) => parse_inline_query(query_json),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

pub fn print_output(out: &Evaluation, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("{}: {:.6} {}", out.property, out.value, out.unit);
        if let Some(sigma) = out.sigma {
            println!("sigma: {:.6} kg/m^3", sigma);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_query_defaults_pressures_to_surface() {
        let q = parse_inline_query(
            r#"{"property": "potential_temperature", "salinity": 35, "temperature": 10, "pressure": 4000}"#,
        )
        .unwrap();
        assert_eq!(
            q,
            Query::PotentialTemperature {
                salinity: 35.0,
                temperature: 10.0,
                pressure: 4000.0,
                reference_pressure: 0.0,
            }
        );
    }

    #[test]
    fn unknown_property_is_rejected() {
        let err = parse_inline_query(r#"{"property": "viscosity", "salinity": 35}"#).unwrap_err();
        assert!(matches!(err, AppError::ParseQueryJson { .. }));
    }

    #[test]
    fn document_wraps_query() {
        let q = parse_cmd_input_doc(
            r#"{"query": {"property": "freezing_point", "salinity": 40, "pressure": 500}}"#,
        )
        .unwrap();
        assert_eq!(q.property(), "freezing_point");
    }
}
