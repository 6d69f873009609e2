use std::process::ExitCode;

use serde::Serialize;
use wxchart_core::weather_code::{describe, known_codes};

use crate::cli::DescribeArgs;
use crate::error::{CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::print_json;

#[derive(Debug, Serialize)]
struct CodeDescription {
    code: i64,
    description: &'static str,
    known: bool,
}

pub fn run_describe(args: DescribeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let codes: Vec<i64> = if args.codes.is_empty() {
        known_codes().collect()
    } else {
        args.codes
    };

    let results: Vec<CodeDescription> = codes
        .into_iter()
        .map(|code| {
            let description = describe(code);
            CodeDescription {
                code,
                description,
                known: !description.is_empty(),
            }
        })
        .collect();

    match output_format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => {
            for result in &results {
                if result.known {
                    println!("{}: {}", result.code, result.description);
                } else {
                    println!("{}: (unknown)", result.code);
                }
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
