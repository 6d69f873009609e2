use std::process::ExitCode;

use tracing::info;
use wxchart_core::radar::{TileOptions, tile_layers};

use crate::cli::RadarArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{format_epoch_utc, load_manifest, parse_frame_set, print_json};

pub fn run_radar(args: RadarArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let frames = parse_frame_set(&args.frames)?;

    if !(0.0..=1.0).contains(&args.opacity) {
        return Err(CliError::input(format!(
            "Invalid opacity {}. Expected a value between 0.0 and 1.0",
            args.opacity
        )));
    }
    if args.tile_size == 0 {
        return Err(CliError::input("Invalid tile_size 0"));
    }

    let manifest = load_manifest(&args.input, args.stdin)?;
    let options = TileOptions {
        tile_size: args.tile_size,
        opacity: args.opacity,
        ..TileOptions::default()
    };

    let layers = tile_layers(&manifest, frames, options);
    info!(frames = %frames, layers = layers.len(), "Built radar tile layers");

    match output_format {
        OutputFormat::Json => print_json(&layers)?,
        OutputFormat::Text => {
            for layer in &layers {
                println!("{} {}", format_epoch_utc(layer.time), layer.tile_url);
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
