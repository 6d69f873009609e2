use clap::{Parser, Subcommand};

/// Weather forecast bucketing and chart projection tool
#[derive(Parser, Debug)]
#[command(name = "wxchart", version)]
#[command(about = "Split hourly weather forecasts into chartable days")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a forecast payload into day buckets and a current summary
    Normalize(NormalizeArgs),
    /// Project one day of a forecast into chart series
    Chart(ChartArgs),
    /// Describe WMO weather codes
    Describe(DescribeArgs),
    /// Turn a radar manifest into tile layers
    Radar(RadarArgs),
    /// Build the forecast request URL for a map point
    ForecastUrl(ForecastUrlArgs),
    /// List timezone picker options
    Timezones(TimezonesArgs),
}

#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    /// Forecast payload file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Forecast payload file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Zero-based day index (defaults to the first day)
    #[arg(short, long)]
    pub day: Option<usize>,

    /// Include relative humidity series
    #[arg(long)]
    pub humidity: bool,

    /// Include weather code series
    #[arg(long)]
    pub weather_code: bool,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct DescribeArgs {
    /// Weather codes to describe (all known codes when omitted)
    #[arg(allow_negative_numbers = true)]
    pub codes: Vec<i64>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct RadarArgs {
    /// Radar manifest file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Read from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Frames to use: past, nowcast
    #[arg(long, default_value = "nowcast")]
    pub frames: String,

    /// Tile size in pixels
    #[arg(long, default_value_t = 256)]
    pub tile_size: u32,

    /// Layer opacity (0.0 - 1.0)
    #[arg(long, default_value_t = 0.5)]
    pub opacity: f64,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ForecastUrlArgs {
    /// Latitude of the map point
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the map point
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// IANA timezone or "auto"
    #[arg(short, long)]
    pub tz: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct TimezonesArgs {
    /// Reference instant for offsets (RFC3339, defaults to now)
    #[arg(long)]
    pub at: Option<String>,

    /// Only list timezones whose name contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
