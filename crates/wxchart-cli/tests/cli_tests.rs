use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

fn wxchart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wxchart"))
        .args(args)
        .output()
        .expect("Failed to execute wxchart")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "wxchart failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn normalize_json_keeps_bucket_order() {
    let path = fixture("day_boundary.json");
    let output = wxchart(&[
        "normalize",
        "--input",
        path.to_str().unwrap(),
        "--output-format",
        "json",
    ]);
    let value = stdout_json(&output);

    let buckets = value["daily_buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0]["label"], "Sat Jan 1");
    assert_eq!(buckets[0]["hourly_temperature"], serde_json::json!([6.1]));
    assert_eq!(buckets[1]["label"], "Sun Jan 2");
    assert_eq!(buckets[1]["hourly_time"], serde_json::json!(["12 AM", "1 AM"]));
    assert_eq!(value["current_summary"]["weather_description"], "Rain: Slight");
}

#[test]
fn chart_selects_requested_day() {
    let path = fixture("day_boundary.json");
    let output = wxchart(&[
        "chart",
        "--input",
        path.to_str().unwrap(),
        "--day",
        "1",
        "--humidity",
    ]);
    let value = stdout_json(&output);

    assert_eq!(value["title"], "Sun Jan 2");
    assert_eq!(value["labels"], serde_json::json!(["12 AM", "1 AM"]));
    let series = value["series"].as_array().unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0]["name"], "Temperature");
    assert_eq!(series[1]["values"], serde_json::json!([40.0, 70.0]));
    assert_eq!(series[2]["name"], "Humidity");
}

#[test]
fn chart_day_out_of_range_is_input_error() {
    let path = fixture("berlin_sample.json");
    let output = wxchart(&[
        "chart",
        "--input",
        path.to_str().unwrap(),
        "--day",
        "7",
    ]);

    assert_eq!(output.status.code(), Some(2));
    let envelope: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["status"], "invalid_selection");
    assert_eq!(envelope["exit_code"], 2);
}

#[test]
fn chart_on_empty_forecast_prints_null() {
    let path = fixture("empty_series.json");
    let output = wxchart(&["chart", "--input", path.to_str().unwrap()]);
    assert_eq!(stdout_json(&output), Value::Null);
}

#[test]
fn length_mismatch_fails_fast() {
    let dir = std::env::temp_dir().join(format!("wxchart-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mismatch.json");
    fs::write(
        &path,
        r#"{
            "latitude": 0, "longitude": 0, "timezone": "UTC",
            "hourly": {
                "time": ["2022-01-01T00:00", "2022-01-01T01:00"],
                "temperature_2m": [1, 2],
                "relativehumidity_2m": [50],
                "precipitation_probability": [0, 0],
                "weathercode": [0, 0]
            },
            "current_weather": {"time": "2022-01-01T00:00", "temperature": 1, "weathercode": 0}
        }"#,
    )
    .unwrap();

    let output = wxchart(&[
        "normalize",
        "--input",
        path.to_str().unwrap(),
        "--output-format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let envelope: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["status"], "length_mismatch");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_file_is_runtime_error() {
    let output = wxchart(&["normalize", "--input", "/nonexistent/forecast.json"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open file"));
}

#[test]
fn describe_known_and_unknown_codes() {
    let output = wxchart(&["describe", "0", "99", "-1", "1000"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0: Clear sky\n99: Thunderstorm with heavy hail\n-1: (unknown)\n1000: (unknown)\n"
    );
}

#[test]
fn describe_without_codes_lists_table() {
    let output = wxchart(&["describe", "--output-format", "json"]);
    let value = stdout_json(&output);
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 28);
    assert!(entries.iter().all(|e| e["known"] == true));
}

#[test]
fn radar_nowcast_layers() {
    let path = fixture("radar/weather-maps.json");
    let output = wxchart(&["radar", "--input", path.to_str().unwrap()]);
    let value = stdout_json(&output);

    let layers = value.as_array().unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["id"], "rainviewer_/v2/radar/nowcast_3b6d1f0a");
    assert_eq!(
        layers[0]["tile_url"],
        "https://tilecache.rainviewer.com/v2/radar/nowcast_3b6d1f0a/256/{z}/{x}/{y}/2/1_1.png"
    );
}

#[test]
fn radar_past_frames_text() {
    let path = fixture("radar/weather-maps.json");
    let output = wxchart(&[
        "radar",
        "--input",
        path.to_str().unwrap(),
        "--frames",
        "past",
        "--output-format",
        "text",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.lines().next().unwrap();
    assert_eq!(
        first,
        "2022-12-31T23:50:00Z https://tilecache.rainviewer.com/v2/radar/1672530600/256/{z}/{x}/{y}/2/1_1.png"
    );
}

#[test]
fn forecast_url_for_negative_longitude() {
    let output = wxchart(&[
        "forecast-url",
        "--lat",
        "49.246292",
        "--lng",
        "-123.116226",
        "--tz",
        "America/Vancouver",
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim_end(),
        "https://api.open-meteo.com/v1/forecast?latitude=49.246292&longitude=-123.116226\
         &current_weather=true&timezone=America%2FVancouver\
         &hourly=temperature_2m%2Crelativehumidity_2m%2Cprecipitation_probability%2Cweathercode"
    );
}

#[test]
fn forecast_url_rejects_unknown_timezone() {
    let output = wxchart(&[
        "forecast-url",
        "--lat",
        "1",
        "--lng",
        "1",
        "--tz",
        "Nowhere/Special",
        "--output-format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(2));
    let envelope: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["status"], "invalid_timezone");
}

#[test]
fn timezones_filter_and_offset() {
    let output = wxchart(&[
        "timezones",
        "--at",
        "2026-07-01T12:00:00Z",
        "--filter",
        "berlin",
    ]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "(UTC+02:00) Europe/Berlin\n"
    );
}

#[test]
fn chart_series_carry_reported_units() {
    let path = fixture("fahrenheit_units.json");
    let output = wxchart(&["chart", "--input", path.to_str().unwrap()]);
    let value = stdout_json(&output);

    assert_eq!(value["title"], "Mon Jul 4");
    assert_eq!(value["series"][0]["unit"], "°F");
    assert_eq!(value["series"][0]["values"], serde_json::json!([84.2, 86.5]));
    assert_eq!(value["series"][1]["unit"], "%");
}
