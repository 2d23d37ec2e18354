//! mapopts - command-line companion to the map-options library
//!
//! Imports option records from JSON attribute files, converts them between
//! record formats and prints them in a readable form.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use map_options::{
    import_from, import_json_file, Attribute, AttributeSet, MapOptions, RecordFormat,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Headerless positional layout
    Legacy,
    /// Positional layout behind a magic and version header
    Versioned,
    /// JSON rendering, for inspection
    Json,
}

impl From<Format> for RecordFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Legacy => RecordFormat::Legacy,
            Format::Versioned => RecordFormat::Versioned,
            Format::Json => RecordFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "mapopts")]
#[command(about = "Import, convert and inspect map option records", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import options from a JSON attribute file
    Import {
        /// Flat JSON object keyed by attribute name
        attributes: PathBuf,

        /// Display density used to convert dp to pixels
        #[arg(long, default_value = "1.0")]
        density: f32,

        /// Write the encoded record to this file; a missing extension is
        /// taken from the format
        #[arg(long)]
        out: Option<PathBuf>,

        /// Record format used with --out
        #[arg(long, value_enum, default_value = "legacy")]
        format: Format,
    },
    /// Decode and print a stored record
    Decode {
        record: PathBuf,

        #[arg(long, value_enum, default_value = "legacy")]
        format: Format,
    },
    /// Print the options imported from an empty attribute set
    Defaults {
        #[arg(long, default_value = "1.0")]
        density: f32,
    },
    /// List every known attribute with its value type
    Attributes,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Import {
            attributes,
            density,
            out,
            format,
        } => {
            let options = import_json_file(&attributes, density)
                .with_context(|| format!("failed to import {}", attributes.display()))?;
            print_options(&options);

            if let Some(out) = out {
                let format = RecordFormat::from(format);
                let out = record_path(out, format);
                let bytes = format.encode(&options)?;
                fs::write(&out, &bytes)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                log::info!("wrote {} bytes to {}", bytes.len(), out.display());
            }
        }
        Command::Decode { record, format } => {
            let bytes =
                fs::read(&record).with_context(|| format!("failed to read {}", record.display()))?;
            let options = RecordFormat::from(format)
                .decode(&bytes)
                .with_context(|| format!("failed to decode {}", record.display()))?;
            print_options(&options);
        }
        Command::Defaults { density } => {
            let options = import_from(AttributeSet::new(), density)?;
            print_options(&options);
        }
        Command::Attributes => {
            for attribute in Attribute::ALL {
                println!("{:<34} {:?}", attribute.name(), attribute.kind());
            }
        }
    }
    Ok(())
}

fn record_path(mut path: PathBuf, format: RecordFormat) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(format.file_extension());
    }
    path
}

fn fmt_edges(edges: Option<[i32; 4]>) -> String {
    match edges {
        Some([left, top, right, bottom]) => format!("l={} t={} r={} b={}", left, top, right, bottom),
        None => "unset".to_string(),
    }
}

fn fmt_image(image: Option<map_options::ImageHandle>) -> String {
    image.map_or_else(|| "unset".to_string(), |handle| handle.to_string())
}

#[allow(deprecated)]
fn print_options(options: &MapOptions) {
    match options.camera() {
        Some(camera) => println!(
            "camera:       {:.6}, {:.6} zoom={} bearing={} tilt={}",
            camera.target.lat, camera.target.lng, camera.zoom, camera.bearing, camera.tilt
        ),
        None => println!("camera:       unset"),
    }
    println!("debug:        {}", options.debug_active());
    println!(
        "compass:      enabled={} gravity={:#x} margins {}",
        options.compass_enabled(),
        options.compass_gravity(),
        fmt_edges(options.compass_margins())
    );
    println!(
        "logo:         enabled={} gravity={:#x} margins {}",
        options.logo_enabled(),
        options.logo_gravity(),
        fmt_edges(options.logo_margins())
    );
    println!(
        "attribution:  enabled={} gravity={:#x} margins {} tint={:#010x}",
        options.attribution_enabled(),
        options.attribution_gravity(),
        fmt_edges(options.attribution_margins()),
        options.attribution_tint_color()
    );
    println!("zoom:         {} ..= {}", options.min_zoom(), options.max_zoom());
    if !options.has_valid_zoom_range() {
        log::warn!("minimum zoom is above maximum zoom");
    }
    println!(
        "gestures:     rotate={} scroll={} tilt={} zoom={} controls={}",
        options.rotate_gestures_enabled(),
        options.scroll_gestures_enabled(),
        options.tilt_gestures_enabled(),
        options.zoom_gestures_enabled(),
        options.zoom_controls_enabled()
    );
    println!("location:     enabled={}", options.location_enabled());
    println!(
        "  images:     foreground={} bearing={} background={}",
        fmt_image(options.location_foreground_image()),
        fmt_image(options.location_foreground_bearing_image()),
        fmt_image(options.location_background_image())
    );
    println!(
        "  tints:      foreground={:#010x} background={:#010x} accuracy={:#010x} alpha={}",
        options.location_foreground_tint_color(),
        options.location_background_tint_color(),
        options.location_accuracy_tint_color(),
        options.location_accuracy_alpha()
    );
    println!("  padding:    {}", fmt_edges(options.location_background_padding()));
    println!("style:        {}", options.style_url().unwrap_or("unset"));
    println!("access token: {}", options.access_token().map_or("unset", |_| "set"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_extension() {
        assert_eq!(
            record_path(PathBuf::from("theme"), RecordFormat::Versioned),
            PathBuf::from("theme.mopt")
        );
        assert_eq!(
            record_path(PathBuf::from("out/theme"), RecordFormat::Json),
            PathBuf::from("out/theme.json")
        );
        assert_eq!(
            record_path(PathBuf::from("theme.dat"), RecordFormat::Legacy),
            PathBuf::from("theme.dat")
        );
    }
}
