// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::{anyhow, Context, Result};
use aqcore::brush::{BrushKind, BrushSettings};
use aqcore::paint::{Color, PixelFormat, Surface};
use std::{fs, path::Path, process::ExitCode, str::FromStr};
use tracing::{info, Level};

mod flags;
mod stroke;

use stroke::Stroke;

const DEFAULT_CANVAS_SIZE: usize = 256;

fn list_brushes() {
    for kind in BrushKind::ALL {
        let brush = kind.create();
        println!(
            "{} ({}): features {:?}, defaults {}",
            brush.name(),
            brush.display_name(),
            brush.features(),
            brush.default_settings().to_json()
        );
    }
}

fn parse_color(s: &str) -> Result<Color> {
    Color::from_str(s).map_err(|e| anyhow!("invalid color '{s}': {e}"))
}

fn main() -> ExitCode {
    let flags = flags::AquarelleRender::from_env_or_exit();

    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(if flags.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if flags.list_brushes {
        list_brushes();
        return ExitCode::SUCCESS;
    }

    let out = match output_path(&flags) {
        Ok(out) => out,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    match render(&flags, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Check that there is something to render and somewhere to put it
fn output_path(flags: &flags::AquarelleRender) -> Result<&Path, &'static str> {
    let out = flags
        .out
        .as_deref()
        .ok_or("No output file given, use -o/--out")?;
    if flags.strokes.is_empty() {
        return Err("No strokes given");
    }
    Ok(out)
}

fn brush_settings(flags: &flags::AquarelleRender) -> Result<BrushSettings> {
    let mut settings = BrushSettings::new();

    if let Some(path) = &flags.settings {
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        let loaded = BrushSettings::from_json(&json)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        settings.merge(&loaded);
    }

    if let Some(color) = &flags.color {
        settings.insert("color", parse_color(color)?.to_string());
    }
    for (key, value) in [
        ("width", flags.width),
        ("thickness", flags.thickness),
        ("water", flags.water),
        ("extend", flags.extend),
        ("mixin", flags.mixin),
    ] {
        if let Some(v) = value {
            settings.insert(key, v);
        }
    }

    Ok(settings)
}

fn render(flags: &flags::AquarelleRender, out: &Path) -> Result<()> {
    let strokes = flags
        .strokes
        .iter()
        .map(|s| Stroke::parse(s))
        .collect::<Result<Vec<_>>>()?;

    let width = flags.canvas_width.unwrap_or(DEFAULT_CANVAS_SIZE);
    let height = flags.canvas_height.unwrap_or(DEFAULT_CANVAS_SIZE);
    let background = match &flags.background {
        Some(bg) => parse_color(bg)?,
        None => Color::WHITE,
    };
    let format = if flags.premultiplied {
        PixelFormat::Argb32Premultiplied
    } else {
        PixelFormat::Argb32
    };

    let mut brush = flags.brush.unwrap_or(BrushKind::Water).create();
    brush.apply_settings(&brush_settings(flags)?);
    info!("Painting with {} {}", brush.name(), brush.settings().to_json());

    let mut canvas = Surface::filled(width, height, format, background);
    for stroke in &strokes {
        stroke.paint(brush.as_mut(), &mut canvas);
    }

    let img = image::RgbaImage::from_raw(width as u32, height as u32, canvas.to_rgba8())
        .ok_or_else(|| anyhow!("canvas size {width}x{height} is too large"))?;
    img.save(out)
        .with_context(|| format!("could not write {}", out.display()))?;
    info!("Wrote {}", out.display());

    Ok(())
}
