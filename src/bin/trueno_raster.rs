//! trueno-raster: print the lattice points of a line or circle.
//!
//! Run: `trueno-raster line 0 0 5 2` or `trueno-raster circle 0 0 5 --half upper`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use trueno_raster::config::Config;
use trueno_raster::prelude::*;

/// trueno-raster: integer rasterization of lines and circles
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize lines and circles onto the integer lattice", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Config file path (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write a PNG preview of the points
    #[arg(long, global = true)]
    png: Option<PathBuf>,

    /// Print an ASCII preview instead of the point list
    #[arg(long, global = true)]
    ascii: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    shape: Shape,
}

#[derive(Subcommand, Debug)]
enum Shape {
    /// Rasterize the segment (X0, Y0) → (X1, Y1)
    #[command(allow_negative_numbers = true)]
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,

        /// midpoint, dda or bresenham (overrides the config file)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<LineAlgorithm>,
    },
    /// Rasterize the circle of radius R around (CX, CY)
    #[command(allow_negative_numbers = true)]
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,

        /// Keep only points in this half-plane of the centre (upper, lower, left, right)
        #[arg(long, value_parser = parse_half_plane)]
        half: Option<HalfPlane>,

        /// Drop repeated points, keeping first occurrence
        #[arg(long)]
        unique: bool,
    },
}

fn parse_algorithm(s: &str) -> std::result::Result<LineAlgorithm, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn parse_half_plane(s: &str) -> std::result::Result<HalfPlane, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

fn verbosity(count: u8) -> Option<LevelFilter> {
    match count {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    let level = verbosity(cli.verbose).unwrap_or_else(|| config.level_filter());
    SimpleLogger::new().with_level(level).init()?;

    let points = rasterize(&cli.shape, &config)?;
    log::info!("{} points", points.len());

    if let Some(path) = &cli.png {
        let fb = Framebuffer::from_points(&points, config.padding, config.foreground, config.background)?;
        PngEncoder::write_to_file(&fb, path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.ascii {
        let fb = Framebuffer::from_points(&points, config.padding, Rgba::WHITE, Rgba::BLACK)?;
        TerminalEncoder::new().print(&fb);
        return Ok(());
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for p in &points {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    out.flush()?;

    Ok(())
}

fn rasterize(shape: &Shape, config: &Config) -> Result<Vec<Point>> {
    let points = match *shape {
        Shape::Line { x0, y0, x1, y1, algorithm } => {
            let algorithm = algorithm.unwrap_or(config.algorithm);
            rasterize_line(Point::new(x0, y0), Point::new(x1, y1), algorithm)?
        }
        Shape::Circle { cx, cy, radius, half, unique } => {
            let center = Point::new(cx, cy);
            let mut points = midpoint_circle(center, radius)?;
            if let Some(half) = half {
                points = retain_half_plane(&points, center, half);
            }
            if unique {
                points = unique_points(&points);
            }
            points
        }
    };
    Ok(points)
}
