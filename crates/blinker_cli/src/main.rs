//! Blinker CLI
//!
//! Simulate a blinking view on a virtual clock and print what a host would
//! draw on every frame.

use anyhow::{Context, Result};
use blinker_view::{BlinkerConfig, BlinkerView, ContentSize, Frame, Padding, ScaleMode, Viewport};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod terminal;

use terminal::TextCanvas;

#[derive(Parser)]
#[command(name = "blinker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Blinking content simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a view on a simulated clock and print every frame
    Run {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Config file (defaults to ./blinker.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scale mode, overriding the config file
        #[arg(short, long)]
        mode: Option<ScaleMode>,

        /// Blink interval in milliseconds, overriding the config file
        #[arg(short, long, allow_negative_numbers = true)]
        interval: Option<i64>,

        /// Hard on/off cut instead of a fade
        #[arg(long)]
        no_fade: bool,

        /// Do not start blinking on attach; use --toggle-at to start it
        #[arg(long)]
        manual: bool,

        /// Simulated run time in milliseconds
        #[arg(short, long, default_value = "2000")]
        duration: u64,

        /// Simulated frames per second
        #[arg(long, default_value = "20")]
        fps: u32,

        /// Times (ms) at which to toggle blinking, like tapping a button
        #[arg(long, value_delimiter = ',')]
        toggle_at: Vec<u64>,

        /// Detach the view during this window, e.g. 500-900
        #[arg(long, value_parser = parse_window)]
        detach: Option<(u64, u64)>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show where content lands in a viewport
    Layout {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Scale mode (all modes if omitted)
        #[arg(short, long)]
        mode: Option<ScaleMode>,

        /// Picture width in characters
        #[arg(long, default_value = "40")]
        columns: usize,

        /// Picture height in characters
        #[arg(long, default_value = "12")]
        rows: usize,
    },

    /// Write a default blinker.toml
    Init {
        /// Where to write the file
        #[arg(default_value = config::CONFIG_FILE)]
        path: PathBuf,
    },
}

#[derive(Args)]
struct GeometryArgs {
    /// Viewport width in pixels
    #[arg(long, default_value = "200")]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "100")]
    height: u32,

    /// Padding as one value or left,top,right,bottom
    #[arg(short, long, value_parser = parse_padding, default_value = "0")]
    padding: Padding,

    /// Intrinsic content size as WxH, or "unknown"
    #[arg(long, value_parser = parse_content, default_value = "50x50")]
    content: ContentSize,
}

impl GeometryArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_padding(self.padding)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One simulated frame, as emitted in JSON mode
#[derive(Serialize)]
struct FrameRecord {
    time_ms: u64,
    enabled: bool,
    running: bool,
    #[serde(flatten)]
    frame: Option<Frame>,
}

fn parse_padding(value: &str) -> Result<Padding, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid padding '{}': {}", value, e))?;
    match parts.as_slice() {
        [all] => Ok(Padding::uniform(*all)),
        [left, top, right, bottom] => Ok(Padding::new(*left, *top, *right, *bottom)),
        _ => Err(format!("padding needs 1 or 4 values, got {}", parts.len())),
    }
}

fn parse_content(value: &str) -> Result<ContentSize, String> {
    if value.eq_ignore_ascii_case("unknown") {
        return Ok(ContentSize::UNKNOWN);
    }
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("content size '{}' is not WxH", value))?;
    let width = width
        .trim()
        .parse()
        .map_err(|e| format!("invalid content width '{}': {}", width, e))?;
    let height = height
        .trim()
        .parse()
        .map_err(|e| format!("invalid content height '{}': {}", height, e))?;
    Ok(ContentSize::new(width, height))
}

fn parse_window(value: &str) -> Result<(u64, u64), String> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| format!("window '{}' is not START-END", value))?;
    let start: u64 = start.trim().parse().map_err(|e| format!("{}", e))?;
    let end: u64 = end.trim().parse().map_err(|e| format!("{}", e))?;
    if end < start {
        return Err(format!("window '{}' ends before it starts", value));
    }
    Ok((start, end))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            geometry,
            config,
            mode,
            interval,
            no_fade,
            manual,
            duration,
            fps,
            toggle_at,
            detach,
            format,
        } => {
            let mut settings = config::resolve(config.as_deref())?;
            if let Some(mode) = mode {
                settings.scale_mode = mode;
            }
            if let Some(interval) = interval {
                settings.interval_ms = interval;
            }
            if no_fade {
                settings.fade = false;
            }
            if manual {
                settings.autostart = false;
            }
            let timeline = Timeline {
                duration_ms: duration,
                fps,
                toggle_at,
                detach,
            };
            cmd_run(settings, &geometry, &timeline, format)
        }

        Commands::Layout {
            geometry,
            mode,
            columns,
            rows,
        } => cmd_layout(&geometry, mode, columns, rows),

        Commands::Init { path } => cmd_init(&path),
    }
}

/// Scripted host events for a simulated run
struct Timeline {
    duration_ms: u64,
    fps: u32,
    toggle_at: Vec<u64>,
    detach: Option<(u64, u64)>,
}

impl Timeline {
    fn frame_ms(&self) -> u64 {
        (1000 / u64::from(self.fps.max(1))).max(1)
    }

    fn should_be_attached(&self, time_ms: u64) -> bool {
        match self.detach {
            Some((start, end)) => time_ms < start || time_ms >= end,
            None => true,
        }
    }
}

fn cmd_run(
    settings: BlinkerConfig,
    geometry: &GeometryArgs,
    timeline: &Timeline,
    format: OutputFormat,
) -> Result<()> {
    let mut view = BlinkerView::new(settings.clone())
        .context("Invalid blinker settings")?
        .with_content(geometry.content);

    info!(
        "Running {} ms at {} fps: mode={} interval={}ms fade={} autostart={}",
        timeline.duration_ms,
        timeline.fps,
        settings.scale_mode,
        settings.interval_ms,
        settings.fade,
        settings.autostart
    );

    view.on_layout_changed(geometry.viewport());
    view.on_attach();

    let mut toggles = timeline.toggle_at.clone();
    toggles.sort_unstable();
    let mut toggles = toggles.into_iter().peekable();

    let frame_ms = timeline.frame_ms();
    let mut canvas = TextCanvas::new();
    let mut time_ms = 0;
    while time_ms <= timeline.duration_ms {
        while toggles.next_if(|&at| at <= time_ms).is_some() {
            let enabled = view.toggle();
            info!("{} ms: toggled, blinking={}", time_ms, enabled);
        }

        let attached = timeline.should_be_attached(time_ms);
        if attached != view.is_attached() {
            if attached {
                view.on_attach();
            } else {
                view.on_detach();
            }
            info!("{} ms: attached={}", time_ms, attached);
        }

        if time_ms > 0 {
            view.tick(Duration::from_millis(frame_ms));
        }

        canvas.begin();
        view.render(&mut canvas);
        match format {
            OutputFormat::Text => {
                println!("{:>6} ms {}", time_ms, canvas.status_line(24));
            }
            OutputFormat::Json => {
                let record = FrameRecord {
                    time_ms,
                    enabled: view.is_enabled(),
                    running: view.is_running(),
                    frame: canvas.last(),
                };
                println!("{}", serde_json::to_string(&record)?);
            }
        }

        time_ms += frame_ms;
    }

    Ok(())
}

fn cmd_layout(
    geometry: &GeometryArgs,
    mode: Option<ScaleMode>,
    columns: usize,
    rows: usize,
) -> Result<()> {
    let viewport = geometry.viewport();
    let modes = match mode {
        Some(mode) => vec![mode],
        None => ScaleMode::ALL.to_vec(),
    };

    for mode in modes {
        let mut view = BlinkerView::new(BlinkerConfig::default().scale_mode(mode))?
            .with_content(geometry.content);
        view.on_layout_changed(viewport);

        let mut canvas = TextCanvas::new();
        view.render(&mut canvas);
        match view.bounds() {
            Some(bounds) => println!("{}: {}", mode, bounds),
            None => println!("{}: (nothing drawn)", mode),
        }
        for line in canvas.picture(&viewport, columns, rows) {
            println!("{}", line);
        }
        println!();
    }

    Ok(())
}

fn cmd_init(path: &Path) -> Result<()> {
    config::write_default(path)?;
    info!("Wrote {}", path.display());
    Ok(())
}
