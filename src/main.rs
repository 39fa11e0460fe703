//! # Calendar Wallpaper CLI
//!
//! Command-line interface for rendering year calendar wallpapers.
//!
//! ## Usage
//!
//! ```bash
//! # List supported devices
//! calendar-wallpaper devices
//!
//! # Render today's wallpaper for an iPhone 15
//! calendar-wallpaper render --out wall.png
//!
//! # Render a specific day with red weekends and a blue premium background
//! calendar-wallpaper render --out wall.png --date 2026-03-10 --weekends red --bg-color blue
//!
//! # Serve wallpapers over HTTP
//! calendar-wallpaper serve --listen 0.0.0.0:8080
//! ```

use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

use calendar_wallpaper::{
    WallpaperError,
    device::DEVICES,
    render::{FaceCache, FileFontSource, RenderMode, Renderer, face_cache, fonts},
    server::{self, ServerConfig},
    theme::Theme,
    wallpaper::{Clock, FixedClock, RenderParams, SystemClock, WallpaperService, encode_png},
};

/// Calendar Wallpaper - Year-at-a-glance lock screen renderer
#[derive(Parser, Debug)]
#[command(name = "calendar-wallpaper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve wallpapers over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// TrueType font used for all text
        #[arg(long, default_value = fonts::DEFAULT_FONT_PATH)]
        font: PathBuf,

        /// Number of UI scales whose faces stay cached
        #[arg(long, default_value_t = face_cache::DEFAULT_CAPACITY)]
        cache_capacity: usize,
    },

    /// Render a single wallpaper to a PNG file
    Render {
        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        out: PathBuf,

        /// Device key (see `devices`)
        #[arg(long)]
        device: Option<String>,

        /// Month name language: en, ru
        #[arg(long)]
        lang: Option<String>,

        /// Weekend highlight: off, gray, green, blue, red
        #[arg(long)]
        weekends: Option<String>,

        /// Day marker style: dots, bars, numbers
        #[arg(long)]
        style: Option<String>,

        /// Background style: plain, gradient, noise, ios
        #[arg(long)]
        bg: Option<String>,

        /// Background color: palette name or #RRGGBB
        #[arg(long)]
        bg_color: Option<String>,

        /// UI size in percent (80-130)
        #[arg(long)]
        size: Option<i32>,

        /// UTC offset in whole hours
        #[arg(long, allow_hyphen_values = true)]
        timezone: Option<i32>,

        /// Render as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        date: Option<NaiveDate>,

        /// TrueType font used for all text
        #[arg(long, default_value = fonts::DEFAULT_FONT_PATH)]
        font: PathBuf,

        /// Render mode: months, or anything else for the background alone
        #[arg(long, default_value = "months")]
        mode: String,
    },

    /// List supported devices
    Devices,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), WallpaperError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            font,
            cache_capacity,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                font_path: font,
                face_cache_capacity: cache_capacity,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::Render {
            out,
            device,
            lang,
            weekends,
            style,
            bg,
            bg_color,
            size,
            timezone,
            date,
            font,
            mode,
        } => {
            let params = RenderParams {
                device,
                lang,
                weekends,
                style,
                timezone,
                size,
                bg,
                bg_color,
            };

            let clock: Arc<dyn Clock> = match date {
                // Noon keeps the date stable across any clamped offset
                Some(day) => Arc::new(FixedClock(
                    Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap_or_default()),
                )),
                None => Arc::new(SystemClock),
            };

            let faces = FaceCache::new(FileFontSource::new(&font), 1);
            let service = WallpaperService::new(clock, Renderer::new(Arc::new(faces)), Theme::IOS);

            let mut request = service.request(&params);
            request.mode = RenderMode::parse(&mode);

            info!(
                "Rendering {} ({}x{}) for {}...",
                request.device.name,
                request.device.width,
                request.device.height,
                request.now.date_naive()
            );
            let image = service.renderer().render(&request)?;
            std::fs::write(&out, encode_png(&image)?)?;
            println!("Saved to {}", out.display());
        }

        Commands::Devices => {
            println!("Available devices:");
            for d in DEVICES {
                println!("  {:<20} {:<22} {}x{}", d.key, d.name, d.width, d.height);
            }
        }
    }

    Ok(())
}
