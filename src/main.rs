use std::path::PathBuf;
use std::process;

use clap::Parser;
use dial_clock::logging::{init_logging, LoggingConfig};
use dial_clock::{
    load_font, AnalogClock, ClockConfig, ClockError, Color, LocalTime, MeasureSpec, SampledTime,
    TimeSource, WindowOptions,
};

/// Analog clock showing the local time.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Width in logical pixels.
    #[arg(long, default_value_t = 300)]
    width: u32,

    /// Height in logical pixels.
    #[arg(long, default_value_t = 300)]
    height: u32,

    /// Treat --width/--height as upper bounds and shrink to the wrap-content size.
    #[arg(long)]
    wrap_content: bool,

    /// Keep the dial a true circle instead of stretching it to the window.
    #[arg(long)]
    circular: bool,

    /// TrueType/OpenType font used for the numerals.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Dial background color (#rrggbb).
    #[arg(long)]
    background: Option<Color>,

    /// Dial border color (#rrggbb).
    #[arg(long)]
    border: Option<Color>,

    /// Color of all three hands (#rrggbb).
    #[arg(long)]
    hands: Option<Color>,

    /// Render a single frame to this PNG file instead of opening a window.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Time shown in the snapshot (HH:MM[:SS]); defaults to now.
    #[arg(long, requires = "snapshot")]
    at: Option<SampledTime>,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn clock_config(&self) -> ClockConfig {
        let mut config = ClockConfig::default();
        if let Some(color) = self.background {
            config.color_background = color;
        }
        if let Some(color) = self.border {
            config.color_border = color;
        }
        if let Some(color) = self.hands {
            config.color_second_hand = color;
            config.color_minute_hand = color;
            config.color_hour_hand = color;
        }
        config
    }

    fn size_specs(&self) -> (MeasureSpec, MeasureSpec) {
        if self.wrap_content {
            (MeasureSpec::at_most(self.width), MeasureSpec::at_most(self.height))
        } else {
            (MeasureSpec::exact(self.width), MeasureSpec::exact(self.height))
        }
    }
}

fn run(args: Args) -> Result<(), ClockError> {
    let mut clock = AnalogClock::new(args.clock_config());
    clock.set_circular(args.circular);
    let (width, height) = args.size_specs();

    if let Some(path) = &args.snapshot {
        let font = args.font.as_deref().map(load_font).transpose()?;
        let (w, h) = clock.measure(width, height);
        let time = args.at.unwrap_or_else(|| LocalTime.now());
        return clock.snapshot(w, h, time, font.as_ref(), Color::WHITE, path);
    }

    let options = WindowOptions {
        width,
        height,
        font_path: args.font.clone(),
        ..WindowOptions::default()
    };
    clock.show(&options)
}

fn main() {
    let args = Args::parse();
    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    if let Err(err) = run(args) {
        log::error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_clock::MeasureMode;

    #[test]
    fn color_flags_override_config() {
        let args = Args::parse_from([
            "dial-clock",
            "--background",
            "#000000",
            "--hands",
            "#ff0000",
        ]);
        let config = args.clock_config();
        assert_eq!(config.color_background, Color::BLACK);
        assert_eq!(config.color_hour_hand, Color::new(0xff, 0, 0));
        assert_eq!(config.color_second_hand, Color::new(0xff, 0, 0));
        assert_eq!(config.color_border, Color::BLACK);
    }

    #[test]
    fn wrap_content_switches_to_at_most() {
        let args = Args::parse_from(["dial-clock", "--width", "640", "--wrap-content"]);
        let (w, h) = args.size_specs();
        assert_eq!(w.mode, MeasureMode::AtMost);
        assert_eq!(h.size, 300);
    }

    #[test]
    fn at_requires_snapshot() {
        assert!(Args::try_parse_from(["dial-clock", "--at", "10:00"]).is_err());
        let args = Args::try_parse_from(["dial-clock", "--snapshot", "out.png", "--at", "15:30"])
            .unwrap();
        assert_eq!(args.at, Some(SampledTime::new(3, 30, 0)));
    }
}
