// gifsmith-cli/src/main.rs
//
// Command-line interface for the gifsmith pipeline. Defines the argument
// surface, routes structured values through the core parsers so CLI
// errors carry the same messages as the rest of the tool, and reports
// the outcome of a run.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gifsmith_core::{CoreError, CropArea, FrameSkip, RunConfig, format_size, parse_start_time};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert a segment of a video into an animated gif"
)]
struct Cli {
    /// Source video file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output gif path
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Start of the gif, in seconds (or M:S, H:M:S format). Defaults to
    /// the beginning of the video
    #[arg(short, long, value_name = "TIME", value_parser = parse_start_arg)]
    start: Option<f64>,

    /// Duration of the gif, in seconds
    #[arg(short, long, value_name = "SECONDS")]
    duration: Option<u32>,

    /// Looping gif?
    #[arg(short = 'l', long = "loop")]
    loop_output: bool,

    /// Ratio to scale the output
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Ratio of skipped frames in format A/B. Defaults to none skipped
    #[arg(long, value_name = "A/B", value_parser = parse_frameskip_arg)]
    frameskip: Option<FrameSkip>,

    /// Speed factor
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Do NOT optimize the resulting gif
    #[arg(long)]
    no_optimize: bool,

    /// Fuzz percentage for gif creation
    #[arg(short, long, value_name = "PERCENT")]
    fuzz: Option<u32>,

    /// Rectangular area to crop from the input, in format
    /// width:height:x:y. Accepts relative and absolute values
    #[arg(long, value_name = "W:H:X:Y", value_parser = parse_crop_arg)]
    crop: Option<CropArea>,

    /// Reverse frames?
    #[arg(short, long)]
    reverse: bool,
}

fn parse_start_arg(arg: &str) -> Result<f64, String> {
    parse_start_time(arg).map_err(|e| e.to_string())
}

fn parse_crop_arg(arg: &str) -> Result<CropArea, String> {
    arg.parse().map_err(|e: CoreError| e.to_string())
}

fn parse_frameskip_arg(arg: &str) -> Result<FrameSkip, String> {
    arg.parse().map_err(|e: CoreError| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RunConfig {
        input: cli.input,
        output: cli.output,
        start: cli.start,
        duration: cli.duration,
        scale: cli.scale,
        crop: cli.crop,
        frameskip: cli.frameskip,
        speed: cli.speed,
        reverse: cli.reverse,
        loop_output: cli.loop_output,
        fuzz: cli.fuzz,
        optimize: !cli.no_optimize,
    };

    match gifsmith_core::run(&config) {
        Ok(summary) => {
            println!(
                "Wrote '{}': {} of {} frames at {:.2} fps, {}",
                config.output.display(),
                summary.used_frames,
                summary.extracted_frames,
                summary.effective_fps,
                format_size(summary.output_size)
            );
        }
        Err(e) => {
            log::error!("gifsmith: {e}");
            process::exit(1);
        }
    }
}
