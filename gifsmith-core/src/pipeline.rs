//! End-to-end orchestration of a single conversion run.
//!
//! The pipeline is fully synchronous: probe, extract, sample, compose,
//! each stage blocking on the previous one. The working directory is
//! owned exclusively by the run and removed on every exit path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::{self, COMPOSE_TOOL, EXTRACT_TOOL};
use crate::crop::CropArea;
use crate::error::{CoreError, CoreResult};
use crate::external;
use crate::probe::{self, PROBE_TOOL, VideoMetadata};
use crate::sampling::{self, FrameSkip, SamplingOptions};
use crate::temp_files;

const WORK_DIR_PREFIX: &str = "gifsmith_";

/// Everything one conversion run needs, assembled by the caller.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Seek offset into the source, in seconds.
    pub start: Option<f64>,
    /// Length of the extracted segment, in seconds.
    pub duration: Option<u32>,
    pub scale: f64,
    pub crop: Option<CropArea>,
    pub frameskip: Option<FrameSkip>,
    pub speed: f64,
    pub reverse: bool,
    pub loop_output: bool,
    pub fuzz: Option<u32>,
    pub optimize: bool,
}

/// What a successful run produced, for reporting.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub metadata: VideoMetadata,
    pub extracted_frames: usize,
    pub used_frames: usize,
    pub effective_fps: f64,
    pub output_size: u64,
}

/// Runs the whole pipeline: probe, extract, sample, compose.
pub fn run(config: &RunConfig) -> CoreResult<RunSummary> {
    for tool in [PROBE_TOOL, EXTRACT_TOOL, COMPOSE_TOOL] {
        external::check_dependency(tool)?;
    }

    let metadata = probe::probe_video(&config.input)?;
    log::info!(
        "Source: {}x{} at {} fps",
        metadata.width,
        metadata.height,
        metadata.fps
    );

    let work_dir = temp_files::create_work_dir(WORK_DIR_PREFIX)?;
    log::info!("Working directory: '{}'", work_dir.path().display());

    let resolved_crop = config
        .crop
        .as_ref()
        .map(|crop| crop.resolve(metadata.width, metadata.height));

    log::info!("Extracting frames...");
    let extract_args = commands::build_extract_args(
        &metadata,
        config.start,
        config.duration,
        resolved_crop.as_ref(),
        config.scale,
        work_dir.path(),
    );
    external::run_tool(EXTRACT_TOOL, &extract_args)?;

    let frames = list_frames(work_dir.path())?;
    log::info!("Got {} frames", frames.len());
    if frames.is_empty() {
        return Err(CoreError::ExternalTool(format!(
            "{EXTRACT_TOOL} produced no frames for '{}'",
            config.input.display()
        )));
    }

    let options = SamplingOptions {
        frameskip: config.frameskip,
        speed: config.speed,
        reverse: config.reverse,
        loop_output: config.loop_output,
        fuzz: config.fuzz,
        optimize: config.optimize,
        fps: metadata.fps,
    };
    let selection = sampling::sample(&frames, &options)?;
    log::info!(
        "Using {} of {} frames at {:.2} fps",
        selection.frames.len(),
        frames.len(),
        selection.effective_fps
    );

    log::info!("Making output gif: '{}'", config.output.display());
    let compose_args =
        commands::build_compose_args(&selection, work_dir.path(), &config.output, &options);
    external::run_tool(COMPOSE_TOOL, &compose_args)?;

    let output_size = fs::metadata(&config.output)?.len();
    Ok(RunSummary {
        metadata,
        extracted_frames: frames.len(),
        used_frames: selection.frames.len(),
        effective_fps: selection.effective_fps,
        output_size,
    })
}

/// Lists the frame files the extractor left behind, in frame order.
///
/// The zero-padded counter in the filename template makes a plain
/// lexicographic sort sufficient.
fn list_frames(dir: &Path) -> CoreResult<Vec<String>> {
    let mut frames = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            frames.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    frames.sort();
    Ok(frames)
}
