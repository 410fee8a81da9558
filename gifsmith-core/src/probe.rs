//! Extraction of video metadata from the external prober's diagnostics.
//!
//! `avprobe` reports a file's technical parameters as free-form text on
//! stderr. Only two facts matter downstream: the frame size and the frame
//! rate. Parsing is a pure function over the captured text so it can be
//! exercised against literal fixtures without spawning a process.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoreError, CoreResult};
use crate::external;

/// External prober binary, invoked once per run.
pub const PROBE_TOOL: &str = "avprobe";

static RE_VIDEO_RES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Video:.* (\d+)x(\d+)[, ]").expect("valid resolution pattern"));
static RE_VIDEO_FPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Video:.* ([\d.]+) fps").expect("valid fps pattern"));

/// Technical parameters of the source video, fixed for the whole run.
///
/// `fps` holds the probed rate rounded to the nearest integer; fractional
/// rates such as 29.97 are stored as 30 and all downstream timing math
/// works from the rounded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

/// Invokes the external prober against `path` and parses its diagnostics.
pub fn probe_video(path: &Path) -> CoreResult<VideoMetadata> {
    log::info!("Probing '{}'", path.display());
    let diagnostics = external::capture_stderr(PROBE_TOOL, &[path.display().to_string()])?;
    parse_probe_output(&diagnostics, path)
}

/// Recovers resolution and frame rate from the prober's stderr text.
///
/// Returns [`CoreError::ProbeParse`] when either pattern is absent; no
/// partial metadata is ever produced.
pub fn parse_probe_output(diagnostics: &str, path: &Path) -> CoreResult<VideoMetadata> {
    let parse_failure = |what: &str| {
        CoreError::ProbeParse(format!(
            "no video {} found in decoder output for '{}'",
            what,
            path.display()
        ))
    };

    let res = RE_VIDEO_RES
        .captures(diagnostics)
        .ok_or_else(|| parse_failure("resolution"))?;
    let fps = RE_VIDEO_FPS
        .captures(diagnostics)
        .ok_or_else(|| parse_failure("frame rate"))?;

    let width: u32 = res[1].parse().map_err(|_| parse_failure("resolution"))?;
    let height: u32 = res[2].parse().map_err(|_| parse_failure("resolution"))?;
    let fps: f64 = fps[1].parse().map_err(|_| parse_failure("frame rate"))?;

    Ok(VideoMetadata {
        path: path.to_path_buf(),
        width,
        height,
        fps: fps.round() as u32,
    })
}
