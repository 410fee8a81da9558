//! Deterministic argument-list construction for the external tools.
//!
//! Both builders produce discrete tokens, never a concatenated shell
//! string, and the lists are stable for fixed inputs so tests can assert
//! on them directly. Neither builder checks that the binaries exist or
//! succeed; that is the pipeline's concern.

use std::path::Path;

use crate::crop::ResolvedCrop;
use crate::probe::VideoMetadata;
use crate::sampling::{FrameSelection, SamplingOptions};

/// External frame extractor binary.
pub const EXTRACT_TOOL: &str = "avconv";

/// External image-sequence compositor binary.
pub const COMPOSE_TOOL: &str = "convert";

/// Filename template handed to the extractor; expands to a 5-digit
/// zero-padded counter (frames00001.png, ...) so a lexicographic sort of
/// the working directory restores frame order.
pub const FRAME_PATTERN: &str = "frames%05d.png";

/// Builds the extractor invocation that writes numbered still frames into
/// `frames_dir`.
///
/// The output is scaled to `round(dimension * scale)` on both axes, where
/// the base dimensions come from the resolved crop when one is given and
/// from the source otherwise.
#[must_use]
pub fn build_extract_args(
    metadata: &VideoMetadata,
    start: Option<f64>,
    duration: Option<u32>,
    crop: Option<&ResolvedCrop>,
    scale: f64,
    frames_dir: &Path,
) -> Vec<String> {
    let mut args = Vec::new();

    if let Some(start) = start {
        args.push("-ss".to_string());
        args.push(start.to_string());
    }
    args.push("-i".to_string());
    args.push(metadata.path.display().to_string());
    if let Some(duration) = duration {
        args.push("-t".to_string());
        args.push(duration.to_string());
    }

    let (width, height) = match crop {
        Some(crop) => {
            args.push("-vf".to_string());
            args.push(format!("crop={}", crop.filter_argument()));
            (crop.width, crop.height)
        }
        None => (f64::from(metadata.width), f64::from(metadata.height)),
    };
    let scaled_width = (width * scale).round() as i64;
    let scaled_height = (height * scale).round() as i64;
    args.push("-s".to_string());
    args.push(format!("{scaled_width}x{scaled_height}"));

    args.push(frames_dir.join(FRAME_PATTERN).display().to_string());
    args
}

/// Builds the compositor invocation that assembles the selected frames
/// into the animated output.
///
/// The delay is the compositor's `1x<rate>` ticks-per-second encoding
/// with the effective rate at two decimal places. Frame paths appear
/// exactly in selection order, the output path last.
#[must_use]
pub fn build_compose_args(
    selection: &FrameSelection,
    frames_dir: &Path,
    output: &Path,
    options: &SamplingOptions,
) -> Vec<String> {
    let mut args = vec![
        "-delay".to_string(),
        format!("1x{:.2}", selection.effective_fps),
    ];

    if options.loop_output {
        args.push("-loop".to_string());
        args.push("0".to_string());
    }
    if let Some(fuzz) = options.fuzz {
        args.push("-fuzz".to_string());
        args.push(format!("{fuzz}%"));
    }
    if options.optimize {
        args.push("-layers".to_string());
        args.push("optimize".to_string());
    }

    args.extend(
        selection
            .frames
            .iter()
            .map(|frame| frames_dir.join(frame).display().to_string()),
    );
    args.push(output.display().to_string());
    args
}
