//! Core library for turning a segment of a video into an animated gif.
//!
//! The heavy lifting happens in external tools invoked as opaque
//! processes: `avprobe` reports the source's resolution and frame rate,
//! `avconv` extracts still frames into a scoped working directory, and
//! ImageMagick's `convert` assembles the selected frames into the final
//! animation. This crate owns everything deterministic in between:
//! parsing the prober's diagnostics, resolving crop rectangles, choosing
//! which frames to keep and at what playback rate, and building the exact
//! argument lists the tools run with.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use gifsmith_core::{RunConfig, run};
//! use std::path::PathBuf;
//!
//! let config = RunConfig {
//!     input: PathBuf::from("clip.mp4"),
//!     output: PathBuf::from("clip.gif"),
//!     start: Some(12.0),
//!     duration: Some(3),
//!     scale: 0.5,
//!     crop: None,
//!     frameskip: None,
//!     speed: 1.0,
//!     reverse: false,
//!     loop_output: true,
//!     fuzz: None,
//!     optimize: true,
//! };
//!
//! let summary = run(&config).expect("conversion failed");
//! println!("used {} frames", summary.used_frames);
//! ```

pub mod commands;
pub mod crop;
pub mod error;
pub mod external;
pub mod pipeline;
pub mod probe;
pub mod sampling;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use crop::{CropArea, ResolvedCrop};
pub use error::{CoreError, CoreResult};
pub use pipeline::{RunConfig, RunSummary, run};
pub use probe::{VideoMetadata, parse_probe_output};
pub use sampling::{FrameSelection, FrameSkip, SamplingOptions, sample, sample_range};
pub use utils::{format_size, parse_start_time};
