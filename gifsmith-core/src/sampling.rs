//! Frame-set resampling.
//!
//! The extractor leaves an ordered set of still frames behind; the sampler
//! walks that set with a real-valued stride derived from the skip ratio
//! and computes the playback rate of the resulting sequence. The same
//! inputs always yield the same selection.

use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A `(skipped, every)` pair: out of every `every` frames, drop `skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSkip {
    pub skipped: u32,
    pub every: u32,
}

impl FrameSkip {
    /// No skipping: every frame is kept.
    pub const NONE: FrameSkip = FrameSkip {
        skipped: 0,
        every: 1,
    };

    /// Sampling stride induced by the ratio.
    ///
    /// `every == skipped` puts a zero in the denominator and is rejected,
    /// as is any pair that does not produce a positive stride.
    pub fn rate(&self) -> CoreResult<f64> {
        if self.every == self.skipped {
            return Err(CoreError::Config(format!(
                "frameskip {}/{} has a degenerate rate",
                self.skipped, self.every
            )));
        }
        let rate = f64::from(self.every) / (f64::from(self.every) - f64::from(self.skipped));
        if rate <= 0.0 {
            return Err(CoreError::Config(format!(
                "frameskip {}/{} does not produce a positive rate",
                self.skipped, self.every
            )));
        }
        Ok(rate)
    }
}

impl FromStr for FrameSkip {
    type Err = CoreError;

    /// Parses the textual `skipped/every` form.
    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("invalid frameskip: '{arg}'"));

        let (skipped, every) = arg.split_once('/').ok_or_else(invalid)?;
        if every.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            skipped: skipped.trim().parse().map_err(|_| invalid())?,
            every: every.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// User-chosen timing and styling knobs, fixed for the run.
///
/// `fps` is the source rate as stored in the probed metadata, already
/// rounded to an integer.
#[derive(Debug, Clone)]
pub struct SamplingOptions {
    pub frameskip: Option<FrameSkip>,
    pub speed: f64,
    pub reverse: bool,
    pub loop_output: bool,
    pub fuzz: Option<u32>,
    pub optimize: bool,
    pub fps: u32,
}

/// The ordered frames chosen for the output plus their playback rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSelection {
    pub frames: Vec<String>,
    pub effective_fps: f64,
}

/// Samples the full frame list.
pub fn sample(frames: &[String], options: &SamplingOptions) -> CoreResult<FrameSelection> {
    sample_range(frames, options, 0, frames.len())
}

/// Samples `frames[start_frame..end_frame]` with the stride induced by
/// the skip ratio.
///
/// A real-valued accumulator starts at `start_frame` and advances by the
/// stride; the frame at its floor is taken each step until the floor
/// reaches `end_frame`. Fractional strides therefore distribute the kept
/// frames evenly across the range. An empty input yields an empty
/// selection, not an error.
pub fn sample_range(
    frames: &[String],
    options: &SamplingOptions,
    start_frame: usize,
    end_frame: usize,
) -> CoreResult<FrameSelection> {
    if options.speed <= 0.0 {
        return Err(CoreError::Config(format!(
            "speed factor must be positive, got {}",
            options.speed
        )));
    }
    let rate = options.frameskip.unwrap_or(FrameSkip::NONE).rate()?;
    let effective_fps = f64::from(options.fps) * options.speed / rate;

    let end_frame = end_frame.min(frames.len());
    let mut selected = Vec::new();
    let mut frame = start_frame as f64;
    while (frame.floor() as usize) < end_frame {
        selected.push(frames[frame.floor() as usize].clone());
        frame += rate;
    }

    if options.reverse {
        selected.reverse();
    }

    Ok(FrameSelection {
        frames: selected,
        effective_fps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(frameskip: Option<FrameSkip>, speed: f64, fps: u32) -> SamplingOptions {
        SamplingOptions {
            frameskip,
            speed,
            reverse: false,
            loop_output: false,
            fuzz: None,
            optimize: true,
            fps,
        }
    }

    fn frames(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("frames{:05}.png", i + 1)).collect()
    }

    fn skip(skipped: u32, every: u32) -> FrameSkip {
        FrameSkip { skipped, every }
    }

    #[test]
    fn frameskip_parses_from_ratio_string() {
        assert_eq!("1/2".parse::<FrameSkip>().unwrap(), skip(1, 2));
        assert_eq!(" 2 / 3 ".parse::<FrameSkip>().unwrap(), skip(2, 3));
    }

    #[test]
    fn malformed_frameskip_is_rejected() {
        for arg in ["", "1", "1/2/3", "a/b", "1/", "-1/2"] {
            assert!(
                matches!(arg.parse::<FrameSkip>(), Err(CoreError::Validation(_))),
                "expected '{arg}' to be rejected"
            );
        }
    }

    #[test]
    fn default_skip_selects_every_frame_in_order() {
        let input = frames(10);
        let selection = sample(&input, &options(None, 1.0, 25)).unwrap();
        assert_eq!(selection.frames, input);
        assert_eq!(selection.effective_fps, 25.0);
    }

    #[test]
    fn skip_every_other_frame() {
        let input = frames(10);
        let selection = sample(&input, &options(Some(skip(1, 2)), 1.0, 25)).unwrap();
        let expected: Vec<String> = [0usize, 2, 4, 6, 8]
            .iter()
            .map(|&i| input[i].clone())
            .collect();
        assert_eq!(selection.frames, expected);
        assert_eq!(selection.effective_fps, 12.5);
    }

    #[test]
    fn skip_two_of_three() {
        let input = frames(10);
        let selection = sample(&input, &options(Some(skip(2, 3)), 1.0, 30)).unwrap();
        let expected: Vec<String> = [0usize, 3, 6, 9].iter().map(|&i| input[i].clone()).collect();
        assert_eq!(selection.frames, expected);
        assert_eq!(selection.effective_fps, 10.0);
    }

    #[test]
    fn fractional_stride_distributes_evenly() {
        // 1/3 skipped gives a stride of 1.5: floors land on 0,1,3,4.
        let input = frames(6);
        let selection = sample(&input, &options(Some(skip(1, 3)), 1.0, 30)).unwrap();
        let expected: Vec<String> = [0usize, 1, 3, 4].iter().map(|&i| input[i].clone()).collect();
        assert_eq!(selection.frames, expected);
    }

    #[test]
    fn selected_count_tracks_rate() {
        let input = frames(100);
        for (skipped, every) in [(0, 1), (1, 2), (2, 3), (1, 4), (3, 4), (9, 10)] {
            let fs = skip(skipped, every);
            let rate = fs.rate().unwrap();
            let selection = sample(&input, &options(Some(fs), 1.0, 30)).unwrap();
            let expected = (input.len() as f64 / rate).ceil();
            let diff = (selection.frames.len() as f64 - expected).abs();
            assert!(
                diff <= 1.0,
                "skip {skipped}/{every}: got {} frames, expected about {expected}",
                selection.frames.len()
            );
        }
    }

    #[test]
    fn reverse_only_reorders_the_selection() {
        let input = frames(5);
        let mut opts = options(Some(skip(1, 2)), 1.0, 25);
        let forward = sample(&input, &opts).unwrap();
        opts.reverse = true;
        let reversed = sample(&input, &opts).unwrap();

        let mut expected = forward.frames.clone();
        expected.reverse();
        assert_eq!(reversed.frames, expected);
        assert_eq!(reversed.effective_fps, forward.effective_fps);
    }

    #[test]
    fn speed_scales_effective_fps() {
        // A source probed at 29.97 fps is stored as 30; doubling the speed
        // with no skipping plays back at 60.
        let selection = sample(&frames(3), &options(None, 2.0, 30)).unwrap();
        assert_eq!(selection.effective_fps, 60.0);

        let selection = sample(&frames(3), &options(Some(skip(1, 2)), 0.5, 30)).unwrap();
        assert_eq!(selection.effective_fps, 7.5);
    }

    #[test]
    fn empty_input_yields_empty_selection() {
        let selection = sample(&[], &options(None, 1.0, 25)).unwrap();
        assert!(selection.frames.is_empty());
        assert_eq!(selection.effective_fps, 25.0);
    }

    #[test]
    fn equal_skip_and_every_is_a_config_error() {
        let err = sample(&frames(4), &options(Some(skip(2, 2)), 1.0, 25)).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn skipping_more_than_every_is_a_config_error() {
        let err = sample(&frames(4), &options(Some(skip(3, 2)), 1.0, 25)).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn non_positive_speed_is_a_config_error() {
        let err = sample(&frames(4), &options(None, 0.0, 25)).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn range_bounds_limit_the_walk() {
        let input = frames(10);
        let opts = options(None, 1.0, 25);
        let selection = sample_range(&input, &opts, 2, 5).unwrap();
        assert_eq!(selection.frames, input[2..5].to_vec());

        // A start past the end selects nothing.
        let selection = sample_range(&input, &opts, 20, 10).unwrap();
        assert!(selection.frames.is_empty());
    }
}
