//! Crop-rectangle parsing and resolution.

use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A crop rectangle, given either in absolute pixels or as fractions of
/// the frame.
///
/// The interpretation is inferred once, at construction: when every
/// component is at most 1 the rectangle is treated as fractions of the
/// frame dimensions. A 1x1-pixel absolute crop at the origin therefore
/// cannot be expressed; the inference is part of the tool's observable
/// behavior and is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CropArea {
    width: f64,
    height: f64,
    xpos: f64,
    ypos: f64,
    relative: bool,
}

impl CropArea {
    /// Builds a crop rectangle, rejecting negative components.
    pub fn new(width: f64, height: f64, xpos: f64, ypos: f64) -> CoreResult<Self> {
        let values = [width, height, xpos, ypos];
        if values.iter().any(|v| *v < 0.0) {
            return Err(CoreError::Validation(
                "crop dimensions must be non-negative".to_string(),
            ));
        }
        let relative = values.iter().all(|v| *v <= 1.0);
        Ok(Self {
            width,
            height,
            xpos,
            ypos,
            relative,
        })
    }

    /// Whether the components are read as fractions of the frame.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Concrete pixel values against a frame of the given size.
    #[must_use]
    pub fn resolve(&self, frame_width: u32, frame_height: u32) -> ResolvedCrop {
        let (fw, fh) = (f64::from(frame_width), f64::from(frame_height));
        let (width, height, xpos, ypos) = if self.relative {
            (
                self.width * fw,
                self.height * fh,
                self.xpos * fw,
                self.ypos * fh,
            )
        } else {
            (self.width, self.height, self.xpos, self.ypos)
        };
        ResolvedCrop {
            width,
            height,
            xpos,
            ypos,
        }
    }
}

impl FromStr for CropArea {
    type Err = CoreError;

    /// Parses the textual `width:height:x:y` form. Exactly four numeric,
    /// non-negative components are required.
    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::Validation(format!("invalid crop argument: '{arg}'"));

        let parts: Vec<&str> = arg.split(':').collect();
        if parts.len() != 4 {
            return Err(invalid());
        }
        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| invalid())?;
        }
        Self::new(values[0], values[1], values[2], values[3])
    }
}

/// A crop rectangle resolved to concrete pixel values for one frame size.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCrop {
    pub width: f64,
    pub height: f64,
    pub xpos: f64,
    pub ypos: f64,
}

impl ResolvedCrop {
    /// `W:H:X:Y` argument for the extractor's crop filter.
    #[must_use]
    pub fn filter_argument(&self) -> String {
        format!("{}:{}:{}:{}", self.width, self.height, self.xpos, self.ypos)
    }
}
