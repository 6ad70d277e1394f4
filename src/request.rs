//! The request record handed to the renderer.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use qrcode::EcLevel;

use crate::color::Rgb;
use crate::error::{QrGenError, Result};
use crate::output::{resolve_output_path, OutputFormat};
use crate::render::{image_side, MIN_SYMBOL_WIDTH};

pub const DEFAULT_OUTPUT: &str = "qrcode.png";
pub const DEFAULT_BOX_SIZE: u32 = 10;
pub const DEFAULT_BORDER: u32 = 4;

/// Error correction level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum EccLevel {
    /// Tolerates ~7% erroneous codewords.
    L,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    M,
    /// Tolerates ~25% erroneous codewords.
    Q,
    /// Tolerates ~30% erroneous codewords.
    H,
}

impl From<EccLevel> for EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::L => EcLevel::L,
            EccLevel::M => EcLevel::M,
            EccLevel::Q => EcLevel::Q,
            EccLevel::H => EcLevel::H,
        }
    }
}

impl FromStr for EccLevel {
    type Err = QrGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "L" | "l" => Ok(EccLevel::L),
            "M" | "m" => Ok(EccLevel::M),
            "Q" | "q" => Ok(EccLevel::Q),
            "H" | "h" => Ok(EccLevel::H),
            other => Err(QrGenError::InvalidErrorCorrection(other.to_string())),
        }
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            EccLevel::L => "L",
            EccLevel::M => "M",
            EccLevel::Q => "Q",
            EccLevel::H => "H",
        };
        f.write_str(letter)
    }
}

/// Text plus rendering options for one QR code.
#[derive(Clone, Debug, PartialEq)]
pub struct QrRequest {
    pub data: String,
    pub output: PathBuf,
    pub box_size: u32,
    pub border: u32,
    pub fill_color: Rgb,
    pub back_color: Rgb,
    pub error_correction: EccLevel,
}

impl QrRequest {
    /// A request with every option at its default. `output` is already resolved.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            output: resolve_output_path(DEFAULT_OUTPUT),
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            fill_color: Rgb::BLACK,
            back_color: Rgb::WHITE,
            error_correction: EccLevel::default(),
        }
    }

    pub fn with_output(mut self, output: &str) -> Self {
        self.output = resolve_output_path(output);
        self
    }

    /// Checks everything that can be checked without touching the filesystem.
    pub fn validate(&self) -> Result<OutputFormat> {
        if self.data.trim().is_empty() {
            return Err(QrGenError::EmptyInput);
        }
        if self.box_size == 0 {
            return Err(QrGenError::InvalidBoxSize(self.box_size));
        }
        // The encoded symbol can only be wider; save_code checks again.
        image_side(MIN_SYMBOL_WIDTH, self.border, self.box_size)?;
        OutputFormat::from_path(&self.output)
    }
}
