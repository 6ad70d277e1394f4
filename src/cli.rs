use clap::Parser;

use crate::color::Rgb;
use crate::error::Result;
use crate::input::PromptDefaults;
use crate::output::resolve_output_path;
use crate::request::{EccLevel, QrRequest, DEFAULT_BORDER, DEFAULT_BOX_SIZE, DEFAULT_OUTPUT};

/// Generate a QR code image from text or a URL.
#[derive(Parser, Debug, Clone)]
#[command(name = "qrgen", version, about)]
pub struct Cli {
    #[arg(help = "Text or URL to encode. Use '-' to read from stdin.")]
    pub data: Option<String>,

    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT,
        help = "Output filename; '.png' is appended when there is no extension and bare names go to generated_png/"
    )]
    pub output: String,

    #[arg(
        long,
        default_value_t = DEFAULT_BOX_SIZE,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Size of each QR box in pixels"
    )]
    pub box_size: u32,

    #[arg(long, default_value_t = DEFAULT_BORDER, help = "Border size (boxes)")]
    pub border: u32,

    #[arg(long, default_value = "black", help = "Fill color for QR code")]
    pub fill_color: String,

    #[arg(long, default_value = "white", help = "Background color")]
    pub back_color: String,

    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = EccLevel::M,
        help = "Error correction level: L, M, Q, or H"
    )]
    pub error_correction: EccLevel,

    #[arg(long, help = "Also print the QR code to the terminal")]
    pub print: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn prompt_defaults(&self) -> PromptDefaults {
        PromptDefaults {
            box_size: self.box_size,
            border: self.border,
            fill_color: self.fill_color.clone(),
            back_color: self.back_color.clone(),
            error_correction: self.error_correction.to_string(),
        }
    }

    /// Builds the request for `data`, preferring `output_override` to `--output`.
    pub fn to_request(&self, data: String, output_override: Option<&str>) -> Result<QrRequest> {
        let output = output_override.unwrap_or(&self.output);
        Ok(QrRequest {
            data,
            output: resolve_output_path(output),
            box_size: self.box_size,
            border: self.border,
            fill_color: self.fill_color.parse::<Rgb>()?,
            back_color: self.back_color.parse::<Rgb>()?,
            error_correction: self.error_correction,
        })
    }
}
