//! # qrgen
//!
//! Turn text or a URL into a QR code image file.
//!
//! `qrgen` resolves the text to encode from a command-line argument, standard
//! input or an interactive prompt, encodes it with the [`qrcode`] crate and
//! rasterizes the module matrix with the [`image`] crate. The output format
//! follows the file extension (PNG by default, SVG and the raster formats
//! `image` can write are also accepted).
//!
//! ## Conventions
//!
//! - An output name without extension gets `.png`.
//! - An output name without a directory is placed in `generated_png/`.
//! - Error correction defaults to level M, modules to 10 px with a 4 module border.
//!
//! ## Example
//!
//! ```no_run
//! use qrgen::{render, QrRequest};
//!
//! let request = QrRequest::new("https://example.com").with_output("example");
//! let path = render::save(&request).unwrap();
//! assert!(path.ends_with("generated_png/example.png"));
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: command-line flags.
//! - [`input`]: argument, stdin and prompt input.
//! - [`request`]: the request record and error correction levels.
//! - [`output`]: output path and format conventions.
//! - [`render`]: encoding, rendering and saving.

pub mod cli;
pub mod color;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod render;
pub mod request;

use std::path::PathBuf;

pub use cli::Cli;
pub use color::Rgb;
pub use error::{QrGenError, Result};
pub use input::{resolve_input, ResolvedInput};
pub use request::{EccLevel, QrRequest};

/// Builds the request from the flags and resolved input, then writes it.
///
/// Every option is checked before anything is created on disk.
pub fn generate(cli: &Cli, input: ResolvedInput) -> Result<PathBuf> {
    let request = cli.to_request(input.data, input.output_override.as_deref())?;
    let format = request.validate()?;
    tracing::debug!("Request: {:?}", request);

    let qr = render::encode(&request)?;
    if cli.print {
        render::print_qr(&qr, request.border);
    }
    render::save_code(&qr, &request, format)?;
    Ok(request.output)
}
