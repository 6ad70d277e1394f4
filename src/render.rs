use image::{DynamicImage, ImageBuffer, RgbImage};
use qrcode::{Color, QrCode};
use std::fs;
use std::path::PathBuf;

use crate::color::Rgb;
use crate::error::{QrGenError, Result};
use crate::output::OutputFormat;
use crate::request::QrRequest;

/*---- Encoding ----*/

/// Encodes the request data with the requested error correction level.
///
/// The encoder picks the segment mode and the smallest version that fits.
pub fn encode(request: &QrRequest) -> Result<QrCode> {
    let code = QrCode::with_error_correction_level(
        request.data.as_bytes(),
        request.error_correction.into(),
    )?;
    tracing::debug!(
        "Encoded {} bytes as a {}x{} symbol (ecc {})",
        request.data.len(),
        code.width(),
        code.width(),
        request.error_correction
    );
    Ok(code)
}

fn is_dark(qr: &QrCode, x: i64, y: i64) -> bool {
    let width = qr.width() as i64;
    if x < 0 || y < 0 || x >= width || y >= width {
        return false;
    }
    qr[(x as usize, y as usize)] == Color::Dark
}

/*---- Rendering ----*/

/// Width in modules of a version 1 symbol, the smallest there is.
pub const MIN_SYMBOL_WIDTH: usize = 21;

/// Largest accepted image side, in pixels.
pub const MAX_IMAGE_SIDE: u32 = u16::MAX as u32;

/// Side of the rendered image as `(modules, pixels)`, quiet zone included.
///
/// Fails with `ImageTooLarge` instead of overflowing when the pixel side
/// would exceed [`MAX_IMAGE_SIDE`].
pub fn image_side(width: usize, border: u32, box_size: u32) -> Result<(u32, u32)> {
    let too_large = || QrGenError::ImageTooLarge { border, box_size };
    let modules = u32::try_from(width)
        .ok()
        .and_then(|w| border.checked_mul(2)?.checked_add(w))
        .ok_or_else(too_large)?;
    let pixels = modules.checked_mul(box_size).ok_or_else(too_large)?;
    if pixels > MAX_IMAGE_SIDE {
        return Err(too_large());
    }
    Ok((modules, pixels))
}

/// Rasterizes the symbol: each module is a `box_size` pixel square and the
/// quiet zone is `border` modules wide on every side.
pub fn to_image(qr: &QrCode, box_size: u32, border: u32, fill: Rgb, back: Rgb) -> Result<RgbImage> {
    let (_, side) = image_side(qr.width(), border, box_size)?;
    let mut img: RgbImage = ImageBuffer::new(side, side);
    let border = border as i64;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = (x / box_size) as i64 - border;
        let qr_y = (y / box_size) as i64 - border;
        *pixel = if is_dark(qr, qr_x, qr_y) {
            fill.into()
        } else {
            back.into()
        };
    }

    Ok(img)
}

// Returns a string of SVG code for an image depicting the given QR Code,
// with the given number of border modules. Dark modules share one path.
// The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(
    qr: &QrCode,
    border: u32,
    box_size: u32,
    fill: Rgb,
    back: Rgb,
) -> Result<String> {
    let (dimension, pixels) = image_side(qr.width(), border, box_size)?;
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{1}\" height=\"{1}\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension, pixels
    );
    result += &format!("\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n", back.to_hex());
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..qr.width() {
        for x in 0..qr.width() {
            if qr[(x, y)] == Color::Dark {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x as u32 + border, y as u32 + border);
            }
        }
    }
    result += &format!("\" fill=\"{}\"/>\n", fill.to_hex());
    result += "</svg>\n";
    Ok(result)
}

/// Draws the symbol with block characters, two columns per module.
pub fn to_terminal_string(qr: &QrCode, border: u32) -> String {
    let border = border as i64;
    let width = qr.width() as i64;
    let mut out = String::new();
    for y in -border..width + border {
        for x in -border..width + border {
            let c = if is_dark(qr, x, y) { '█' } else { ' ' };
            out.push(c);
            out.push(c);
        }
        out.push('\n');
    }
    out
}

/// Prints the given QrCode object to the console.
pub fn print_qr(qr: &QrCode, border: u32) {
    println!("{}", to_terminal_string(qr, border));
}

/*---- Saving ----*/

/// Encodes, renders and writes the request to `request.output`.
///
/// Validation and encoding both happen before the output directory is
/// created, so a rejected request leaves nothing behind.
pub fn save(request: &QrRequest) -> Result<PathBuf> {
    let format = request.validate()?;
    let qr = encode(request)?;
    save_code(&qr, request, format)?;
    Ok(request.output.clone())
}

/// Writes an already encoded symbol using the request's rendering options.
pub fn save_code(qr: &QrCode, request: &QrRequest, format: OutputFormat) -> Result<()> {
    let path = &request.output;
    image_side(qr.width(), request.border, request.box_size)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tracing::debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        OutputFormat::Svg => {
            let svg = to_svg_string(
                qr,
                request.border,
                request.box_size,
                request.fill_color,
                request.back_color,
            )?;
            fs::write(path, svg)?;
        }
        OutputFormat::Raster(image_format) => {
            let img = to_image(
                qr,
                request.box_size,
                request.border,
                request.fill_color,
                request.back_color,
            )?;
            DynamicImage::ImageRgb8(img).save_with_format(path, image_format)?;
        }
    }

    tracing::info!("Wrote {}", path.display());
    Ok(())
}
