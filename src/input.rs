//! Where the text to encode comes from: the argument, stdin, or a prompt.

use std::io::{BufRead, Read, Write};

use crate::error::{QrGenError, Result};

/// Text to encode plus an output path typed at the interactive prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInput {
    pub data: String,
    pub output_override: Option<String>,
}

/// Option values shown in the interactive help block.
#[derive(Clone, Debug)]
pub struct PromptDefaults {
    pub box_size: u32,
    pub border: u32,
    pub fill_color: String,
    pub back_color: String,
    pub error_correction: String,
}

/// Resolves the data to encode.
///
/// A non-empty argument other than `-` wins. `-` or a non-terminal stdin reads all of
/// `reader`. Otherwise the user is prompted on `prompt_out` for one line.
pub fn resolve_input<R: BufRead, W: Write>(
    arg: Option<&str>,
    stdin_is_tty: bool,
    reader: &mut R,
    prompt_out: &mut W,
    defaults: &PromptDefaults,
) -> Result<ResolvedInput> {
    let resolved = match arg {
        Some(data) if !data.is_empty() && data != "-" => ResolvedInput {
            data: data.to_string(),
            output_override: None,
        },
        _ if arg == Some("-") || !stdin_is_tty => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            tracing::debug!("Read {} bytes from stdin", buf.len());
            ResolvedInput {
                data: buf.trim().to_string(),
                output_override: None,
            }
        }
        _ => prompt(reader, prompt_out, defaults)?,
    };

    if resolved.data.is_empty() {
        return Err(QrGenError::EmptyInput);
    }
    Ok(resolved)
}

fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    defaults: &PromptDefaults,
) -> Result<ResolvedInput> {
    writeln!(out)?;
    writeln!(out, "You can customize the QR appearance with these options:")?;
    writeln!(
        out,
        "  box size (module pixels): --box-size {0}  # default {0}",
        defaults.box_size
    )?;
    writeln!(
        out,
        "  border (white margin in modules): --border {0}  # default {0}",
        defaults.border
    )?;
    writeln!(out, "  fill color: --fill-color {0}  # default {0}", defaults.fill_color)?;
    writeln!(
        out,
        "  background color: --back-color {0}  # default {0}",
        defaults.back_color
    )?;
    writeln!(
        out,
        "  error correction: --error-correction {0}  # default {0}",
        defaults.error_correction
    )?;
    write!(out, "Enter the text or URL: ")?;
    out.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(parse_interactive_line(line.trim()))
}

/// Splits an interactive line into data and an optional `-o name`,
/// `--output name` or `--output=name` override.
///
/// Without an override the line is returned as typed.
pub fn parse_interactive_line(raw: &str) -> ResolvedInput {
    // Unbalanced quotes fall back to plain whitespace splitting.
    let parts = shlex::split(raw)
        .unwrap_or_else(|| raw.split_whitespace().map(str::to_string).collect());

    let mut rest = Vec::with_capacity(parts.len());
    let mut output_override = None;
    let mut i = 0;
    while i < parts.len() {
        let tok = &parts[i];
        if (tok == "-o" || tok == "--output") && i + 1 < parts.len() {
            output_override = Some(parts[i + 1].clone());
            i += 2;
            continue;
        }
        if let Some(value) = tok.strip_prefix("--output=") {
            output_override = Some(value.to_string());
            i += 1;
            continue;
        }
        rest.push(tok.clone());
        i += 1;
    }

    match output_override {
        Some(output) if !output.is_empty() => ResolvedInput {
            data: rest.join(" ").trim().to_string(),
            output_override: Some(output),
        },
        _ => ResolvedInput {
            data: raw.to_string(),
            output_override: None,
        },
    }
}
