//! Per-input output lines.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use ytconv_core::ConversionResult;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct ConvertLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a ConversionResult,
}

#[derive(Serialize)]
struct CheckLine<'a> {
    input: &'a str,
    #[serde(rename = "isYouTubeUrl")]
    is_youtube_url: bool,
}

#[derive(Serialize)]
struct NormalizeLine<'a> {
    input: &'a str,
    normalized: &'a str,
}

pub fn write_conversion(
    out: &mut impl Write,
    format: OutputFormat,
    input: &str,
    result: &ConversionResult,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &ConvertLine { input, result })?;
            writeln!(out)?;
        }
        OutputFormat::Text => match result {
            ConversionResult::Converted { converted_url } => writeln!(out, "{}", converted_url)?,
            ConversionResult::Failed { error } => {
                writeln!(out, "{}: {} ({})", error, error.message(), input)?
            }
        },
    }
    Ok(())
}

pub fn write_check(
    out: &mut impl Write,
    format: OutputFormat,
    input: &str,
    is_youtube_url: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &CheckLine { input, is_youtube_url })?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "{}", is_youtube_url)?,
    }
    Ok(())
}

pub fn write_normalized(
    out: &mut impl Write,
    format: OutputFormat,
    input: &str,
    normalized: &str,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &NormalizeLine { input, normalized })?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "{}", normalized)?,
    }
    Ok(())
}
