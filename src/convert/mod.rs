//! Conversion driver - validates the request, resolves the target
//! format, and runs the external converter.

mod error;
mod format;
mod runner;

pub use error::ConvertError;
pub use format::{format_flag, infer_mime, mime_for_extension};
pub use runner::{ToolInvocation, ToolOutput};

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parameters for a single conversion.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Source document; must name an existing regular file.
    pub input: PathBuf,
    /// Destination path; its extension drives format selection.
    pub output: PathBuf,
    /// Explicit MIME override. Inferred from the output extension when absent.
    pub target_mime: Option<String>,
    /// Converter executable, either a bare command name or a path.
    pub tool: PathBuf,
    /// Bound on the converter's run time. Unbounded when absent.
    pub timeout: Option<Duration>,
}

/// A completed conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Absolute path the converter wrote the output to.
    pub output: PathBuf,
    /// MIME type the conversion targeted, explicit or inferred.
    pub target_mime: String,
}

/// Convert `request.input` into `request.output` by invoking the
/// external converter.
///
/// Validation failures (missing input, unresolvable target format) are
/// returned before any process is spawned. The converter's exit code is
/// the sole success signal; its captured streams travel with the error
/// when it fails.
pub fn convert(request: &ConversionRequest) -> Result<Conversion, ConvertError> {
    if !request.input.is_file() {
        return Err(ConvertError::InputNotFound {
            path: request.input.clone(),
        });
    }

    let target_mime = match &request.target_mime {
        Some(mime) => mime.clone(),
        None => {
            let mime = format::infer_mime(&request.output).ok_or_else(|| {
                ConvertError::TargetFormatUnknown {
                    output: request.output.clone(),
                }
            })?;
            log::info!("Inferred target MIME type: {}", mime);
            mime.to_string()
        }
    };

    // Absolute paths so the converter's working directory cannot change
    // which files are read or written.
    let input = request.input.canonicalize()?;
    let output = std::path::absolute(&request.output)?;
    log::debug!("Resolved input path: {}", input.display());
    log::debug!("Resolved output path: {}", output.display());

    let tool = resolve_tool(&request.tool)?;

    // The format flag is always the output extension, never the MIME
    // string, matching what unoconv expects for -f.
    let invocation = ToolInvocation::new(&tool, &format::format_flag(&output), &output, &input);
    log::info!("Executing command: {}", invocation);

    let outcome = invocation.run(request.timeout)?;
    if !outcome.success() {
        return Err(ConvertError::ToolFailed {
            code: outcome.code,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
        });
    }

    log::info!("Conversion successful. Output file: {}", output.display());
    Ok(Conversion {
        output,
        target_mime,
    })
}

/// Resolve a bare command name through the PATH search; anything with a
/// path separator is used as given and failures surface at spawn time.
fn resolve_tool(tool: &Path) -> Result<PathBuf, ConvertError> {
    if tool.components().count() > 1 {
        return Ok(tool.to_path_buf());
    }
    which::which(tool).map_err(|_| ConvertError::ToolNotFound {
        tool: tool.to_path_buf(),
    })
}
