//! Target format resolution - extension to MIME lookup and the format
//! flag handed to the converter.

use std::path::Path;

/// MIME type for a file extension, covering the document, spreadsheet,
/// presentation, and graphics formats unoconv converts between.
/// Lookup is case-insensitive.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        // Text documents
        "odt" => "application/vnd.oasis.opendocument.text",
        "ott" => "application/vnd.oasis.opendocument.text-template",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "rtf" => "application/rtf",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "epub" => "application/epub+zip",
        // Spreadsheets
        "ods" => "application/vnd.oasis.opendocument.spreadsheet",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "csv" => "text/csv",
        // Presentations
        "odp" => "application/vnd.oasis.opendocument.presentation",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        // Graphics exports
        "odg" => "application/vnd.oasis.opendocument.graphics",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => return None,
    };
    Some(mime)
}

/// Infer the target MIME type from a path's extension.
pub fn infer_mime(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
}

/// The format token passed to the converter: the extension with the
/// leading dot stripped, case preserved. Empty when the path has no
/// extension.
pub fn format_flag(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string()
}
