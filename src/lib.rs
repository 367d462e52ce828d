//! Mimeconv: Document Conversion Library
//!
//! A library for converting documents between formats by driving an
//! external unoconv process backed by a headless LibreOffice instance.

pub mod cli;
pub mod convert;
pub mod utils;
