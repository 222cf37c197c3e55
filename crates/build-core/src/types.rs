//! Core data types for the build proxy

use crate::error::{BuildError, Result};
use serde_json::Value;
use std::fmt;

/// A file received in (or sent as) a multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Bearer token for the upstream service
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Raw form fields as they arrived, before any validation
#[derive(Debug, Clone, Default)]
pub struct BuildForm {
    pub file: Option<UploadedFile>,
    pub instructions: Option<String>,
}

/// A request that passed input validation and may be sent upstream
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub file: UploadedFile,
    /// Original instructions text, forwarded verbatim
    pub instructions: String,
}

impl BuildForm {
    /// Check presence of both fields and the instructions shape
    pub fn into_request(self) -> Result<ConversionRequest> {
        let file = self.file.ok_or(BuildError::MissingFile)?;

        let instructions = self
            .instructions
            .filter(|text| !text.is_empty())
            .ok_or(BuildError::MissingInstructions)?;

        validate_instructions(&instructions)?;

        Ok(ConversionRequest { file, instructions })
    }
}

/// Parse instructions and require usable `parts` and `output` entries
pub fn validate_instructions(text: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(text).map_err(BuildError::MalformedInstructions)?;

    let has_parts = parsed
        .get("parts")
        .is_some_and(|parts| is_present(parts) && !matches!(parts, Value::Array(items) if items.is_empty()));
    let has_output = parsed.get("output").is_some_and(is_present);

    if !has_parts || !has_output {
        return Err(BuildError::InvalidInstructionsShape);
    }

    Ok(parsed)
}

// null, false, 0 and "" count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converted document returned by upstream
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub data: Vec<u8>,
}

impl ConversionResult {
    /// Accept `data` only if it clears the minimum output size
    pub fn validated(data: Vec<u8>) -> Result<Self> {
        match BuildError::output_too_small(data.len()) {
            Some(err) => Err(err),
            None => Ok(Self { data }),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
