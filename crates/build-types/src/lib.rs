//! Shared wire types for the document build proxy

use serde::{Deserialize, Serialize};

/// Conversion instructions sent alongside the document
///
/// The proxy never interprets these beyond checking that `parts` and `output`
/// are present; this type exists so callers can build a well-formed payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instructions {
    pub parts: Vec<InstructionPart>,
    pub output: OutputSpec,
}

/// A single input reference, naming the multipart field that holds the file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstructionPart {
    pub file: String,
}

/// Desired output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputSpec {
    #[serde(rename = "type")]
    pub output_type: String,
}

impl Instructions {
    /// Convert the file carried in `field` to PDF
    pub fn pdf_from_field(field: &str) -> Self {
        Self {
            parts: vec![InstructionPart {
                file: field.to_string(),
            }],
            output: OutputSpec {
                output_type: "pdf".to_string(),
            },
        }
    }

    /// Serialize to the JSON text carried in the `instructions` form field
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_instructions_wire_format() {
        let json = Instructions::pdf_from_field("file").to_json().unwrap();
        assert_eq!(json, r#"{"parts":[{"file":"file"}],"output":{"type":"pdf"}}"#);
    }

    #[test]
    fn test_error_body_parses_proxy_response() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Missing file in request"}"#).unwrap();
        assert_eq!(body, ErrorBody::new("Missing file in request"));
    }
}
