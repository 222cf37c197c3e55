/// Proxy-wide constants

/// Converted documents must be strictly larger than this many bytes
pub const MIN_OUTPUT_BYTES: usize = 10 * 1024;

/// Default Nutrient Processor API endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.nutrient.io/build";

/// Environment variable holding the upstream bearer credential
pub const API_KEY_ENV_VAR: &str = "NUTRIENT_API_KEY";

/// Upstream timeout when none is configured
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Default inbound body limit (50 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Multipart field names, shared by the inbound and outbound contracts
pub const FILE_FIELD: &str = "file";
pub const INSTRUCTIONS_FIELD: &str = "instructions";
