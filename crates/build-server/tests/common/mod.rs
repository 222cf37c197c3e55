#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use build_core::clients::ConversionService;
use build_core::{BuildError, ConversionRequest, Credential, ProxyConfig, Result};
use build_server::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const BOUNDARY: &str = "----buildproxytestboundary";
pub const VALID_INSTRUCTIONS: &str = r#"{"parts":[{"file":"file"}],"output":{"type":"pdf"}}"#;

/// What the fake upstream answers
#[derive(Clone)]
pub enum Upstream {
    Pdf(Vec<u8>),
    Status(u16, &'static str),
}

/// Fake Nutrient backend that records every call it receives
pub struct FakeUpstream {
    response: Upstream,
    calls: AtomicUsize,
    received: Mutex<Vec<(String, ConversionRequest)>>,
}

impl FakeUpstream {
    pub fn new(response: Upstream) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn pdf_of_size(size: usize) -> Arc<Self> {
        let mut pdf = b"%PDF-1.7\n".to_vec();
        pdf.extend((0..size.saturating_sub(pdf.len())).map(|i| (i % 251) as u8));
        pdf.truncate(size);
        Self::new(Upstream::Pdf(pdf))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<(String, ConversionRequest)> {
        self.received.lock().unwrap().clone()
    }

    pub fn pdf(&self) -> Vec<u8> {
        match &self.response {
            Upstream::Pdf(bytes) => bytes.clone(),
            Upstream::Status(..) => Vec::new(),
        }
    }
}

#[async_trait]
impl ConversionService for FakeUpstream {
    async fn convert(&self, credential: &Credential, request: &ConversionRequest) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received
            .lock()
            .unwrap()
            .push((credential.expose().to_string(), request.clone()));

        match &self.response {
            Upstream::Pdf(bytes) => Ok(bytes.clone()),
            Upstream::Status(status, body) => Err(BuildError::UpstreamFailed {
                status: *status,
                body: body.to_string(),
            }),
        }
    }
}

pub fn config_with_key(api_key: Option<&str>) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.nutrient.api_key = api_key.map(str::to_string);
    config
}

pub fn app_state(upstream: &Arc<FakeUpstream>, api_key: Option<&str>) -> Arc<AppState> {
    Arc::new(AppState::with_converter(&config_with_key(api_key), upstream.clone()))
}

pub fn app_state_with_limit(upstream: &Arc<FakeUpstream>, max_upload_bytes: usize) -> Arc<AppState> {
    let mut config = config_with_key(Some("key"));
    config.server.max_upload_bytes = max_upload_bytes;
    Arc::new(AppState::with_converter(&config, upstream.clone()))
}

/// A multipart field: name, optional file name, raw content
pub struct Field<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub data: &'a [u8],
}

pub fn file_field(data: &[u8]) -> Field<'_> {
    Field {
        name: "file",
        file_name: Some("test.docx"),
        data,
    }
}

pub fn instructions_field(text: &str) -> Field<'_> {
    Field {
        name: "instructions",
        file_name: None,
        data: text.as_bytes(),
    }
}

pub fn multipart_body(fields: &[Field<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for field in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match field.file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                        field.name, file_name
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field.name).as_bytes(),
                );
            }
        }
        body.extend_from_slice(field.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn build_request(fields: &[Field<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/build")
        .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(Body::from(multipart_body(fields)))
        .unwrap()
}
