// ApkSleuth - net/client.rs
//
// Submission client for the remote analysis service.
//
// One multipart POST per submission; the multipart boundary is generated by
// reqwest, never assembled by hand. There is no client-side timeout, since a full
// static + dynamic analysis legitimately runs for minutes, and no retry:
// analysis is expensive and non-idempotent from the service's perspective,
// so retries stay user-initiated.

use crate::core::model::{AnalysisResult, SelectedFile};
use crate::util::constants;
use crate::util::error::SubmitError;
use std::fs::File;
use std::path::PathBuf;

/// HTTP client for the analysis endpoint.
///
/// Cheap to construct; the underlying connection pool is reused across
/// submissions from the same instance.
pub struct AnalysisClient {
    http: reqwest::blocking::Client,
}

impl AnalysisClient {
    /// Build the client.
    ///
    /// The blocking client defaults to a 30 second total-request timeout,
    /// which would cut off any analysis longer than that, so it is disabled
    /// explicitly: the connection stays open until the verdict arrives.
    pub fn new() -> Result<Self, SubmitError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| SubmitError::Network {
                message: format!("could not initialise HTTP client: {e}"),
            })?;
        Ok(Self { http })
    }

    /// Submit `file` to `endpoint` and parse the verdict.
    ///
    /// Blocks for the duration of the upload and analysis; always called
    /// from the submission thread, never the UI thread.
    pub fn submit(
        &self,
        file: &SelectedFile,
        endpoint: &str,
    ) -> Result<AnalysisResult, SubmitError> {
        tracing::info!(file = %file.name, endpoint, "Submitting package for analysis");

        let form = build_form(file)?;

        let response = self
            .http
            .post(endpoint)
            .multipart(form)
            .send()
            .map_err(|e| SubmitError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), file = %file.name, "Service rejected submission");
            return Err(SubmitError::Server {
                status: status.as_u16(),
            });
        }

        // Read the body as text first so a parse failure can be reported as
        // a malformed response rather than a transport error.
        let body = response.text().map_err(|e| SubmitError::Network {
            message: e.to_string(),
        })?;

        let result: AnalysisResult =
            serde_json::from_str(&body).map_err(|e| SubmitError::MalformedResponse {
                message: e.to_string(),
            })?;

        tracing::info!(
            file = %file.name,
            classification = %result.classification,
            probability = result.malicious_probability,
            "Analysis verdict received"
        );

        Ok(result)
    }
}

/// Build the single-part multipart form for a submission.
///
/// The part streams from the file's locator rather than buffering the whole
/// package in memory, carries the original filename, and always uses the
/// fixed package-archive content type.
fn build_form(file: &SelectedFile) -> Result<reqwest::blocking::multipart::Form, SubmitError> {
    let path = PathBuf::from(&file.uri);

    let handle = File::open(&path).map_err(|source| SubmitError::File {
        path: path.clone(),
        source,
    })?;
    let length = handle
        .metadata()
        .map_err(|source| SubmitError::File {
            path: path.clone(),
            source,
        })?
        .len();

    // Known length so the upload goes out with Content-Length rather than
    // chunked transfer encoding, which some analysis frontends reject.
    let part = reqwest::blocking::multipart::Part::reader_with_length(handle, length)
        .file_name(file.name.clone())
        .mime_str(constants::APK_MIME_TYPE)
        .map_err(|e| SubmitError::Network {
            message: format!("could not build request: {e}"),
        })?;

    Ok(reqwest::blocking::multipart::Form::new().part(constants::MULTIPART_FIELD_NAME, part))
}
