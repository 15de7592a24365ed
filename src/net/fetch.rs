//! Browser transport built on `gloo-net`.
//!
//! Every request is raced against an `AbortController` timer so a hung
//! server surfaces as `ApiError::Timeout` instead of leaving a form stuck in
//! its loading state.

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal, Blob, BlobPropertyBag, FormData, RequestCredentials};

use super::error::{ApiError, FetchStage};
use super::transport::{FileUpload, HttpRequest, HttpResponse, HttpTransport, Method, RequestBody};

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::Network("failed to initialize request timeout".to_owned()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(request.timeout_ms, move || timeout_controller.abort());

        let timeout_ms = request.timeout_ms;
        let built = build_request(request, &signal)?;
        let response = built
            .send()
            .await
            .map_err(|err| map_request_error(&err, timeout_ms))?;
        let status = response.status();
        // The abort timer can still fire while the body streams in.
        let body = response
            .text()
            .await
            .map_err(|err| map_body_error(&err, timeout_ms))?;
        Ok(HttpResponse { status, body })
    }
}

fn build_request(request: HttpRequest, signal: &AbortSignal) -> Result<Request, ApiError> {
    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
    };
    builder = builder.abort_signal(Some(signal));
    if request.with_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let built = match request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(payload) => builder.header("Content-Type", "application/json").body(payload),
        RequestBody::Multipart(upload) => with_form_data(builder, &upload)?,
    };
    built.map_err(|err| ApiError::Encode(format!("failed to build request: {err}")))
}

fn with_form_data(builder: RequestBuilder, upload: &FileUpload) -> Result<Result<Request, gloo_net::Error>, ApiError> {
    let encode_failed = |_| ApiError::Encode(format!("failed to attach {}", upload.file_name));

    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    if let Some(content_type) = &upload.content_type {
        options.set_type(content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(encode_failed)?;
    let form = FormData::new().map_err(encode_failed)?;
    form.append_with_blob_and_filename(&upload.field, &blob, &upload.file_name)
        .map_err(encode_failed)?;
    Ok(builder.body(form))
}

fn map_request_error(err: &gloo_net::Error, timeout_ms: u32) -> ApiError {
    ApiError::from_fetch_failure(FetchStage::Send, err.to_string(), timeout_ms)
}

fn map_body_error(err: &gloo_net::Error, timeout_ms: u32) -> ApiError {
    ApiError::from_fetch_failure(FetchStage::Body, err.to_string(), timeout_ms)
}
