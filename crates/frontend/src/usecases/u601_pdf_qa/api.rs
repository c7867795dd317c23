use crate::shared::api_utils::{api_url, decode_response};
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u601_pdf_qa::{
    AskRequest, AskResponse, UploadResponse, ASK_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData, RequestMode};

/// API client for UseCase u601: send the document as multipart form data
pub async fn upload_pdf(file: &File) -> UseCaseResult<UploadResponse> {
    let form_data =
        FormData::new().map_err(|e| UseCaseError::transport(format!("FormData: {e:?}")))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| UseCaseError::transport(format!("FormData append: {e:?}")))?;

    let response = Request::post(&api_url(UPLOAD_PATH))
        .mode(RequestMode::Cors)
        .body(form_data)
        .map_err(|e| UseCaseError::transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| UseCaseError::transport(format!("Request failed: {}", e)))?;

    read_response(response).await
}

/// Ask a question about an uploaded document
pub async fn ask(request: &AskRequest) -> UseCaseResult<AskResponse> {
    let response = Request::post(&api_url(ASK_PATH))
        .mode(RequestMode::Cors)
        .json(request)
        .map_err(|e| UseCaseError::transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| UseCaseError::transport(format!("Request failed: {}", e)))?;

    read_response(response).await
}

async fn read_response<T: DeserializeOwned>(response: Response) -> UseCaseResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UseCaseError::transport(format!("Failed to read body: {}", e)))?;
    decode_response(status, &body)
}
