use contracts::domain::order_file::UploadFilesResponse;
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::{api_url, encode_id, ensure_ok};
use crate::shared::error::ApiError;

/// Скачанный файл
pub struct DownloadedFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

/// Загрузить файлы к заказу (multipart, поле `files`)
pub async fn upload_files(order_id: &str, form: FormData) -> Result<UploadFilesResponse, ApiError> {
    let url = api_url(&format!("/api/orders/{}/files", encode_id(order_id)));
    log::debug!("POST files for order {}", order_id);

    let response = Request::post(&url).body(form)?.send().await?;
    let response = ensure_ok(response).await?;

    // Тело ответа не обязательно для обновления списка
    Ok(response.json::<UploadFilesResponse>().await.unwrap_or_default())
}

/// Скачать файл вместе с заголовками, нужными для сохранения
pub async fn download_file(file_id: &str) -> Result<DownloadedFile, ApiError> {
    let url = api_url(&format!("/api/files/{}/download", encode_id(file_id)));
    log::debug!("GET file {}", file_id);

    let response = Request::get(&url).send().await?;
    let response = ensure_ok(response).await?;

    let headers = response.headers();
    let content_type = headers.get("Content-Type");
    let content_disposition = headers.get("Content-Disposition");
    let bytes = response.binary().await.map_err(ApiError::decode)?;

    Ok(DownloadedFile {
        bytes,
        content_type,
        content_disposition,
    })
}

/// Удалить файл
pub async fn delete_file(file_id: &str) -> Result<(), ApiError> {
    let url = api_url(&format!("/api/files/{}", encode_id(file_id)));
    log::debug!("DELETE file {}", file_id);

    let response = Request::delete(&url).send().await?;
    ensure_ok(response).await?;

    Ok(())
}

/// HTML-фрагмент списка файлов
pub async fn fetch_fragment(url: &str) -> Result<String, ApiError> {
    log::debug!("GET fragment {}", url);

    let response = Request::get(url).send().await?;
    let response = ensure_ok(response).await?;

    response.text().await.map_err(ApiError::decode)
}
