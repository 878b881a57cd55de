//! Файлы заказа: загрузка, скачивание, удаление и обновление списка файлов.
//!
//! Список файлов заказа обновляется из HTML-фрагмента:
//! ```html
//! <ul data-files-list data-order-id="15" data-refresh-url="/orders/15/files">...</ul>
//! ```
//! Если такого списка на странице нет, страница перезагружается.

use web_sys::{File, FormData, HtmlInputElement};

use crate::domain::order_files::api;
use crate::domain::order_files::upload::{check_batch, SelectedFile};
use crate::shared::dom;
use crate::shared::download::{create_blob, download_blob, filename_from_disposition};
use crate::shared::loading::LoadingGuard;
use crate::shared::notifications;

/// Сбрасывает выбор файлов при выходе из области видимости,
/// чтобы тот же файл можно было выбрать повторно
struct ClearSelection<'a>(&'a HtmlInputElement);

impl Drop for ClearSelection<'_> {
    fn drop(&mut self) {
        self.0.set_value("");
    }
}

/// Загрузить выбранные в поле файлы к заказу из `data-order-id`
pub async fn handle_file_upload(input: HtmlInputElement, max_upload_bytes: u64) {
    let Some(file_list) = input.files() else {
        return;
    };
    if file_list.length() == 0 {
        return;
    }
    let _clear = ClearSelection(&input);

    let Some(order_id) = dom::data_attr(&input, "order-id") else {
        log::warn!("file input without data-order-id");
        return;
    };

    let files: Vec<File> = (0..file_list.length())
        .filter_map(|i| file_list.get(i))
        .collect();
    let selected: Vec<SelectedFile> = files
        .iter()
        .map(|f| SelectedFile {
            name: f.name(),
            size: f.size() as u64,
        })
        .collect();

    if let Err(rejected) = check_batch(&selected, max_upload_bytes) {
        notifications::show_error(&rejected.to_string());
        return;
    }

    let form = match build_form(&files) {
        Ok(form) => form,
        Err(e) => {
            notifications::show_error(&format!("Произошла ошибка: {}", e));
            return;
        }
    };

    let _loading = LoadingGuard::show();

    match api::upload_files(&order_id, form).await {
        Ok(response) => {
            log::info!("order {}: {} files uploaded", order_id, response.files.len());
            notifications::show_success("Файлы успешно загружены");
            refresh_files_list(Some(&order_id)).await;
        }
        Err(e) => notifications::show_error(&e.user_message("Ошибка при загрузке файлов")),
    }
}

fn build_form(files: &[File]) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| format!("{:?}", e))?;
    }
    Ok(form)
}

/// Скачать файл и сохранить его под именем из `Content-Disposition`
pub async fn download_file(file_id: String) {
    match api::download_file(&file_id).await {
        Ok(file) => {
            let filename = filename_from_disposition(file.content_disposition.as_deref());
            let saved = create_blob(&file.bytes, file.content_type.as_deref())
                .and_then(|blob| download_blob(&blob, &filename));
            match saved {
                Ok(()) => log::debug!("file {} saved as {}", file_id, filename),
                Err(e) => {
                    log::error!("file {}: {}", file_id, e);
                    notifications::show_error(&format!("Произошла ошибка: {}", e));
                }
            }
        }
        Err(e) => notifications::show_error(&e.user_message("Ошибка при скачивании файла")),
    }
}

/// Удалить файл и обновить список файлов его заказа
pub async fn delete_file(file_id: String, order_id: Option<String>) {
    let _loading = LoadingGuard::show();

    match api::delete_file(&file_id).await {
        Ok(()) => {
            notifications::show_success("Файл успешно удален");
            refresh_files_list(order_id.as_deref()).await;
        }
        Err(e) => notifications::show_error(&e.user_message("Ошибка при удалении файла")),
    }
}

/// Перерисовать список файлов заказа; без списка на странице перезагрузить ее
pub async fn refresh_files_list(order_id: Option<&str>) {
    let container = order_id.and_then(|id| {
        let selector = format!("[data-files-list]{}", dom::attr_selector("data-order-id", id));
        dom::document()?.query_selector(&selector).ok().flatten()
    });
    let refresh_url = container
        .as_ref()
        .and_then(|el| dom::data_attr(el, "refresh-url"));

    let (Some(container), Some(url)) = (container, refresh_url) else {
        log::debug!("files list for order {:?} not found, reloading page", order_id);
        dom::reload_page();
        return;
    };

    match api::fetch_fragment(&url).await {
        Ok(html) => container.set_inner_html(&html),
        Err(e) => {
            log::warn!("files list refresh failed: {}", e);
            dom::reload_page();
        }
    }
}
