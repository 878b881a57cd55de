use serde::{Deserialize, Serialize};

/// Файл, принятый `POST /api/orders/{id}/files`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFileDto {
    pub filename: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadFilesResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub files: Vec<UploadedFileDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upload_response() {
        let json = r#"{
            "message": "Загружено файлов: 1",
            "files": [{"filename": "20240315_140226_work.docx", "original_filename": "work.docx", "size": 2048}]
        }"#;
        let response: UploadFilesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.files[0].size, Some(2048));
    }
}
