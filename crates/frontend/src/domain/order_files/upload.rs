//! Проверка выбранных файлов перед загрузкой

use std::fmt;

use crate::shared::format::format_file_size;

/// Файл из `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Пакет отклонен целиком из-за одного файла
#[derive(Debug, Clone, PartialEq)]
pub struct OversizedFile {
    pub name: String,
    pub max_bytes: u64,
}

impl fmt::Display for OversizedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Файл {} слишком большой (максимум {})",
            self.name,
            format_file_size(self.max_bytes)
        )
    }
}

/// Первый файл больше `max_bytes` отклоняет весь пакет.
/// Файл ровно `max_bytes` допустим.
pub fn check_batch(files: &[SelectedFile], max_bytes: u64) -> Result<(), OversizedFile> {
    match files.iter().find(|f| f.size > max_bytes) {
        Some(file) => Err(OversizedFile {
            name: file.name.clone(),
            max_bytes,
        }),
        None => Ok(()),
    }
}
