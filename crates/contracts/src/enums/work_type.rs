/// Типы учебных работ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    Essay,
    Coursework,
    Diploma,
    Thesis,
    Report,
    Presentation,
    Other,
}

impl WorkType {
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkType::Essay => "Реферат",
            WorkType::Coursework => "Курсовая работа",
            WorkType::Diploma => "Дипломная работа",
            WorkType::Thesis => "Диссертация",
            WorkType::Report => "Отчет",
            WorkType::Presentation => "Презентация",
            WorkType::Other => "Другое",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "essay" => Some(WorkType::Essay),
            "coursework" => Some(WorkType::Coursework),
            "diploma" => Some(WorkType::Diploma),
            "thesis" => Some(WorkType::Thesis),
            "report" => Some(WorkType::Report),
            "presentation" => Some(WorkType::Presentation),
            "other" => Some(WorkType::Other),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(WorkType::from_code("coursework"), Some(WorkType::Coursework));
        assert_eq!(WorkType::from_code("Курсовая"), None);
        assert_eq!(WorkType::Diploma.display_name(), "Дипломная работа");
    }
}
