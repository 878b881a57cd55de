/// Разбор цены, введенной администратором.
///
/// Берется самый длинный числовой префикс после пробелов: `"1500 руб"` дает
/// `1500.0`. Без числа в начале получается `NaN`; проверку значения делает сервер.
pub fn parse_price(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut valid_end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
        valid_end = end;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
            valid_end = end;
        }
    }
    if !seen_digit {
        return f64::NAN;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            valid_end = exp_end;
        }
    }

    s[..valid_end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_price("1500"), 1500.0);
        assert_eq!(parse_price("  99.5"), 99.5);
        assert_eq!(parse_price("-10"), -10.0);
        assert_eq!(parse_price(".5"), 0.5);
        assert_eq!(parse_price("1e3"), 1000.0);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(parse_price("1500 руб"), 1500.0);
        assert_eq!(parse_price("12,50"), 12.0);
        assert_eq!(parse_price("7."), 7.0);
        assert_eq!(parse_price("2e"), 2.0);
    }

    #[test]
    fn test_not_a_number() {
        assert!(parse_price("").is_nan());
        assert!(parse_price("руб").is_nan());
        assert!(parse_price("-").is_nan());
        assert!(parse_price(".").is_nan());
    }
}
