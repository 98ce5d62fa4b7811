pub mod markdown;
pub mod json;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;

/// Round to whole kilograms and group thousands: 22752.4 -> "22,752"
pub fn format_kg(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kg() {
        assert_eq!(format_kg(0.0), "0");
        assert_eq!(format_kg(999.4), "999");
        assert_eq!(format_kg(999.5), "1,000");
        assert_eq!(format_kg(22_752.4), "22,752");
        assert_eq!(format_kg(1_234_567.0), "1,234,567");
        assert_eq!(format_kg(-1_500.0), "-1,500");
    }
}
