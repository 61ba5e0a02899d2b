//! Fixed-width labels so the rate suffix lines up across rows.

/// `name` truncated to `width - 3` chars, padded to `width`, then `+<rate>`.
pub fn format_mined_label(name: &str, rate: f32, width: usize) -> String {
    let truncated = truncate_chars(name, width.saturating_sub(3));
    format!("{truncated:<width$}+{}", format_rate(rate))
}

/// `name` padded to `width`, no rate.
pub fn format_unmined_label(name: &str, width: usize) -> String {
    format!("{name:<width$}")
}

/// One decimal place, ties rounded away from zero.
///
/// `{:.1}` alone rounds exact ties to even (3.25 -> "3.2").
pub fn format_rate(rate: f32) -> String {
    let rounded = (f64::from(rate) * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_label_layout() {
        assert_eq!(format_mined_label("Iron Ore", 3.25, 12), "Iron Ore    +3.3");
    }

    #[test]
    fn test_long_name_truncated_before_padding() {
        assert_eq!(
            format_mined_label("Unobtainium Crystals", 1.0, 12),
            "Unobtaini   +1.0"
        );
    }

    #[test]
    fn test_catalog_width() {
        let label = format_mined_label("Water Ice", 12.04, 25);
        assert_eq!(label, format!("{:<25}+12.0", "Water Ice"));
        assert_eq!(label.chars().count(), 25 + "+12.0".len());
    }

    #[test]
    fn test_name_of_exactly_truncation_length() {
        assert_eq!(format_mined_label("Ninechars", 0.5, 12), "Ninechars   +0.5");
    }

    #[test]
    fn test_unmined_label() {
        assert_eq!(format_unmined_label("Iron Ore", 10), "Iron Ore  ");
        assert_eq!(format_unmined_label("Cobaltite Deep", 10), "Cobaltite Deep");
    }

    #[test]
    fn test_rate_rounds_half_up() {
        assert_eq!(format_rate(3.25), "3.3");
        assert_eq!(format_rate(0.05), "0.1");
        assert_eq!(format_rate(2.44), "2.4");
        assert_eq!(format_rate(0.0), "0.0");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Érbium", 2), "Ér");
        assert_eq!(truncate_chars("Ore", 5), "Ore");
    }
}
