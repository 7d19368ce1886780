//! Formatting helpers for presenting counts and averages.

/// One decimal place, matching how average citations are rounded.
pub fn format_average(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        "—".to_string()
    }
}

/// Picks the singular or plural label for a count.
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    let label = if count == 1 { singular } else { plural };
    format!("{count} {label}")
}

/// Joins the non-empty parts with `separator`, or `None` when nothing is left.
pub fn join_present<'a>(
    parts: impl IntoIterator<Item = Option<&'a str>>,
    separator: &str,
) -> Option<String> {
    let present: Vec<&str> = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_keeps_one_decimal() {
        assert_eq!(format_average(2.3), "2.3");
        assert_eq!(format_average(0.0), "0.0");
        assert_eq!(format_average(f64::NAN), "—");
    }

    #[test]
    fn count_label_switches_on_one() {
        assert_eq!(count_label(1, "image", "images"), "1 image");
        assert_eq!(count_label(0, "image", "images"), "0 images");
        assert_eq!(count_label(4, "image", "images"), "4 images");
    }

    #[test]
    fn join_present_skips_blank_parts() {
        assert_eq!(
            join_present([Some("Nature"), None, Some(" 2021 ")], ", ").as_deref(),
            Some("Nature, 2021")
        );
        assert_eq!(join_present([None, Some("  ")], ", "), None);
    }
}
