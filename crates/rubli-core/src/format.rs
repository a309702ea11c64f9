//! Display formatting for amounts and risk scores.
//!
//! Compact currency uses fixed thresholds: `>= 1e12` renders as trillions,
//! `>= 1e9` as billions, `>= 1e6` as millions, each with one decimal. Smaller
//! amounts render as whole pesos with thousands separators.

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Format a peso amount compactly, e.g. `$1.5B`, `$820.0M`, `$12,500`.
#[must_use]
pub fn format_compact_mxn(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= TRILLION {
        format!("{sign}${:.1}T", abs / TRILLION)
    } else if abs >= BILLION {
        format!("{sign}${:.1}B", abs / BILLION)
    } else if abs >= MILLION {
        format!("{sign}${:.1}M", abs / MILLION)
    } else {
        format!("{sign}${}", group_thousands(abs.round()))
    }
}

/// Format a `[0,1]` risk score as a percentage with one decimal, e.g. `34.5%`.
#[must_use]
pub fn format_risk_percent(score: f64) -> String {
    format!("{:.1}%", risk_percent(score))
}

/// Risk score scaled to a percentage and rounded to one decimal place.
#[must_use]
pub fn risk_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

/// Format an optional risk score, rendering `-` for missing values.
#[must_use]
pub fn format_optional_risk(score: Option<f64>) -> String {
    score.map_or_else(|| String::from("-"), format_risk_percent)
}

/// Truncate a label to `max_chars`, appending an ellipsis when shortened.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    if max_chars <= 1 {
        return "…".to_string();
    }
    let mut out: String = label.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn group_thousands(value: f64) -> String {
    let digits = (value as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.5e12, "$2.5T")]
    #[case(1e12, "$1.0T")]
    #[case(999_999_999_999.0, "$1000.0B")]
    #[case(1.54e9, "$1.5B")]
    #[case(820_000_000.0, "$820.0M")]
    #[case(1_000_000.0, "$1.0M")]
    #[case(999_999.0, "$999,999")]
    #[case(12_500.0, "$12,500")]
    #[case(0.0, "$0")]
    #[case(-3.2e9, "-$3.2B")]
    fn compact_currency_thresholds(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_compact_mxn(value), expected);
    }

    #[rstest]
    #[case(0.345, "34.5%")]
    #[case(0.0, "0.0%")]
    #[case(1.0, "100.0%")]
    #[case(0.1234, "12.3%")]
    fn risk_percent_one_decimal(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(format_risk_percent(score), expected);
    }

    #[test]
    fn optional_risk_renders_dash() {
        assert_eq!(format_optional_risk(None), "-");
        assert_eq!(format_optional_risk(Some(0.5)), "50.0%");
    }

    #[test]
    fn truncate_label_keeps_short_labels() {
        assert_eq!(truncate_label("IMSS", 30), "IMSS");
    }

    #[test]
    fn truncate_label_appends_ellipsis() {
        let out = truncate_label("Instituto Mexicano del Seguro Social", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
        assert!(out.starts_with("Instituto"));
    }

    #[test]
    fn truncate_label_is_char_safe() {
        assert_eq!(truncate_label("Compañía Ñandú", 5), "Comp…");
    }
}
