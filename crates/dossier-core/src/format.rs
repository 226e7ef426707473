//! Display formatting shared by the renderer.

/// Significant digits kept in a percentage. `f64` carries 15-17, so this
/// only drops representation noise such as `0.57 * 100 = 56.99999999999999`.
const PERCENT_SIGNIFICANT_DIGITS: usize = 15;

const BYLINE_SEPARATOR: &str = " • ";

/// `8.61 -> "$8.61"`, `7.5 -> "$7.50"`.
pub fn currency(prefix: &str, value: f64) -> String {
    format!("{prefix}{value:.2}")
}

/// Confidence score as a percentage: the literal `score * 100` with no
/// rounding policy, so `0.85 -> "85%"` and `0.855 -> "85.5%"`.
pub fn percent(score: f64) -> String {
    let scaled = score * 100.0;
    format!("{}%", positive_zero(significant(scaled, PERCENT_SIGNIFICANT_DIGITS)))
}

/// Value in thousands rounded half away from zero: `613000 -> "$613K"`.
pub fn thousands(prefix: &str, value: f64) -> String {
    let scaled = (value / 1000.0).round();
    format!("{prefix}{}K", positive_zero(scaled))
}

/// `100000 -> "100,000"`, `-5000 -> "-5,000"`.
pub fn grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn flag_label(active: bool) -> &'static str {
    if active {
        "YES"
    } else {
        "NO"
    }
}

/// `"date • summary"`, leaving out whichever part is absent or blank.
pub fn byline(date: &str, summary: Option<&str>) -> String {
    [Some(date), summary]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(BYLINE_SEPARATOR)
}

/// Rounds to `digits` significant digits, relative to the magnitude. Never
/// turns a finite value into an infinity.
fn significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    format!("{value:.*e}", digits.saturating_sub(1))
        .parse::<f64>()
        .ok()
        .filter(|trimmed| trimmed.is_finite())
        .unwrap_or(value)
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_always_has_two_fraction_digits() {
        assert_eq!(currency("$", 8.61), "$8.61");
        assert_eq!(currency("$", 7.5), "$7.50");
        assert_eq!(currency("$", 46.7), "$46.70");
        assert_eq!(currency("$", 0.0), "$0.00");
        assert_eq!(currency("€", 1234.567), "€1234.57");
    }

    #[test]
    fn percent_is_the_literal_product() {
        assert_eq!(percent(0.85), "85%");
        assert_eq!(percent(0.855), "85.5%");
        assert_eq!(percent(0.57), "57%");
        assert_eq!(percent(1.2), "120%");
        assert_eq!(percent(0.0), "0%");
        assert_eq!(percent(-0.0), "0%");
    }

    #[test]
    fn percent_keeps_every_real_digit() {
        assert_eq!(percent(0.123456789123), "12.3456789123%");
        assert_eq!(percent(0.000001234), "0.0001234%");
        assert_eq!(percent(-0.25), "-25%");
    }

    #[test]
    fn percent_of_huge_score_stays_finite() {
        let shown = percent(1e300);
        assert!(!shown.contains("inf"), "got {shown}");
        assert!(shown.starts_with('1') && shown.ends_with('%'));
        assert_eq!(shown.len(), "1".len() + 302 + "%".len());
    }

    #[test]
    fn thousands_rounds_to_whole_k() {
        assert_eq!(thousands("$", 613_000.0), "$613K");
        assert_eq!(thousands("$", 290_000.0), "$290K");
        assert_eq!(thousands("$", 1_500.0), "$2K");
        assert_eq!(thousands("$", 400.0), "$0K");
        assert_eq!(thousands("$", -400.0), "$0K");
    }

    #[test]
    fn groups_digits_by_thousands() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(100_000), "100,000");
        assert_eq!(grouped(1_234_567), "1,234,567");
        assert_eq!(grouped(-5_000), "-5,000");
        assert_eq!(grouped(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn byline_omits_missing_summary() {
        assert_eq!(byline("2026-02-04", Some("Program funded")), "2026-02-04 • Program funded");
        assert_eq!(byline("2026-02-04", None), "2026-02-04");
        assert_eq!(byline("2026-02-04", Some("  ")), "2026-02-04");
        assert_eq!(byline("", Some("Undated")), "Undated");
    }
}
