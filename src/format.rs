//! Locale-aware display formatting
//!
//! Formatting never fails outward: anything that cannot be rendered falls
//! back to the raw value.

use crate::countdown::CountdownParts;
use crate::i18n::Language;
use std::fmt::{self, Write};

fn decimal_separator(language: Language) -> char {
    match language {
        Language::En => '.',
        Language::Ar => '٫',
        Language::Tr | Language::Uz | Language::Ru | Language::Es => ',',
    }
}

fn try_format_percent(language: Language, value: f64) -> Result<String, fmt::Error> {
    if !value.is_finite() {
        return Err(fmt::Error);
    }

    let rounded = (value * 10.0).round() / 10.0;
    let mut number = if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    };
    if let Some(dot) = number.find('.') {
        number.replace_range(dot..dot + 1, &decimal_separator(language).to_string());
    }

    let mut out = String::new();
    match language {
        Language::Tr => write!(out, "%{number}")?,
        Language::Ar => write!(out, "{number}٪")?,
        Language::Ru | Language::Uz | Language::Es => write!(out, "{number}\u{a0}%")?,
        Language::En => write!(out, "{number}%")?,
    }
    Ok(out)
}

/// Format a progress percentage, e.g. `42%` or `%42,5`
pub fn format_percent(language: Language, value: f64) -> String {
    try_format_percent(language, value).unwrap_or_else(|_| {
        tracing::debug!(value, "percent not formattable, using raw value");
        value.to_string()
    })
}

fn try_format_countdown(language: Language, parts: &CountdownParts) -> Result<String, fmt::Error> {
    let strings = &language.translations().countdown;
    if parts.is_finished() {
        return Ok(strings.launched.to_string());
    }

    let mut out = String::new();
    write!(
        out,
        "{} {} {:02} {} {:02} {} {:02} {}",
        parts.days,
        strings.days,
        parts.hours,
        strings.hours,
        parts.minutes,
        strings.minutes,
        parts.seconds,
        strings.seconds
    )?;
    Ok(out)
}

pub fn format_countdown(language: Language, parts: &CountdownParts) -> String {
    try_format_countdown(language, parts).unwrap_or_else(|_| format!("{parts:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_by_language() {
        assert_eq!(format_percent(Language::En, 42.0), "42%");
        assert_eq!(format_percent(Language::En, 42.46), "42.5%");
        assert_eq!(format_percent(Language::Tr, 42.5), "%42,5");
        assert_eq!(format_percent(Language::Ru, 100.0), "100\u{a0}%");
        assert_eq!(format_percent(Language::Ar, 7.25), "7٫3٪");
    }

    #[test]
    fn test_percent_falls_back_to_raw_value() {
        assert_eq!(format_percent(Language::En, f64::NAN), "NaN");
        assert_eq!(format_percent(Language::Es, f64::INFINITY), "inf");
    }

    #[test]
    fn test_countdown_uses_bundle_labels() {
        let parts = CountdownParts {
            days: 2,
            hours: 3,
            minutes: 4,
            seconds: 5,
        };
        assert_eq!(
            format_countdown(Language::En, &parts),
            "2 days 03 hours 04 minutes 05 seconds"
        );
        assert_eq!(
            format_countdown(Language::Tr, &parts),
            "2 gün 03 saat 04 dakika 05 saniye"
        );
    }

    #[test]
    fn test_finished_countdown_shows_launch_text() {
        assert_eq!(
            format_countdown(Language::Es, &CountdownParts::default()),
            "La red principal está activa"
        );
    }
}
