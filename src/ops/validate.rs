use chrono::NaiveDate;

/// Example shown to the user alongside a rejected date
pub const DATE_EXAMPLE: &str = "20102025";

/// Validate a `ddmmyyyy` fixture date.
///
/// The input must be exactly 8 ASCII digits naming a real calendar day
/// (leap years respected). Returns the input unchanged on success, since it
/// is already in storage form.
pub fn parse_date(s: &str) -> Option<String> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day: u32 = s[0..2].parse().ok()?;
    let month: u32 = s[2..4].parse().ok()?;
    let year: i32 = s[4..8].parse().ok()?;
    if year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day).map(|_| s.to_string())
}

/// Default logo path for a team: `/logos/<name with spaces as underscores>.png`
pub fn default_logo_path(team: &str) -> String {
    format!("/logos/{}.png", team.trim().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_dates_unchanged() {
        assert_eq!(parse_date("20102025").as_deref(), Some("20102025"));
        assert_eq!(parse_date("01012000").as_deref(), Some("01012000"));
        assert_eq!(parse_date("31122099").as_deref(), Some("31122099"));
    }

    #[test]
    fn respects_leap_years() {
        assert!(parse_date("29022024").is_some());
        assert!(parse_date("29022025").is_none());
        assert!(parse_date("29022000").is_some());
        assert!(parse_date("29021900").is_none());
    }

    #[test]
    fn rejects_impossible_calendar_values() {
        assert!(parse_date("30022025").is_none());
        assert!(parse_date("31042025").is_none());
        assert!(parse_date("00012025").is_none());
        assert!(parse_date("01002025").is_none());
        assert!(parse_date("01132025").is_none());
        assert!(parse_date("32012025").is_none());
        assert!(parse_date("01010000").is_none());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_date("").is_none());
        assert!(parse_date("2010202").is_none());
        assert!(parse_date("201020255").is_none());
        // The hyphenated form is not accepted
        assert!(parse_date("20-10-2025").is_none());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(parse_date("2010202a").is_none());
        assert!(parse_date(" 0102025").is_none());
        assert!(parse_date("+1012025").is_none());
        // Eight characters, but not ASCII digits
        assert!(parse_date("２０１０２０２５").is_none());
    }

    #[test]
    fn default_logo_path_replaces_spaces() {
        assert_eq!(default_logo_path("Real Madrid"), "/logos/Real_Madrid.png");
        assert_eq!(default_logo_path("Arsenal"), "/logos/Arsenal.png");
        assert_eq!(default_logo_path("  Inter  Milan "), "/logos/Inter__Milan.png");
        assert_eq!(default_logo_path("PSG"), "/logos/PSG.png");
    }
}
