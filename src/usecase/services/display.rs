use crate::domain::entities::table::CellValue;
use crate::usecase::services::input::parse_date;

const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Blue,
    Gray,
    Red,
    Yellow,
}

impl BadgeTone {
    /// Background and foreground colors for the badge.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            BadgeTone::Green => ("#dcfce7", "#166534"),
            BadgeTone::Blue => ("#dbeafe", "#1e40af"),
            BadgeTone::Gray => ("#f3f4f6", "#1f2937"),
            BadgeTone::Red => ("#fee2e2", "#991b1b"),
            BadgeTone::Yellow => ("#fef9c3", "#854d0e"),
        }
    }
}

pub fn badge_tone(value: &str) -> BadgeTone {
    match value {
        "Complete" | "Low" => BadgeTone::Green,
        "In Progress" => BadgeTone::Blue,
        "High" => BadgeTone::Red,
        "Medium" => BadgeTone::Yellow,
        _ => BadgeTone::Gray,
    }
}

pub fn format_cell(value: &CellValue) -> String {
    match value {
        CellValue::Text(text) | CellValue::Select(text) => text.clone(),
        CellValue::Number(number) => format_number(*number),
        CellValue::Checkbox(checked) => (if *checked { "✓" } else { "" }).to_string(),
        CellValue::Date(raw) => format_date(raw),
    }
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// `MMM dd, yyyy`, or empty for unset and unparsable dates.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_month_day_year() {
        assert_eq!(format_date("2024-03-05"), "Mar 05, 2024");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("garbage"), "");
    }

    #[test]
    fn whole_numbers_drop_fraction() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn badge_tones_follow_status_and_priority() {
        assert_eq!(badge_tone("Complete"), BadgeTone::Green);
        assert_eq!(badge_tone("In Progress"), BadgeTone::Blue);
        assert_eq!(badge_tone("Not Started"), BadgeTone::Gray);
        assert_eq!(badge_tone("High"), BadgeTone::Red);
        assert_eq!(badge_tone("Medium"), BadgeTone::Yellow);
        assert_eq!(badge_tone("Option 1"), BadgeTone::Gray);
    }

    #[test]
    fn checkbox_renders_mark() {
        assert_eq!(format_cell(&CellValue::Checkbox(true)), "✓");
        assert_eq!(format_cell(&CellValue::Checkbox(false)), "");
    }
}
