//! Clock widget: 24h time with a blinking colon, then the date

use am_widgets::PanelView;
use chrono::{Local, NaiveDateTime, Timelike};

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// The colon is lit on even seconds, dimmed on odd ones
pub fn colon_visible(time: &NaiveDateTime) -> bool {
    time.second() % 2 == 0
}

/// `14:05 09`, or `14 05 09` while the colon is dimmed
pub fn time_line(time: &NaiveDateTime) -> String {
    let colon = if colon_visible(time) { ':' } else { ' ' };
    format!("{:02}{}{:02} {:02}", time.hour(), colon, time.minute(), time.second())
}

/// `MON, JAN 13, 2025`
pub fn date_line(time: &NaiveDateTime) -> String {
    time.format("%a, %b %-d, %Y").to_string().to_uppercase()
}

pub fn render(time: &NaiveDateTime) -> PanelView {
    PanelView::new()
        .heading("[CLK] Clock")
        .line(time_line(time))
        .line(date_line(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 13)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn test_colon_blinks() {
        assert_eq!(time_line(&at(14, 5, 8)), "14:05 08");
        assert_eq!(time_line(&at(14, 5, 9)), "14 05 09");
        assert_eq!(time_line(&at(0, 0, 0)), "00:00 00");
    }

    #[test]
    fn test_date_upper_cased() {
        assert_eq!(date_line(&at(9, 30, 0)), "MON, JAN 13, 2025");
    }

    #[test]
    fn test_render() {
        let view = render(&at(23, 59, 58));
        assert_eq!(view.lines()[0], "== [CLK] CLOCK ==");
        assert!(view.contains("23:59 58"));
        assert!(view.contains("MON, JAN 13, 2025"));
    }
}
