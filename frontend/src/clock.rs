use chrono::{Datelike, Local, NaiveDate};

/// Where "today" comes from when the page renders.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Clock {
    /// Browser clock (JS `Date` on wasm).
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn year(&self) -> i32 {
        self.today().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        let date = NaiveDate::from_ymd_opt(2031, 12, 31).unwrap();
        assert_eq!(Clock::Fixed(date).year(), 2031);
    }

    #[test]
    fn system_clock_matches_local_time() {
        let before = Local::now().year();
        let year = Clock::System.year();
        let after = Local::now().year();
        assert!(before <= year && year <= after);
    }
}
