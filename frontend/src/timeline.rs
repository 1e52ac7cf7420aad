use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Asia::Taipei;

/// A calendar quarter. Field order matters: the derived ordering compares year first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quarter {
    pub year: i32,
    pub quarter: u32,
}

impl Quarter {
    pub const fn new(year: i32, quarter: u32) -> Self {
        Self { year, quarter }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() / 3 + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelinePhase {
    pub label: &'static str,
    pub title: &'static str,
    pub date_range: &'static str,
    pub start: Quarter,
    /// Inclusive.
    pub end: Quarter,
    pub items: &'static [&'static str],
}

impl TimelinePhase {
    pub fn contains(&self, quarter: Quarter) -> bool {
        self.start <= quarter && quarter <= self.end
    }
}

/// How the "We are here" marker picks its phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentPhaseRule {
    Pinned(usize),
    /// Phase whose quarters contain today's date; clamps to the first/last phase outside the roadmap.
    Calendar,
}

pub fn current_phase_index(phases: &[TimelinePhase], rule: CurrentPhaseRule, today: NaiveDate) -> Option<usize> {
    let last = phases.len().checked_sub(1)?;
    match rule {
        CurrentPhaseRule::Pinned(index) => Some(index.min(last)),
        CurrentPhaseRule::Calendar => {
            let now = Quarter::containing(today);
            if let Some(index) = phases.iter().position(|phase| phase.contains(now)) {
                return Some(index);
            }
            // Gaps between phases count toward the phase that just ended.
            Some(phases.iter().rposition(|phase| phase.start <= now).unwrap_or(0))
        }
    }
}

/// Today's date at the association (Kaohsiung).
pub fn today_in_taipei() -> NaiveDate {
    Utc::now().with_timezone(&Taipei).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TIMELINE;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn quarter_of_date() {
        assert_eq!(Quarter::containing(date(2026, 1, 1)), Quarter::new(2026, 1));
        assert_eq!(Quarter::containing(date(2026, 3, 31)), Quarter::new(2026, 1));
        assert_eq!(Quarter::containing(date(2026, 4, 1)), Quarter::new(2026, 2));
        assert_eq!(Quarter::containing(date(2026, 12, 31)), Quarter::new(2026, 4));
    }

    #[test]
    fn pinned_rule_ignores_the_clock() {
        for today in [date(2020, 1, 1), date(2026, 5, 5), date(2030, 1, 1)] {
            assert_eq!(current_phase_index(&TIMELINE, CurrentPhaseRule::Pinned(0), today), Some(0));
        }
        assert_eq!(current_phase_index(&TIMELINE, CurrentPhaseRule::Pinned(9), date(2026, 1, 1)), Some(2));
    }

    #[test]
    fn calendar_rule_follows_the_roadmap() {
        let rule = CurrentPhaseRule::Calendar;
        assert_eq!(current_phase_index(&TIMELINE, rule, date(2025, 11, 3)), Some(0));
        assert_eq!(current_phase_index(&TIMELINE, rule, date(2026, 2, 14)), Some(0));
        assert_eq!(current_phase_index(&TIMELINE, rule, date(2026, 6, 30)), Some(1));
        assert_eq!(current_phase_index(&TIMELINE, rule, date(2026, 7, 1)), Some(2));
        assert_eq!(current_phase_index(&TIMELINE, rule, date(2026, 10, 19)), Some(2));
        assert_eq!(current_phase_index(&TIMELINE, rule, date(2027, 3, 1)), Some(2));
    }

    #[test]
    fn empty_roadmap_has_no_marker() {
        assert_eq!(current_phase_index(&[], CurrentPhaseRule::Calendar, date(2026, 1, 1)), None);
    }
}
