//! Opening-hours extraction from the place detail payload.

use crate::types::{HoursInfo, OpenHour};

/// Flattens an `openHour` block into display text and a realtime flag.
///
/// Every time slot becomes one `"<day>  <range>"` line, followed by an
/// indented break-time line when the slot has one. An empty slot set maps
/// to `None`, not an empty string. The realtime flag maps `"Y"` to open,
/// `"N"` to closed, and anything else (including absent) to unknown.
#[must_use]
pub fn parse_open_hours(open_hour: Option<&OpenHour>) -> HoursInfo {
    let Some(open_hour) = open_hour else {
        return HoursInfo::default();
    };

    let mut lines = Vec::new();
    for period in &open_hour.period_list {
        for slot in &period.time_list {
            lines.push(format!("{}  {}", slot.day_of_week, slot.time_se));
            if let Some(break_time) = slot.break_time.as_deref() {
                if !break_time.is_empty() {
                    lines.push(format!("  브레이크  {break_time}"));
                }
            }
        }
    }

    let hours = if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    };

    let is_open = match open_hour
        .realtime
        .as_ref()
        .and_then(|r| r.open.as_deref())
    {
        Some("Y") => Some(true),
        Some("N") => Some(false),
        _ => None,
    };

    HoursInfo { hours, is_open }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OpeningPeriod, RealtimeStatus, TimeSlot};

    fn slot(day: &str, range: &str, break_time: Option<&str>) -> TimeSlot {
        TimeSlot {
            day_of_week: day.to_string(),
            time_se: range.to_string(),
            break_time: break_time.map(str::to_string),
        }
    }

    fn open_hour(slots: Vec<TimeSlot>, realtime: Option<&str>) -> OpenHour {
        OpenHour {
            period_list: vec![OpeningPeriod { time_list: slots }],
            realtime: realtime.map(|flag| RealtimeStatus {
                open: Some(flag.to_string()),
            }),
        }
    }

    #[test]
    fn absent_open_hour_yields_default() {
        assert_eq!(parse_open_hours(None), HoursInfo::default());
    }

    #[test]
    fn builds_one_line_per_time_slot() {
        let oh = open_hour(
            vec![
                slot("월~금", "09:00 ~ 18:00", None),
                slot("토", "10:00 ~ 14:00", None),
            ],
            None,
        );
        let info = parse_open_hours(Some(&oh));
        assert_eq!(
            info.hours.as_deref(),
            Some("월~금  09:00 ~ 18:00\n토  10:00 ~ 14:00")
        );
    }

    #[test]
    fn break_time_gets_an_indented_line() {
        let oh = open_hour(vec![slot("매일", "10:00 ~ 22:00", Some("15:00 ~ 16:00"))], None);
        let info = parse_open_hours(Some(&oh));
        assert_eq!(
            info.hours.as_deref(),
            Some("매일  10:00 ~ 22:00\n  브레이크  15:00 ~ 16:00")
        );
    }

    #[test]
    fn empty_break_time_is_skipped() {
        let oh = open_hour(vec![slot("매일", "10:00 ~ 22:00", Some(""))], None);
        let info = parse_open_hours(Some(&oh));
        assert_eq!(info.hours.as_deref(), Some("매일  10:00 ~ 22:00"));
    }

    #[test]
    fn no_slots_maps_to_none_not_empty_string() {
        let oh = OpenHour {
            period_list: vec![],
            realtime: None,
        };
        let info = parse_open_hours(Some(&oh));
        assert_eq!(info.hours, None);
    }

    #[test]
    fn realtime_flag_mapping_is_exhaustive() {
        let open = open_hour(vec![], Some("Y"));
        assert_eq!(parse_open_hours(Some(&open)).is_open, Some(true));

        let closed = open_hour(vec![], Some("N"));
        assert_eq!(parse_open_hours(Some(&closed)).is_open, Some(false));

        let junk = open_hour(vec![], Some("maybe"));
        assert_eq!(parse_open_hours(Some(&junk)).is_open, None);

        let missing = open_hour(vec![], None);
        assert_eq!(parse_open_hours(Some(&missing)).is_open, None);
    }
}
