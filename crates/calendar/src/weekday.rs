//! Day-of-week computation on the continuous day-count axis.

/// A day of the week, numbered Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Returns the weekday number (Sunday = 0 .. Saturday = 6).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English name of the weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

/// Returns the weekday of a day count (Julian day number).
///
/// The alignment is fixed by the axis itself: JDN 2458203 (Gregorian
/// 2018-03-25) is a Sunday.
pub fn day_of_week(day_count: i64) -> Weekday {
    match (day_count + 1).rem_euclid(7) {
        0 => Weekday::Sunday,
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        6 => Weekday::Saturday,
        _ => unreachable!("rem_euclid(7) is always in 0..7"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sunday() {
        // Gregorian 2018-03-25.
        assert_eq!(day_of_week(2_458_203), Weekday::Sunday);
    }

    #[test]
    fn full_week_from_sunday() {
        let names = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        for (offset, name) in names.iter().enumerate() {
            let weekday = day_of_week(2_458_203 + offset as i64);
            assert_eq!(weekday.name(), *name);
            assert_eq!(weekday.number(), offset as u8);
        }
    }

    #[test]
    fn period_is_seven_days() {
        for offset in -14..=14i64 {
            assert_eq!(
                day_of_week(2_458_203 + offset * 7),
                Weekday::Sunday,
                "offset {offset} weeks"
            );
        }
    }

    #[test]
    fn hebrew_epoch_is_monday() {
        // 1 Tishri of Hebrew year 1.
        assert_eq!(day_of_week(347_998), Weekday::Monday);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Weekday>();
    }
}
