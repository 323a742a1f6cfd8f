use luach_calendar::{
    day_count_to_gregorian, day_count_to_hebrew, gregorian_to_day_count, hebrew_to_day_count,
    is_leap_year, month, month_length, rosh_hashanah, year_length,
};

#[test]
fn hebrew_round_trip_every_day_of_sample_years() {
    // One year of each kind: deficient/regular/complete, common and leap.
    for year in [5774, 5777, 5778, 5780, 5782, 5784] {
        for &m in month::months_of_year(is_leap_year(year)) {
            let max_day = month_length(year, m).unwrap();
            for day in 1..=max_day {
                let dc = hebrew_to_day_count(year, m, day).unwrap();
                assert_eq!(
                    day_count_to_hebrew(dc).unwrap(),
                    (year, m, day),
                    "round trip failed for {year}-{m}-{day} (dc {dc})"
                );
            }
        }
    }
}

#[test]
fn day_count_round_trip_is_contiguous() {
    // Walking the axis day by day must walk the Hebrew calendar with no
    // gaps or repeats.
    let start = rosh_hashanah(5777);
    let end = rosh_hashanah(5780);
    let mut previous = day_count_to_hebrew(start - 1).unwrap();
    for dc in start..end {
        let triple = day_count_to_hebrew(dc).unwrap();
        assert_ne!(triple, previous, "repeat at dc {dc}");
        assert_eq!(hebrew_to_day_count(triple.0, triple.1, triple.2).unwrap(), dc);
        previous = triple;
    }
}

#[test]
fn gregorian_round_trip_sample_range() {
    let start = gregorian_to_day_count(1999, 12, 25).unwrap();
    for offset in 0..800 {
        let dc = start + offset;
        let (y, m, d) = day_count_to_gregorian(dc);
        assert_eq!(
            gregorian_to_day_count(y, m, d).unwrap(),
            dc,
            "round trip failed for {y}-{m}-{d}"
        );
    }
}

#[test]
fn year_starts_partition_the_axis() {
    for year in 5700..5800 {
        assert_eq!(
            rosh_hashanah(year) + i64::from(year_length(year)),
            rosh_hashanah(year + 1),
            "year {year} does not abut year {}",
            year + 1
        );
    }
}
