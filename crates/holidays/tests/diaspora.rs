use luach_calendar::{month, HebrewDate};
use luach_holidays::{holidays_on, rules, Holiday, Locale};

fn date(year: i32, month: u8, day: u8) -> HebrewDate {
    HebrewDate::new(year, month, day).unwrap()
}

#[test]
fn locale_defaults_to_diaspora() {
    assert_eq!(Locale::default(), Locale::Diaspora);
    assert!(Locale::default().is_diaspora());
    assert!(!Locale::Israel.is_diaspora());
}

#[test]
fn simchat_torah_flips_with_locale() {
    let shemini_atzeret = date(5778, month::TISHRI, 22);
    let day_after = date(5778, month::TISHRI, 23);

    assert!(rules::is_simchat_torah(shemini_atzeret, Locale::Israel));
    assert!(!rules::is_simchat_torah(shemini_atzeret, Locale::Diaspora));

    assert!(rules::is_simchat_torah(day_after, Locale::Diaspora));
    assert!(!rules::is_simchat_torah(day_after, Locale::Israel));
}

#[test]
fn chol_hamoed_sukkot_starts_earlier_in_israel() {
    let day_16 = date(5778, month::TISHRI, 16);
    assert!(rules::is_chol_hamoed_sukkot(day_16, Locale::Israel));
    assert!(!rules::is_chol_hamoed_sukkot(day_16, Locale::Diaspora));

    for day in 17..=20 {
        let d = date(5778, month::TISHRI, day);
        assert!(rules::is_chol_hamoed_sukkot(d, Locale::Diaspora));
        assert!(rules::is_chol_hamoed_sukkot(d, Locale::Israel));
    }
    assert!(!rules::is_chol_hamoed_sukkot(
        date(5778, month::TISHRI, 21),
        Locale::Israel
    ));
}

#[test]
fn chol_hamoed_pesach_starts_earlier_in_israel() {
    let day_16 = date(5778, month::NISAN, 16);
    assert!(rules::is_chol_hamoed_pesach(day_16, Locale::Israel));
    assert!(!rules::is_chol_hamoed_pesach(day_16, Locale::Diaspora));

    // The range never leaks into another month.
    assert!(!rules::is_chol_hamoed_pesach(
        date(5778, month::TISHRI, 17),
        Locale::Diaspora
    ));
}

#[test]
fn isru_chag_shifts_with_locale() {
    assert!(rules::is_isru_chag_sukkot(
        date(5778, month::TISHRI, 24),
        Locale::Diaspora
    ));
    assert!(rules::is_isru_chag_sukkot(
        date(5778, month::TISHRI, 23),
        Locale::Israel
    ));

    assert!(rules::is_isru_chag_pesach(
        date(5778, month::NISAN, 23),
        Locale::Diaspora
    ));
    assert!(rules::is_isru_chag_pesach(
        date(5778, month::NISAN, 22),
        Locale::Israel
    ));

    assert!(rules::is_isru_chag_shavuot(
        date(5778, month::SIVAN, 8),
        Locale::Diaspora
    ));
    assert!(rules::is_isru_chag_shavuot(
        date(5778, month::SIVAN, 7),
        Locale::Israel
    ));
}

#[test]
fn registry_reflects_locale() {
    let shemini_atzeret = date(5778, month::TISHRI, 22);

    let diaspora = holidays_on(shemini_atzeret, Locale::Diaspora);
    assert!(diaspora.contains(&Holiday::SheminiAtzeret));
    assert!(!diaspora.contains(&Holiday::SimchatTorah));

    let israel = holidays_on(shemini_atzeret, Locale::Israel);
    assert!(israel.contains(&Holiday::SheminiAtzeret));
    assert!(israel.contains(&Holiday::SimchatTorah));
}

#[test]
fn pesach_day_8_is_in_nisan() {
    // 22 Nisan, regardless of locale.
    assert!(rules::is_pesach_day_8(date(5778, month::NISAN, 22)));
    assert!(!rules::is_pesach_day_8(date(5778, month::TISHRI, 22)));
}
