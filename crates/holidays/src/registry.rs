//! A registry of every implemented holiday and observance.

use luach_calendar::HebrewDate;

use crate::rules::{self, Locale};

/// A named holiday or observance.
///
/// `Hanukkah` is the aggregate of all eight days; the individual days
/// are queried with [`rules::hanukkah_day`].
///
/// Israeli civil holidays (Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut)
/// are intentionally absent: their postponement rules changed over time
/// and are not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    ErevRoshHashanah,
    RoshHashanahDay1,
    RoshHashanahDay2,
    TzomGedaliah,
    ErevYomKippur,
    YomKippur,
    ErevSukkot,
    SukkotDay1,
    SukkotDay2,
    CholHamoedSukkot,
    HoshanaRabbah,
    SheminiAtzeret,
    SimchatTorah,
    IsruChagSukkot,
    Hanukkah,
    TzomTevet,
    TuBShevat,
    PurimKatan,
    ShushanPurimKatan,
    TanisEsther,
    Purim,
    ShushanPurim,
    ShabbatHagadol,
    ErevPesach,
    PesachDay1,
    PesachDay2,
    CholHamoedPesach,
    PesachDay7,
    PesachDay8,
    IsruChagPesach,
    PesachSheini,
    LagBOmer,
    YomYerushalayim,
    ErevShavuot,
    ShavuotDay1,
    ShavuotDay2,
    IsruChagShavuot,
    TzomTammuz,
    TishaBAv,
    TuBAv,
    RoshChodesh,
}

impl Holiday {
    /// Every implemented holiday, in calendar order through the year.
    pub const ALL: [Holiday; 41] = [
        Holiday::ErevRoshHashanah,
        Holiday::RoshHashanahDay1,
        Holiday::RoshHashanahDay2,
        Holiday::TzomGedaliah,
        Holiday::ErevYomKippur,
        Holiday::YomKippur,
        Holiday::ErevSukkot,
        Holiday::SukkotDay1,
        Holiday::SukkotDay2,
        Holiday::CholHamoedSukkot,
        Holiday::HoshanaRabbah,
        Holiday::SheminiAtzeret,
        Holiday::SimchatTorah,
        Holiday::IsruChagSukkot,
        Holiday::Hanukkah,
        Holiday::TzomTevet,
        Holiday::TuBShevat,
        Holiday::PurimKatan,
        Holiday::ShushanPurimKatan,
        Holiday::TanisEsther,
        Holiday::Purim,
        Holiday::ShushanPurim,
        Holiday::ShabbatHagadol,
        Holiday::ErevPesach,
        Holiday::PesachDay1,
        Holiday::PesachDay2,
        Holiday::CholHamoedPesach,
        Holiday::PesachDay7,
        Holiday::PesachDay8,
        Holiday::IsruChagPesach,
        Holiday::PesachSheini,
        Holiday::LagBOmer,
        Holiday::YomYerushalayim,
        Holiday::ErevShavuot,
        Holiday::ShavuotDay1,
        Holiday::ShavuotDay2,
        Holiday::IsruChagShavuot,
        Holiday::TzomTammuz,
        Holiday::TishaBAv,
        Holiday::TuBAv,
        Holiday::RoshChodesh,
    ];

    /// Returns the English name of the holiday.
    pub fn name(self) -> &'static str {
        match self {
            Holiday::ErevRoshHashanah => "Erev Rosh Hashanah",
            Holiday::RoshHashanahDay1 => "Rosh Hashanah I",
            Holiday::RoshHashanahDay2 => "Rosh Hashanah II",
            Holiday::TzomGedaliah => "Tzom Gedaliah",
            Holiday::ErevYomKippur => "Erev Yom Kippur",
            Holiday::YomKippur => "Yom Kippur",
            Holiday::ErevSukkot => "Erev Sukkot",
            Holiday::SukkotDay1 => "Sukkot I",
            Holiday::SukkotDay2 => "Sukkot II",
            Holiday::CholHamoedSukkot => "Chol HaMoed Sukkot",
            Holiday::HoshanaRabbah => "Hoshana Rabbah",
            Holiday::SheminiAtzeret => "Shemini Atzeret",
            Holiday::SimchatTorah => "Simchat Torah",
            Holiday::IsruChagSukkot => "Isru Chag Sukkot",
            Holiday::Hanukkah => "Hanukkah",
            Holiday::TzomTevet => "Tzom Tevet",
            Holiday::TuBShevat => "Tu BiShvat",
            Holiday::PurimKatan => "Purim Katan",
            Holiday::ShushanPurimKatan => "Shushan Purim Katan",
            Holiday::TanisEsther => "Tanis Esther",
            Holiday::Purim => "Purim",
            Holiday::ShushanPurim => "Shushan Purim",
            Holiday::ShabbatHagadol => "Shabbat HaGadol",
            Holiday::ErevPesach => "Erev Pesach",
            Holiday::PesachDay1 => "Pesach I",
            Holiday::PesachDay2 => "Pesach II",
            Holiday::CholHamoedPesach => "Chol HaMoed Pesach",
            Holiday::PesachDay7 => "Pesach VII",
            Holiday::PesachDay8 => "Pesach VIII",
            Holiday::IsruChagPesach => "Isru Chag Pesach",
            Holiday::PesachSheini => "Pesach Sheini",
            Holiday::LagBOmer => "Lag BaOmer",
            Holiday::YomYerushalayim => "Yom Yerushalayim",
            Holiday::ErevShavuot => "Erev Shavuot",
            Holiday::ShavuotDay1 => "Shavuot I",
            Holiday::ShavuotDay2 => "Shavuot II",
            Holiday::IsruChagShavuot => "Isru Chag Shavuot",
            Holiday::TzomTammuz => "Tzom Tammuz",
            Holiday::TishaBAv => "Tisha B'Av",
            Holiday::TuBAv => "Tu B'Av",
            Holiday::RoshChodesh => "Rosh Chodesh",
        }
    }

    /// Returns whether the holiday falls on `date` under the given
    /// locale's customs.
    pub fn is_on(self, date: HebrewDate, locale: Locale) -> bool {
        match self {
            Holiday::ErevRoshHashanah => rules::is_erev_rosh_hashanah(date),
            Holiday::RoshHashanahDay1 => rules::is_rosh_hashanah_day_1(date),
            Holiday::RoshHashanahDay2 => rules::is_rosh_hashanah_day_2(date),
            Holiday::TzomGedaliah => rules::is_tzom_gedaliah(date),
            Holiday::ErevYomKippur => rules::is_erev_yom_kippur(date),
            Holiday::YomKippur => rules::is_yom_kippur(date),
            Holiday::ErevSukkot => rules::is_erev_sukkot(date),
            Holiday::SukkotDay1 => rules::is_sukkot_day_1(date),
            Holiday::SukkotDay2 => rules::is_sukkot_day_2(date),
            Holiday::CholHamoedSukkot => rules::is_chol_hamoed_sukkot(date, locale),
            Holiday::HoshanaRabbah => rules::is_hoshana_rabbah(date),
            Holiday::SheminiAtzeret => rules::is_shemini_atzeret(date),
            Holiday::SimchatTorah => rules::is_simchat_torah(date, locale),
            Holiday::IsruChagSukkot => rules::is_isru_chag_sukkot(date, locale),
            Holiday::Hanukkah => rules::is_hanukkah(date),
            Holiday::TzomTevet => rules::is_tzom_tevet(date),
            Holiday::TuBShevat => rules::is_tu_b_shevat(date),
            Holiday::PurimKatan => rules::is_purim_katan(date),
            Holiday::ShushanPurimKatan => rules::is_shushan_purim_katan(date),
            Holiday::TanisEsther => rules::is_tanis_esther(date),
            Holiday::Purim => rules::is_purim(date),
            Holiday::ShushanPurim => rules::is_shushan_purim(date),
            Holiday::ShabbatHagadol => rules::is_shabbat_hagadol(date),
            Holiday::ErevPesach => rules::is_erev_pesach(date),
            Holiday::PesachDay1 => rules::is_pesach_day_1(date),
            Holiday::PesachDay2 => rules::is_pesach_day_2(date),
            Holiday::CholHamoedPesach => rules::is_chol_hamoed_pesach(date, locale),
            Holiday::PesachDay7 => rules::is_pesach_day_7(date),
            Holiday::PesachDay8 => rules::is_pesach_day_8(date),
            Holiday::IsruChagPesach => rules::is_isru_chag_pesach(date, locale),
            Holiday::PesachSheini => rules::is_pesach_sheini(date),
            Holiday::LagBOmer => rules::is_lag_b_omer(date),
            Holiday::YomYerushalayim => rules::is_yom_yerushalayim(date),
            Holiday::ErevShavuot => rules::is_erev_shavuot(date),
            Holiday::ShavuotDay1 => rules::is_shavuot_day_1(date),
            Holiday::ShavuotDay2 => rules::is_shavuot_day_2(date),
            Holiday::IsruChagShavuot => rules::is_isru_chag_shavuot(date, locale),
            Holiday::TzomTammuz => rules::is_tzom_tammuz(date),
            Holiday::TishaBAv => rules::is_tisha_b_av(date),
            Holiday::TuBAv => rules::is_tu_b_av(date),
            Holiday::RoshChodesh => rules::is_rosh_chodesh(date),
        }
    }
}

/// Returns every holiday falling on `date` under the given locale's
/// customs, in calendar order.
pub fn holidays_on(date: HebrewDate, locale: Locale) -> Vec<Holiday> {
    Holiday::ALL
        .iter()
        .copied()
        .filter(|holiday| holiday.is_on(date, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_calendar::month;

    #[test]
    fn all_is_deduplicated() {
        for (i, a) in Holiday::ALL.iter().enumerate() {
            for b in &Holiday::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Holiday::ALL.iter().enumerate() {
            for b in &Holiday::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn yom_kippur_via_registry() {
        let date = HebrewDate::new(5778, month::TISHRI, 10).unwrap();
        let found = holidays_on(date, Locale::default());
        assert_eq!(found, vec![Holiday::YomKippur]);
    }

    #[test]
    fn plain_weekday_has_no_holidays() {
        // 5 Heshvan 5778.
        let date = HebrewDate::new(5778, month::HESHVAN, 5).unwrap();
        assert!(holidays_on(date, Locale::default()).is_empty());
    }

    #[test]
    fn rosh_hashanah_is_also_rosh_chodesh() {
        let date = HebrewDate::new(5778, month::TISHRI, 1).unwrap();
        let found = holidays_on(date, Locale::default());
        assert_eq!(
            found,
            vec![Holiday::RoshHashanahDay1, Holiday::RoshChodesh]
        );
    }
}
