//! CLDR cardinal plural rules.
//!
//! Each function is a transcription of one rule from the CLDR supplemental
//! plural data, written over [`Operands`]. Rules are grouped the way CLDR
//! groups them: every locale in a group shares the same predicate chain.
//!
//! `e` (the compact-notation exponent) is always 0 here, so conditions such
//! as `e = 0 and i != 0 and i % 1000000 = 0 and v = 0` keep only the `i` and
//! `v` parts.
//!
//! <https://www.unicode.org/cldr/charts/latest/supplemental/language_plural_rules.html>

use crate::plural::{Operands, PluralRule};
use crate::types::PluralCategory;
use crate::types::PluralCategory::{Few, Many, One, Other, Two, Zero};

const OTHER: &[PluralCategory] = &[Other];
const ONE_OTHER: &[PluralCategory] = &[One, Other];
const ONE_MANY_OTHER: &[PluralCategory] = &[One, Many, Other];
const ZERO_ONE_OTHER: &[PluralCategory] = &[Zero, One, Other];
const ONE_TWO_OTHER: &[PluralCategory] = &[One, Two, Other];
const ONE_FEW_OTHER: &[PluralCategory] = &[One, Few, Other];
const ONE_TWO_FEW_OTHER: &[PluralCategory] = &[One, Two, Few, Other];
const ONE_FEW_MANY_OTHER: &[PluralCategory] = &[One, Few, Many, Other];
const ONE_TWO_FEW_MANY_OTHER: &[PluralCategory] = &[One, Two, Few, Many, Other];
const ALL: &[PluralCategory] = &[Zero, One, Two, Few, Many, Other];

/// Deprecated or macrolanguage codes that share another code's rule.
pub(crate) const ALIASES: [(&str, &str); 8] = [
    ("in", "id"),
    ("iw", "he"),
    ("ji", "yi"),
    ("jw", "jv"),
    ("mo", "ro"),
    ("no", "nb"),
    ("sh", "sr"),
    ("tl", "fil"),
];

/// Every rule group with the locales it applies to.
pub(crate) fn rules() -> Vec<(&'static [&'static str], PluralRule)> {
    vec![
        group(
            &[
                "bm", "bo", "dz", "hnj", "id", "ig", "ii", "ja", "jbo", "jv", "kde", "kea", "km",
                "ko", "lkt", "lo", "ms", "my", "nqo", "osa", "root", "sah", "ses", "sg", "su",
                "th", "to", "tpi", "vi", "wo", "yo", "yue", "zh",
            ],
            PluralRule::new(OTHER, other_only),
        ),
        group(
            &[
                "am", "as", "bn", "doi", "fa", "gu", "hi", "kn", "pcm", "zu",
            ],
            PluralRule::new(ONE_OTHER, i_zero_or_n_one),
        ),
        group(&["ff", "hy", "kab"], PluralRule::new(ONE_OTHER, i_zero_one)),
        group(&["fr", "pt"], PluralRule::new(ONE_MANY_OTHER, french)),
        group(
            &[
                "ast", "de", "en", "et", "fi", "fy", "gl", "ia", "io", "lij", "nl", "sc", "sv",
                "sw", "ur", "yi",
            ],
            PluralRule::new(ONE_OTHER, i_one_v_zero),
        ),
        group(&["ca", "it", "pt-PT"], PluralRule::new(ONE_MANY_OTHER, italian)),
        group(&["es"], PluralRule::new(ONE_MANY_OTHER, spanish)),
        group(
            &[
                "af", "an", "asa", "az", "bal", "bem", "bez", "bg", "brx", "ce", "cgg", "chr",
                "ckb", "dv", "ee", "el", "eo", "eu", "fo", "fur", "gsw", "ha", "haw", "hu", "jgo",
                "jmc", "ka", "kaj", "kcg", "kk", "kkj", "kl", "ks", "ksb", "ku", "ky", "lb", "lg",
                "mas", "mgo", "ml", "mn", "mr", "nah", "nb", "nd", "ne", "nn", "nnh", "nr", "ny",
                "nyn", "om", "or", "os", "pap", "ps", "rm", "rof", "rwk", "saq", "sd", "sdh",
                "seh", "sn", "so", "sq", "ss", "ssy", "st", "syr", "ta", "te", "teo", "tig",
                "tk", "tn", "tr", "ts", "ug", "uz", "ve", "vo", "vun", "wae", "xh", "xog",
            ],
            PluralRule::new(ONE_OTHER, n_one),
        ),
        group(
            &["ak", "bho", "guw", "ln", "mg", "nso", "pa", "ti", "wa"],
            PluralRule::new(ONE_OTHER, n_zero_to_one),
        ),
        group(&["si"], PluralRule::new(ONE_OTHER, sinhala)),
        group(&["tzm"], PluralRule::new(ONE_OTHER, tamazight)),
        group(&["da"], PluralRule::new(ONE_OTHER, danish)),
        group(&["is"], PluralRule::new(ONE_OTHER, icelandic)),
        group(&["mk"], PluralRule::new(ONE_OTHER, macedonian)),
        group(&["ceb", "fil"], PluralRule::new(ONE_OTHER, filipino)),
        group(&["lv", "prg"], PluralRule::new(ZERO_ONE_OTHER, latvian)),
        group(&["lag"], PluralRule::new(ZERO_ONE_OTHER, langi)),
        group(&["ksh"], PluralRule::new(ZERO_ONE_OTHER, colognian)),
        group(
            &["iu", "naq", "sat", "se", "sma", "smi", "smj", "smn", "sms"],
            PluralRule::new(ONE_TWO_OTHER, one_two),
        ),
        group(&["he"], PluralRule::new(ONE_TWO_OTHER, hebrew)),
        group(&["shi"], PluralRule::new(ONE_FEW_OTHER, tachelhit)),
        group(&["ro"], PluralRule::new(ONE_FEW_OTHER, romanian)),
        group(&["bs", "hr", "sr"], PluralRule::new(ONE_FEW_OTHER, serbo_croatian)),
        group(&["gd"], PluralRule::new(ONE_TWO_FEW_OTHER, scottish_gaelic)),
        group(&["sl"], PluralRule::new(ONE_TWO_FEW_OTHER, slovenian)),
        group(&["dsb", "hsb"], PluralRule::new(ONE_TWO_FEW_OTHER, sorbian)),
        group(&["cs", "sk"], PluralRule::new(ONE_FEW_MANY_OTHER, czech)),
        group(&["pl"], PluralRule::new(ONE_FEW_MANY_OTHER, polish)),
        group(&["be"], PluralRule::new(ONE_FEW_MANY_OTHER, belarusian)),
        group(&["lt"], PluralRule::new(ONE_FEW_MANY_OTHER, lithuanian)),
        group(&["ru", "uk"], PluralRule::new(ONE_FEW_MANY_OTHER, russian)),
        group(&["br"], PluralRule::new(ONE_TWO_FEW_MANY_OTHER, breton)),
        group(&["mt"], PluralRule::new(ONE_TWO_FEW_MANY_OTHER, maltese)),
        group(&["ga"], PluralRule::new(ONE_TWO_FEW_MANY_OTHER, irish)),
        group(&["gv"], PluralRule::new(ONE_TWO_FEW_MANY_OTHER, manx)),
        group(&["ar", "ars"], PluralRule::new(ALL, arabic)),
        group(&["cy"], PluralRule::new(ALL, welsh)),
    ]
}

fn group(
    locales: &'static [&'static str],
    rule: PluralRule,
) -> (&'static [&'static str], PluralRule) {
    (locales, rule)
}

/// `i % 1000000 = 0` for nonzero integers; the `many` of fr/es/it/pt.
fn is_exact_million_multiple(ops: &Operands) -> bool {
    ops.v == 0 && ops.i != 0 && ops.i % 1_000_000 == 0
}

fn other_only(_ops: &Operands) -> PluralCategory {
    Other
}

// one: i = 0 or n = 1
fn i_zero_or_n_one(ops: &Operands) -> PluralCategory {
    if ops.i == 0 || ops.n_equals_any(&[1]) {
        One
    } else {
        Other
    }
}

// one: i = 0,1
fn i_zero_one(ops: &Operands) -> PluralCategory {
    if ops.i <= 1 { One } else { Other }
}

// one: i = 0,1
// many: e = 0 and i != 0 and i % 1000000 = 0 and v = 0
fn french(ops: &Operands) -> PluralCategory {
    if ops.i <= 1 {
        One
    } else if is_exact_million_multiple(ops) {
        Many
    } else {
        Other
    }
}

// one: i = 1 and v = 0
fn i_one_v_zero(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else {
        Other
    }
}

// one: i = 1 and v = 0
// many: e = 0 and i != 0 and i % 1000000 = 0 and v = 0
fn italian(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else if is_exact_million_multiple(ops) {
        Many
    } else {
        Other
    }
}

// one: n = 1
// many: e = 0 and i != 0 and i % 1000000 = 0 and v = 0
fn spanish(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1]) {
        One
    } else if is_exact_million_multiple(ops) {
        Many
    } else {
        Other
    }
}

// one: n = 1
fn n_one(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1]) { One } else { Other }
}

// one: n = 0..1
fn n_zero_to_one(ops: &Operands) -> PluralCategory {
    if ops.n_in_range(0, 1) { One } else { Other }
}

// one: n = 0,1 or i = 0 and f = 1
fn sinhala(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[0, 1]) || (ops.i == 0 && ops.f == 1) {
        One
    } else {
        Other
    }
}

// one: n = 0..1 or n = 11..99
fn tamazight(ops: &Operands) -> PluralCategory {
    if ops.n_in_range(0, 1) || ops.n_in_range(11, 99) {
        One
    } else {
        Other
    }
}

// one: n = 1 or t != 0 and i = 0,1
fn danish(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1]) || (ops.t != 0 && ops.i <= 1) {
        One
    } else {
        Other
    }
}

// one: t = 0 and i % 10 = 1 and i % 100 != 11 or t % 10 = 1 and t % 100 != 11
fn icelandic(ops: &Operands) -> PluralCategory {
    if (ops.t == 0 && ops.i % 10 == 1 && ops.i % 100 != 11)
        || (ops.t % 10 == 1 && ops.t % 100 != 11)
    {
        One
    } else {
        Other
    }
}

// one: v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11
fn macedonian(ops: &Operands) -> PluralCategory {
    if (ops.v == 0 && ops.i % 10 == 1 && ops.i % 100 != 11)
        || (ops.f % 10 == 1 && ops.f % 100 != 11)
    {
        One
    } else {
        Other
    }
}

// one: v = 0 and i = 1,2,3 or v = 0 and i % 10 != 4,6,9 or v != 0 and f % 10 != 4,6,9
fn filipino(ops: &Operands) -> PluralCategory {
    let excluded = [4, 6, 9];
    if (ops.v == 0 && (1..=3).contains(&ops.i))
        || (ops.v == 0 && !excluded.contains(&(ops.i % 10)))
        || (ops.v != 0 && !excluded.contains(&(ops.f % 10)))
    {
        One
    } else {
        Other
    }
}

// zero: n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19
// one: n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11
//      or v != 2 and f % 10 = 1
fn latvian(ops: &Operands) -> PluralCategory {
    if ops.n_mod_equals_any(10, &[0])
        || ops.n_mod_in_range(100, 11, 19)
        || (ops.v == 2 && (11..=19).contains(&(ops.f % 100)))
    {
        Zero
    } else if (ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_equals_any(100, &[11]))
        || (ops.v == 2 && ops.f % 10 == 1 && ops.f % 100 != 11)
        || (ops.v != 2 && ops.f % 10 == 1)
    {
        One
    } else {
        Other
    }
}

// zero: n = 0
// one: i = 0,1 and n != 0
fn langi(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[0]) {
        Zero
    } else if ops.i <= 1 {
        One
    } else {
        Other
    }
}

// zero: n = 0
// one: n = 1
fn colognian(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[0]) {
        Zero
    } else if ops.n_equals_any(&[1]) {
        One
    } else {
        Other
    }
}

// one: n = 1
// two: n = 2
fn one_two(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1]) {
        One
    } else if ops.n_equals_any(&[2]) {
        Two
    } else {
        Other
    }
}

// one: i = 1 and v = 0 or i = 0 and v != 0
// two: i = 2 and v = 0
fn hebrew(ops: &Operands) -> PluralCategory {
    if (ops.i == 1 && ops.v == 0) || (ops.i == 0 && ops.v != 0) {
        One
    } else if ops.i == 2 && ops.v == 0 {
        Two
    } else {
        Other
    }
}

// one: i = 0 or n = 1
// few: n = 2..10
fn tachelhit(ops: &Operands) -> PluralCategory {
    if ops.i == 0 || ops.n_equals_any(&[1]) {
        One
    } else if ops.n_in_range(2, 10) {
        Few
    } else {
        Other
    }
}

// one: i = 1 and v = 0
// few: v != 0 or n = 0 or n != 1 and n % 100 = 1..19
fn romanian(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else if ops.v != 0
        || ops.n_equals_any(&[0])
        || (!ops.n_equals_any(&[1]) && ops.n_mod_in_range(100, 1, 19))
    {
        Few
    } else {
        Other
    }
}

// one: v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11
// few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14
//      or f % 10 = 2..4 and f % 100 != 12..14
fn serbo_croatian(ops: &Operands) -> PluralCategory {
    if (ops.v == 0 && ops.i % 10 == 1 && ops.i % 100 != 11)
        || (ops.f % 10 == 1 && ops.f % 100 != 11)
    {
        One
    } else if (ops.v == 0
        && (2..=4).contains(&(ops.i % 10))
        && !(12..=14).contains(&(ops.i % 100)))
        || ((2..=4).contains(&(ops.f % 10)) && !(12..=14).contains(&(ops.f % 100)))
    {
        Few
    } else {
        Other
    }
}

// one: n = 1,11
// two: n = 2,12
// few: n = 3..10,13..19
fn scottish_gaelic(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1, 11]) {
        One
    } else if ops.n_equals_any(&[2, 12]) {
        Two
    } else if ops.n_in_range(3, 10) || ops.n_in_range(13, 19) {
        Few
    } else {
        Other
    }
}

// one: v = 0 and i % 100 = 1
// two: v = 0 and i % 100 = 2
// few: v = 0 and i % 100 = 3..4 or v != 0
fn slovenian(ops: &Operands) -> PluralCategory {
    if ops.v == 0 && ops.i % 100 == 1 {
        One
    } else if ops.v == 0 && ops.i % 100 == 2 {
        Two
    } else if (ops.v == 0 && (3..=4).contains(&(ops.i % 100))) || ops.v != 0 {
        Few
    } else {
        Other
    }
}

// one: v = 0 and i % 100 = 1 or f % 100 = 1
// two: v = 0 and i % 100 = 2 or f % 100 = 2
// few: v = 0 and i % 100 = 3..4 or f % 100 = 3..4
fn sorbian(ops: &Operands) -> PluralCategory {
    if (ops.v == 0 && ops.i % 100 == 1) || ops.f % 100 == 1 {
        One
    } else if (ops.v == 0 && ops.i % 100 == 2) || ops.f % 100 == 2 {
        Two
    } else if (ops.v == 0 && (3..=4).contains(&(ops.i % 100)))
        || (3..=4).contains(&(ops.f % 100))
    {
        Few
    } else {
        Other
    }
}

// one: i = 1 and v = 0
// few: i = 2..4 and v = 0
// many: v != 0
fn czech(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else if (2..=4).contains(&ops.i) && ops.v == 0 {
        Few
    } else if ops.v != 0 {
        Many
    } else {
        Other
    }
}

// one: i = 1 and v = 0
// few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14
// many: v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9
//       or v = 0 and i % 100 = 12..14
fn polish(ops: &Operands) -> PluralCategory {
    let (i10, i100) = (ops.i % 10, ops.i % 100);
    if ops.i == 1 && ops.v == 0 {
        One
    } else if ops.v == 0 && (2..=4).contains(&i10) && !(12..=14).contains(&i100) {
        Few
    } else if ops.v == 0
        && ((ops.i != 1 && i10 <= 1) || (5..=9).contains(&i10) || (12..=14).contains(&i100))
    {
        Many
    } else {
        Other
    }
}

// one: n % 10 = 1 and n % 100 != 11
// few: n % 10 = 2..4 and n % 100 != 12..14
// many: n % 10 = 0 or n % 10 = 5..9 or n % 100 = 11..14
fn belarusian(ops: &Operands) -> PluralCategory {
    if ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_equals_any(100, &[11]) {
        One
    } else if ops.n_mod_in_range(10, 2, 4) && !ops.n_mod_in_range(100, 12, 14) {
        Few
    } else if ops.n_mod_equals_any(10, &[0])
        || ops.n_mod_in_range(10, 5, 9)
        || ops.n_mod_in_range(100, 11, 14)
    {
        Many
    } else {
        Other
    }
}

// one: n % 10 = 1 and n % 100 != 11..19
// few: n % 10 = 2..9 and n % 100 != 11..19
// many: f != 0
fn lithuanian(ops: &Operands) -> PluralCategory {
    if ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_in_range(100, 11, 19) {
        One
    } else if ops.n_mod_in_range(10, 2, 9) && !ops.n_mod_in_range(100, 11, 19) {
        Few
    } else if ops.f != 0 {
        Many
    } else {
        Other
    }
}

// one: v = 0 and i % 10 = 1 and i % 100 != 11
// few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14
// many: v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14
fn russian(ops: &Operands) -> PluralCategory {
    if ops.v != 0 {
        return Other;
    }
    let (i10, i100) = (ops.i % 10, ops.i % 100);
    if i10 == 1 && i100 != 11 {
        One
    } else if (2..=4).contains(&i10) && !(12..=14).contains(&i100) {
        Few
    } else {
        Many
    }
}

// one: n % 10 = 1 and n % 100 != 11,71,91
// two: n % 10 = 2 and n % 100 != 12,72,92
// few: n % 10 = 3..4,9 and n % 100 != 10..19,70..79,90..99
// many: n != 0 and n % 1000000 = 0
fn breton(ops: &Operands) -> PluralCategory {
    if ops.n_mod_equals_any(10, &[1]) && !ops.n_mod_equals_any(100, &[11, 71, 91]) {
        One
    } else if ops.n_mod_equals_any(10, &[2]) && !ops.n_mod_equals_any(100, &[12, 72, 92]) {
        Two
    } else if (ops.n_mod_in_range(10, 3, 4) || ops.n_mod_equals_any(10, &[9]))
        && !(ops.n_mod_in_range(100, 10, 19)
            || ops.n_mod_in_range(100, 70, 79)
            || ops.n_mod_in_range(100, 90, 99))
    {
        Few
    } else if !ops.n_equals_any(&[0]) && ops.n_mod_equals_any(1_000_000, &[0]) {
        Many
    } else {
        Other
    }
}

// one: n = 1
// two: n = 2
// few: n = 0 or n % 100 = 3..10
// many: n % 100 = 11..19
fn maltese(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1]) {
        One
    } else if ops.n_equals_any(&[2]) {
        Two
    } else if ops.n_equals_any(&[0]) || ops.n_mod_in_range(100, 3, 10) {
        Few
    } else if ops.n_mod_in_range(100, 11, 19) {
        Many
    } else {
        Other
    }
}

// one: n = 1
// two: n = 2
// few: n = 3..6
// many: n = 7..10
fn irish(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[1]) {
        One
    } else if ops.n_equals_any(&[2]) {
        Two
    } else if ops.n_in_range(3, 6) {
        Few
    } else if ops.n_in_range(7, 10) {
        Many
    } else {
        Other
    }
}

// one: v = 0 and i % 10 = 1
// two: v = 0 and i % 10 = 2
// few: v = 0 and i % 100 = 0,20,40,60,80
// many: v != 0
fn manx(ops: &Operands) -> PluralCategory {
    if ops.v != 0 {
        Many
    } else if ops.i % 10 == 1 {
        One
    } else if ops.i % 10 == 2 {
        Two
    } else if [0, 20, 40, 60, 80].contains(&(ops.i % 100)) {
        Few
    } else {
        Other
    }
}

// zero: n = 0
// one: n = 1
// two: n = 2
// few: n % 100 = 3..10
// many: n % 100 = 11..99
fn arabic(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[0]) {
        Zero
    } else if ops.n_equals_any(&[1]) {
        One
    } else if ops.n_equals_any(&[2]) {
        Two
    } else if ops.n_mod_in_range(100, 3, 10) {
        Few
    } else if ops.n_mod_in_range(100, 11, 99) {
        Many
    } else {
        Other
    }
}

// zero: n = 0
// one: n = 1
// two: n = 2
// few: n = 3
// many: n = 6
fn welsh(ops: &Operands) -> PluralCategory {
    if ops.n_equals_any(&[0]) {
        Zero
    } else if ops.n_equals_any(&[1]) {
        One
    } else if ops.n_equals_any(&[2]) {
        Two
    } else if ops.n_equals_any(&[3]) {
        Few
    } else if ops.n_equals_any(&[6]) {
        Many
    } else {
        Other
    }
}
