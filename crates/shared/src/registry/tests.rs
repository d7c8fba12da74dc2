use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn locale(identifier: &str) -> Locale {
    identifier.parse().unwrap()
}

#[rstest]
#[case("JPY", 0)]
#[case("jpy", 0)]
#[case("EUR", 2)]
#[case("JOD", 3)]
#[case("KWD", 3)]
#[case("XPF", 2)]
#[case("ZZZ", 2)]
fn test_minor_unit_digits(#[case] code: &str, #[case] expected: u32) {
    assert_eq!(minor_unit_digits(code), expected);
}

#[rstest]
#[case("EUR", "en", "Euro")]
#[case("USD", "en", "US Dollar")]
#[case("JPY", "en", "Japanese Yen")]
#[case("EUR", "ja", "ユーロ")]
#[case("USD", "ja", "米ドル")]
#[case("JPY", "ja", "日本円")]
#[case("EUR", "fr", "euro")]
#[case("USD", "fr", "dollar des États-Unis")]
#[case("JPY", "fr", "yen japonais")]
#[case("EUR", "nl", "Euro")]
#[case("JPY", "nl", "Japanse yen")]
fn test_localized_name(#[case] code: &str, #[case] language: &str, #[case] expected: &str) {
    assert_eq!(localized_name(code, language).as_deref(), Some(expected));
}

#[test]
fn test_localized_name_falls_back_to_english() {
    assert_eq!(localized_name("JOD", "fr").as_deref(), Some("Jordanian Dinar"));
    assert_eq!(localized_name("EUR", "xx").as_deref(), Some("Euro"));
    assert_eq!(localized_name("ZZZ", "en"), None);
}

#[rstest]
#[case("EUR", "en", "euros")]
#[case("USD", "en", "US dollars")]
#[case("JPY", "en", "Japanese yen")]
#[case("EUR", "nl", "euro")]
#[case("USD", "nl", "Amerikaanse dollar")]
#[case("JPY", "nl", "Japanse yen")]
#[case("EUR", "fr", "euros")]
#[case("USD", "fr", "dollars des États-Unis")]
#[case("JPY", "fr", "yens japonais")]
#[case("EUR", "zh", "欧元")]
#[case("USD", "zh", "美元")]
#[case("JPY", "zh", "日元")]
#[case("EUR", "ja", "ユーロ")]
#[case("USD", "ja", "米ドル")]
#[case("JPY", "ja", "円")]
fn test_pluralized_localized_name(#[case] code: &str, #[case] language: &str, #[case] expected: &str) {
    assert_eq!(
        pluralized_localized_name(code, dec!(2), language, None).as_deref(),
        Some(expected)
    );
}

#[rstest]
#[case(Decimal::ZERO, "US dollars")]
#[case(Decimal::ONE, "US Dollar")]
#[case(dec!(1.00), "US Dollar")]
#[case(dec!(0.5), "US dollars")]
#[case(dec!(-1), "US dollars")]
#[case(dec!(-3), "US dollars")]
#[case(dec!(1.5), "US dollars")]
#[case(dec!(2), "US dollars")]
fn test_pluralized_name_by_amount(#[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(
        pluralized_localized_name("USD", amount, "en", Some("US")).as_deref(),
        Some(expected)
    );
}

#[test]
fn test_pluralized_name_ignores_region() {
    assert_eq!(
        pluralized_localized_name("JPY", dec!(24), "fr", Some("JP")).as_deref(),
        Some("yens japonais")
    );
    assert_eq!(
        pluralized_localized_name("EUR", dec!(1), "nl", Some("NL")).as_deref(),
        Some("Euro")
    );
}

#[rstest]
#[case("EUR", "en_US", "€")]
#[case("JPY", "en_US", "¥")]
#[case("USD", "en_US", "$")]
#[case("JPY", "en_FR", "JP¥")]
#[case("USD", "en_GB", "US$")]
#[case("JPY", "en_JP", "¥")]
#[case("JPY", "nl_FR", "JP¥")]
#[case("JPY", "fr_FR", "JPY")]
#[case("JPY", "fr_JP", "¥")]
#[case("JPY", "ja_FR", "¥")]
#[case("JOD", "nl_NL", "JOD")]
#[case("CAD", "en_CA", "$")]
#[case("ZZZ", "en_US", "ZZZ")]
fn test_symbol(#[case] code: &str, #[case] identifier: &str, #[case] expected: &str) {
    assert_eq!(symbol(code, &locale(identifier)), expected);
}

#[rstest]
#[case("en_US", '.', ',')]
#[case("en_FR", ',', NBSP)]
#[case("nl_NL", ',', '.')]
#[case("nl_JP", '.', ',')]
#[case("fr_CA", ',', NBSP)]
#[case("de", ',', '.')]
#[case("de_CH", '.', '\u{2019}')]
#[case("xx", '.', ',')]
fn test_separators(#[case] identifier: &str, #[case] decimal: char, #[case] grouping: char) {
    let locale = locale(identifier);
    assert_eq!(decimal_separator(&locale), decimal);
    assert_eq!(grouping_separator(&locale), grouping);
}

#[rstest]
#[case(dec!(3.14), "EUR", "en_US", "€3.14")]
#[case(dec!(3), "JPY", "en_US", "¥3")]
#[case(dec!(3.14), "USD", "en_US", "$3.14")]
#[case(dec!(3.14), "EUR", "en_FR", "€3,14")]
#[case(dec!(3.14), "EUR", "nl_FR", "€\u{a0}3,14")]
#[case(dec!(3.14), "EUR", "fr_FR", "3,14\u{a0}€")]
#[case(dec!(3.14), "EUR", "ja_FR", "€3,14")]
#[case(dec!(3.14), "EUR", "en_JP", "€3.14")]
#[case(dec!(3.14), "EUR", "nl_JP", "€\u{a0}3.14")]
#[case(dec!(3.14), "EUR", "fr_JP", "3.14\u{a0}€")]
#[case(dec!(3.14), "EUR", "ja_JP", "€3.14")]
#[case(dec!(3), "JPY", "en_FR", "JP¥3")]
#[case(dec!(3), "JPY", "nl_FR", "JP¥\u{a0}3")]
#[case(dec!(3), "JPY", "fr_FR", "3\u{a0}JPY")]
#[case(dec!(3), "JPY", "ja_FR", "¥3")]
#[case(dec!(3), "JPY", "en_JP", "¥3")]
#[case(dec!(3), "JPY", "nl_JP", "¥\u{a0}3")]
#[case(dec!(3), "JPY", "fr_JP", "3\u{a0}¥")]
#[case(dec!(3), "JPY", "ja_JP", "¥3")]
#[case(dec!(1.234), "EUR", "nl_NL", "€\u{a0}1,23")]
#[case(dec!(1.234), "EUR", "fr_FR", "1,23\u{a0}€")]
#[case(dec!(1.234), "EUR", "ja_JP", "€1.23")]
#[case(dec!(1.234), "JOD", "nl_NL", "JOD\u{a0}1,234")]
#[case(dec!(1.234), "JOD", "fr_FR", "1,234\u{a0}JOD")]
#[case(dec!(1.234), "JOD", "ja_JP", "JOD\u{a0}1.234")]
#[case(dec!(1000), "EUR", "fr_CA", "1\u{a0}000,00\u{a0}€")]
#[case(dec!(-1234.5), "USD", "en_US", "-$1,234.50")]
#[case(dec!(-3.14), "EUR", "nl_NL", "€\u{a0}-3,14")]
fn test_formatted_string(
    #[case] amount: Decimal,
    #[case] code: &str,
    #[case] identifier: &str,
    #[case] expected: &str,
) {
    assert_eq!(
        formatted_string(amount, code, &locale(identifier), &FormatOptions::default()),
        expected
    );
}

#[test]
fn test_formatted_string_rounds_half_to_even() {
    let en = locale("en_US");
    let options = FormatOptions::default();
    assert_eq!(formatted_string(dec!(0.125), "USD", &en, &options), "$0.12");
    assert_eq!(formatted_string(dec!(0.135), "USD", &en, &options), "$0.14");
    assert_eq!(formatted_string(dec!(2.5), "JPY", &en, &options), "¥2");
}

#[test]
fn test_formatted_string_with_max_fraction_digits() {
    let en = locale("en_US");
    assert_eq!(
        formatted_string(dec!(3.14159), "EUR", &en, &FormatOptions::with_max_fraction_digits(Some(4))),
        "€3.1416"
    );
    assert_eq!(
        formatted_string(dec!(3.1), "EUR", &en, &FormatOptions::with_max_fraction_digits(Some(4))),
        "€3.10"
    );
    assert_eq!(
        formatted_string(dec!(3.14), "EUR", &en, &FormatOptions::with_max_fraction_digits(Some(0))),
        "€3"
    );
}

#[test]
fn test_formatted_string_without_symbol() {
    let options = FormatOptions::without_symbol();
    assert_eq!(
        formatted_string(dec!(5432.234), "EUR", &locale("en_US"), &options),
        "5,432.23"
    );
    assert_eq!(
        formatted_string(dec!(5432.234), "EUR", &locale("nl_NL"), &options).trim(),
        "5.432,23"
    );
}

#[test]
fn test_parse_decimal() {
    assert_eq!(parse_decimal(" 3.14 ").unwrap(), dec!(3.14));
    assert_eq!(parse_decimal("1e3").unwrap(), dec!(1000));
    assert_eq!(
        parse_decimal("0.12345678901234567890123456789"),
        Err(MoneyError::parse("0.12345678901234567890123456789"))
    );
}

#[test]
fn test_parse_localized() {
    assert_eq!(parse_localized("1.234,56", &locale("nl_NL")).unwrap(), dec!(1234.56));
    assert_eq!(parse_localized("1,234.56", &locale("en_US")).unwrap(), dec!(1234.56));
    assert_eq!(parse_localized("1 234,56", &locale("fr_FR")).unwrap(), dec!(1234.56));
    assert_eq!(parse_localized("3,14", &locale("fr")).unwrap(), dec!(3.14));
    assert!(parse_localized("baloney", &locale("en_US")).is_err());
}
