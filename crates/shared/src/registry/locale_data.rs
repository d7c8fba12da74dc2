//! Static locale data: separators, symbol placement, symbols and names.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::CurrencyCode;

/// No-break space, used between symbol and digits and as French grouping.
pub const NBSP: char = '\u{a0}';

/// Where the currency symbol goes relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `€3.14`, `-€3.14`
    Prefix,
    /// `€ 3,14`, `€ -3,14`
    PrefixSpaced,
    /// `3,14 €`, `-3,14 €`
    SuffixSpaced,
}

/// Number conventions of a language, before any regional override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConventions {
    pub placement: SymbolPlacement,
    pub decimal: char,
    pub grouping: char,
}

const ENGLISH: LanguageConventions = LanguageConventions {
    placement: SymbolPlacement::Prefix,
    decimal: '.',
    grouping: ',',
};

/// Conventions for a language code. Unknown languages follow English.
pub fn language_conventions(language: &str) -> LanguageConventions {
    use SymbolPlacement::{Prefix, PrefixSpaced, SuffixSpaced};

    let (placement, decimal, grouping) = match language {
        "nl" => (PrefixSpaced, ',', '.'),
        "pt" => (PrefixSpaced, ',', '.'),
        "fr" => (SuffixSpaced, ',', NBSP),
        "de" | "es" | "it" => (SuffixSpaced, ',', '.'),
        "ja" | "zh" | "ko" => (Prefix, '.', ','),
        _ => return ENGLISH,
    };

    LanguageConventions {
        placement,
        decimal,
        grouping,
    }
}

/// Decimal and grouping separators used in a region, when the region has a
/// single convention regardless of language.
pub fn region_separators(region: &str) -> Option<(char, char)> {
    let separators = match region {
        "US" | "GB" | "JP" | "CN" | "AU" | "NZ" | "IN" | "MX" | "HK" | "SG" | "KR" | "TW"
        | "IE" | "IL" | "TH" | "PH" | "MY" => ('.', ','),
        "FR" | "SE" | "NO" | "FI" | "PL" | "CZ" | "SK" | "RU" | "UA" | "HU" | "LU" => {
            (',', NBSP)
        }
        "NL" | "DE" | "ES" | "IT" | "BR" | "AT" | "PT" | "ID" | "DK" | "TR" | "AR" | "CL"
        | "CO" | "GR" | "VN" | "SI" | "HR" | "RS" => (',', '.'),
        "CH" | "LI" => ('.', '\u{2019}'),
        _ => return None,
    };
    Some(separators)
}

/// Currency in everyday use in a region.
pub fn home_currency(region: &str) -> Option<CurrencyCode> {
    use CurrencyCode as C;

    let code = match region {
        "US" | "PR" | "EC" | "SV" => C::Usd,
        "FR" | "DE" | "NL" | "BE" | "ES" | "IT" | "AT" | "PT" | "IE" | "FI" | "GR" | "LU"
        | "SK" | "SI" | "EE" | "LV" | "LT" | "MT" | "CY" | "HR" | "MC" => C::Eur,
        "JP" => C::Jpy,
        "GB" => C::Gbp,
        "CA" => C::Cad,
        "AU" => C::Aud,
        "NZ" => C::Nzd,
        "CH" | "LI" => C::Chf,
        "CN" => C::Cny,
        "HK" => C::Hkd,
        "TW" => C::Twd,
        "IN" => C::Inr,
        "KR" => C::Krw,
        "MX" => C::Mxn,
        "BR" => C::Brl,
        "AR" => C::Ars,
        "CL" => C::Clp,
        "CO" => C::Cop,
        "SE" => C::Sek,
        "NO" => C::Nok,
        "DK" => C::Dkk,
        "PL" => C::Pln,
        "CZ" => C::Czk,
        "HU" => C::Huf,
        "RU" => C::Rub,
        "UA" => C::Uah,
        "TR" => C::Try,
        "ZA" => C::Zar,
        "SG" => C::Sgd,
        "ID" => C::Idr,
        "VN" => C::Vnd,
        "TH" => C::Thb,
        "PH" => C::Php,
        "IL" => C::Ils,
        "JO" => C::Jod,
        "KW" => C::Kwd,
        _ => return None,
    };
    Some(code)
}

/// Symbol used for a currency inside its own home region.
pub fn narrow_symbol(code: CurrencyCode) -> Option<&'static str> {
    use CurrencyCode as C;

    let symbol = match code {
        C::Usd | C::Cad | C::Aud | C::Nzd | C::Hkd | C::Twd | C::Mxn | C::Sgd | C::Ars
        | C::Clp | C::Cop => "$",
        C::Eur => "€",
        C::Jpy | C::Cny => "¥",
        C::Gbp => "£",
        C::Inr => "₹",
        C::Krw => "₩",
        C::Brl => "R$",
        C::Sek | C::Nok => "kr",
        C::Dkk => "kr.",
        C::Pln => "zł",
        C::Czk => "Kč",
        C::Huf => "Ft",
        C::Rub => "₽",
        C::Uah => "₴",
        C::Try => "₺",
        C::Zar => "R",
        C::Idr => "Rp",
        C::Vnd => "₫",
        C::Thb => "฿",
        C::Php => "₱",
        C::Ils => "₪",
        _ => return None,
    };
    Some(symbol)
}

/// Regions that use the American English symbol set (`$`, `¥`).
fn uses_american_symbols(region: Option<&str>) -> bool {
    matches!(region, None | Some("US" | "PR" | "AS" | "GU" | "VI" | "UM" | "MP"))
}

/// Symbol a language uses for a foreign currency, when it differs from the
/// English one.
pub fn language_symbol(language: &str, region: Option<&str>, code: CurrencyCode) -> Option<&'static str> {
    use CurrencyCode as C;

    let symbol = match (language, code) {
        ("en", C::Usd) if !uses_american_symbols(region) => "US$",
        ("en", C::Jpy) if !uses_american_symbols(region) => "JP¥",
        ("nl" | "pt" | "zh", C::Usd) => "US$",
        ("nl" | "pt", C::Jpy) => "JP¥",
        ("nl", C::Cad) => "C$",
        ("nl" | "de", C::Aud) => "AU$",
        ("fr", C::Usd) => "$US",
        ("fr", C::Gbp) => "£GB",
        ("fr", C::Cad) => "$CA",
        ("fr", C::Aud) => "$AU",
        ("fr" | "es" | "it", C::Jpy) => "JPY",
        ("fr" | "es", C::Cny) => "CNY",
        ("es", C::Usd) => "US$",
        ("es", C::Gbp) => "GBP",
        ("it", C::Usd) => "USD",
        ("ja", C::Usd) => "$",
        ("ja", C::Cny) => "元",
        ("zh", C::Jpy) => "JP¥",
        ("zh", C::Cny) => "¥",
        _ => return None,
    };
    Some(symbol)
}

/// `(language, currency, singular, plural)` rows of localized currency names.
const LOCALIZED_NAMES: &[(&str, CurrencyCode, &str, &str)] = &[
    ("de", CurrencyCode::Aud, "Australischer Dollar", "Australische Dollar"),
    ("de", CurrencyCode::Cad, "Kanadischer Dollar", "Kanadische Dollar"),
    ("de", CurrencyCode::Chf, "Schweizer Franken", "Schweizer Franken"),
    ("de", CurrencyCode::Cny, "Renminbi Yuan", "Renminbi Yuan"),
    ("de", CurrencyCode::Eur, "Euro", "Euro"),
    ("de", CurrencyCode::Gbp, "Britisches Pfund", "Britische Pfund"),
    ("de", CurrencyCode::Jpy, "Japanischer Yen", "Japanische Yen"),
    ("de", CurrencyCode::Usd, "US-Dollar", "US-Dollar"),
    ("es", CurrencyCode::Aud, "dólar australiano", "dólares australianos"),
    ("es", CurrencyCode::Cad, "dólar canadiense", "dólares canadienses"),
    ("es", CurrencyCode::Chf, "franco suizo", "francos suizos"),
    ("es", CurrencyCode::Cny, "yuan", "yuanes"),
    ("es", CurrencyCode::Eur, "euro", "euros"),
    ("es", CurrencyCode::Gbp, "libra esterlina", "libras esterlinas"),
    ("es", CurrencyCode::Jpy, "yen", "yenes"),
    ("es", CurrencyCode::Mxn, "peso mexicano", "pesos mexicanos"),
    ("es", CurrencyCode::Usd, "dólar estadounidense", "dólares estadounidenses"),
    ("fr", CurrencyCode::Aud, "dollar australien", "dollars australiens"),
    ("fr", CurrencyCode::Cad, "dollar canadien", "dollars canadiens"),
    ("fr", CurrencyCode::Chf, "franc suisse", "francs suisses"),
    ("fr", CurrencyCode::Cny, "yuan renminbi chinois", "yuans renminbi chinois"),
    ("fr", CurrencyCode::Eur, "euro", "euros"),
    ("fr", CurrencyCode::Gbp, "livre sterling", "livres sterling"),
    ("fr", CurrencyCode::Jpy, "yen japonais", "yens japonais"),
    ("fr", CurrencyCode::Usd, "dollar des États-Unis", "dollars des États-Unis"),
    ("fr", CurrencyCode::Xaf, "franc CFA (BEAC)", "francs CFA (BEAC)"),
    ("fr", CurrencyCode::Xof, "franc CFA (BCEAO)", "francs CFA (BCEAO)"),
    ("it", CurrencyCode::Chf, "franco svizzero", "franchi svizzeri"),
    ("it", CurrencyCode::Eur, "euro", "euro"),
    ("it", CurrencyCode::Gbp, "sterlina britannica", "sterline britanniche"),
    ("it", CurrencyCode::Jpy, "yen giapponese", "yen giapponesi"),
    ("it", CurrencyCode::Usd, "dollaro statunitense", "dollari statunitensi"),
    ("ja", CurrencyCode::Aud, "オーストラリア ドル", "オーストラリア ドル"),
    ("ja", CurrencyCode::Cad, "カナダ ドル", "カナダ ドル"),
    ("ja", CurrencyCode::Chf, "スイス フラン", "スイス フラン"),
    ("ja", CurrencyCode::Cny, "中国人民元", "中国人民元"),
    ("ja", CurrencyCode::Eur, "ユーロ", "ユーロ"),
    ("ja", CurrencyCode::Gbp, "英国ポンド", "英国ポンド"),
    ("ja", CurrencyCode::Jpy, "日本円", "円"),
    ("ja", CurrencyCode::Krw, "韓国ウォン", "韓国ウォン"),
    ("ja", CurrencyCode::Usd, "米ドル", "米ドル"),
    ("nl", CurrencyCode::Aud, "Australische dollar", "Australische dollar"),
    ("nl", CurrencyCode::Cad, "Canadese dollar", "Canadese dollar"),
    ("nl", CurrencyCode::Chf, "Zwitserse frank", "Zwitserse frank"),
    ("nl", CurrencyCode::Cny, "Chinese yuan", "Chinese yuan"),
    ("nl", CurrencyCode::Eur, "Euro", "euro"),
    ("nl", CurrencyCode::Gbp, "Brits pond", "Brits pond"),
    ("nl", CurrencyCode::Jpy, "Japanse yen", "Japanse yen"),
    ("nl", CurrencyCode::Usd, "Amerikaanse dollar", "Amerikaanse dollar"),
    ("pt", CurrencyCode::Brl, "Real brasileiro", "Reais brasileiros"),
    ("pt", CurrencyCode::Eur, "Euro", "Euros"),
    ("pt", CurrencyCode::Jpy, "Iene japonês", "Ienes japoneses"),
    ("pt", CurrencyCode::Usd, "Dólar americano", "Dólares americanos"),
    ("zh", CurrencyCode::Aud, "澳大利亚元", "澳大利亚元"),
    ("zh", CurrencyCode::Cad, "加拿大元", "加拿大元"),
    ("zh", CurrencyCode::Chf, "瑞士法郎", "瑞士法郎"),
    ("zh", CurrencyCode::Cny, "人民币", "人民币"),
    ("zh", CurrencyCode::Eur, "欧元", "欧元"),
    ("zh", CurrencyCode::Gbp, "英镑", "英镑"),
    ("zh", CurrencyCode::Hkd, "港元", "港元"),
    ("zh", CurrencyCode::Jpy, "日元", "日元"),
    ("zh", CurrencyCode::Krw, "韩元", "韩元"),
    ("zh", CurrencyCode::Usd, "美元", "美元"),
];

type NameTable = HashMap<&'static str, HashMap<CurrencyCode, (&'static str, &'static str)>>;

static NAMES: Lazy<NameTable> = Lazy::new(|| {
    let mut table = NameTable::new();
    for &(language, code, singular, plural) in LOCALIZED_NAMES {
        table
            .entry(language)
            .or_default()
            .insert(code, (singular, plural));
    }
    table
});

/// Singular and plural name of a currency in a language, if translated.
pub fn localized_names(language: &str, code: CurrencyCode) -> Option<(&'static str, &'static str)> {
    if language == "en" {
        return Some((code.english_name(), code.english_plural_name()));
    }
    NAMES.get(language)?.get(&code).copied()
}
