//! Supported ISO 4217 currencies.
//!
//! The list lives in a single place, [`for_each_currency!`], so the currency
//! enumeration, the per-currency marker types and the dynamic factory table
//! can never drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MoneyError;

/// Minor-unit digits used by every currency without an explicit override.
pub const DEFAULT_MINOR_UNIT_DIGITS: u32 = 2;

/// Invokes `$callback!` with one row per supported currency.
///
/// Each row is `(Variant, "CODE", minor_unit_digits, "symbol", "Name", "plural name")`,
/// sorted by code. Symbol and names are the English ones.
///
/// ```
/// macro_rules! count_rows {
///     ($(($variant:ident, $code:literal, $digits:literal, $symbol:literal, $name:literal, $plural:literal)),* $(,)?) => {
///         [$($code),*].len()
///     };
/// }
///
/// assert_eq!(tender_shared::for_each_currency!(count_rows), 155);
/// ```
#[macro_export]
macro_rules! for_each_currency {
    ($callback:ident) => {
        $callback! {
            (Afn, "AFN", 2, "AFN", "Afghan Afghani", "Afghan Afghanis"),
            (All, "ALL", 2, "ALL", "Albanian Lek", "Albanian lekë"),
            (Amd, "AMD", 2, "AMD", "Armenian Dram", "Armenian drams"),
            (Ang, "ANG", 2, "ANG", "Netherlands Antillean Guilder", "Netherlands Antillean guilders"),
            (Aoa, "AOA", 2, "AOA", "Angolan Kwanza", "Angolan kwanzas"),
            (Ars, "ARS", 2, "ARS", "Argentine Peso", "Argentine pesos"),
            (Aud, "AUD", 2, "A$", "Australian Dollar", "Australian dollars"),
            (Awg, "AWG", 2, "AWG", "Aruban Florin", "Aruban florin"),
            (Azn, "AZN", 2, "AZN", "Azerbaijani Manat", "Azerbaijani manats"),
            (Bam, "BAM", 2, "BAM", "Bosnia-Herzegovina Convertible Mark", "Bosnia-Herzegovina convertible marks"),
            (Bbd, "BBD", 2, "BBD", "Barbadian Dollar", "Barbadian dollars"),
            (Bdt, "BDT", 2, "BDT", "Bangladeshi Taka", "Bangladeshi takas"),
            (Bgn, "BGN", 2, "BGN", "Bulgarian Lev", "Bulgarian leva"),
            (Bhd, "BHD", 3, "BHD", "Bahraini Dinar", "Bahraini dinars"),
            (Bif, "BIF", 0, "BIF", "Burundian Franc", "Burundian francs"),
            (Bmd, "BMD", 2, "BMD", "Bermudan Dollar", "Bermudan dollars"),
            (Bnd, "BND", 2, "BND", "Brunei Dollar", "Brunei dollars"),
            (Bob, "BOB", 2, "BOB", "Bolivian Boliviano", "Bolivian bolivianos"),
            (Brl, "BRL", 2, "R$", "Brazilian Real", "Brazilian reals"),
            (Bsd, "BSD", 2, "BSD", "Bahamian Dollar", "Bahamian dollars"),
            (Btn, "BTN", 2, "BTN", "Bhutanese Ngultrum", "Bhutanese ngultrums"),
            (Bwp, "BWP", 2, "BWP", "Botswanan Pula", "Botswanan pulas"),
            (Byn, "BYN", 2, "BYN", "Belarusian Ruble", "Belarusian rubles"),
            (Bzd, "BZD", 2, "BZD", "Belize Dollar", "Belize dollars"),
            (Cad, "CAD", 2, "CA$", "Canadian Dollar", "Canadian dollars"),
            (Cdf, "CDF", 2, "CDF", "Congolese Franc", "Congolese francs"),
            (Chf, "CHF", 2, "CHF", "Swiss Franc", "Swiss francs"),
            (Clp, "CLP", 0, "CLP", "Chilean Peso", "Chilean pesos"),
            (Cny, "CNY", 2, "CN¥", "Chinese Yuan", "Chinese yuan"),
            (Cop, "COP", 2, "COP", "Colombian Peso", "Colombian pesos"),
            (Crc, "CRC", 2, "CRC", "Costa Rican Colón", "Costa Rican colóns"),
            (Cuc, "CUC", 2, "CUC", "Cuban Convertible Peso", "Cuban convertible pesos"),
            (Cup, "CUP", 2, "CUP", "Cuban Peso", "Cuban pesos"),
            (Cve, "CVE", 2, "CVE", "Cape Verdean Escudo", "Cape Verdean escudos"),
            (Czk, "CZK", 2, "CZK", "Czech Koruna", "Czech korunas"),
            (Djf, "DJF", 0, "DJF", "Djiboutian Franc", "Djiboutian francs"),
            (Dkk, "DKK", 2, "DKK", "Danish Krone", "Danish kroner"),
            (Dop, "DOP", 2, "DOP", "Dominican Peso", "Dominican pesos"),
            (Dzd, "DZD", 2, "DZD", "Algerian Dinar", "Algerian dinars"),
            (Egp, "EGP", 2, "EGP", "Egyptian Pound", "Egyptian pounds"),
            (Ern, "ERN", 2, "ERN", "Eritrean Nakfa", "Eritrean nakfas"),
            (Etb, "ETB", 2, "ETB", "Ethiopian Birr", "Ethiopian birrs"),
            (Eur, "EUR", 2, "€", "Euro", "euros"),
            (Fjd, "FJD", 2, "FJD", "Fijian Dollar", "Fijian dollars"),
            (Fkp, "FKP", 2, "FKP", "Falkland Islands Pound", "Falkland Islands pounds"),
            (Gbp, "GBP", 2, "£", "British Pound", "British pounds"),
            (Gel, "GEL", 2, "GEL", "Georgian Lari", "Georgian laris"),
            (Ghs, "GHS", 2, "GHS", "Ghanaian Cedi", "Ghanaian cedis"),
            (Gip, "GIP", 2, "GIP", "Gibraltar Pound", "Gibraltar pounds"),
            (Gmd, "GMD", 2, "GMD", "Gambian Dalasi", "Gambian dalasis"),
            (Gnf, "GNF", 0, "GNF", "Guinean Franc", "Guinean francs"),
            (Gtq, "GTQ", 2, "GTQ", "Guatemalan Quetzal", "Guatemalan quetzals"),
            (Gyd, "GYD", 2, "GYD", "Guyanaese Dollar", "Guyanaese dollars"),
            (Hkd, "HKD", 2, "HK$", "Hong Kong Dollar", "Hong Kong dollars"),
            (Hnl, "HNL", 2, "HNL", "Honduran Lempira", "Honduran lempiras"),
            (Hrk, "HRK", 2, "HRK", "Croatian Kuna", "Croatian kunas"),
            (Htg, "HTG", 2, "HTG", "Haitian Gourde", "Haitian gourdes"),
            (Huf, "HUF", 2, "HUF", "Hungarian Forint", "Hungarian forints"),
            (Idr, "IDR", 2, "IDR", "Indonesian Rupiah", "Indonesian rupiahs"),
            (Ils, "ILS", 2, "₪", "Israeli New Shekel", "Israeli new shekels"),
            (Inr, "INR", 2, "₹", "Indian Rupee", "Indian rupees"),
            (Iqd, "IQD", 3, "IQD", "Iraqi Dinar", "Iraqi dinars"),
            (Irr, "IRR", 2, "IRR", "Iranian Rial", "Iranian rials"),
            (Isk, "ISK", 0, "ISK", "Icelandic Króna", "Icelandic krónur"),
            (Jmd, "JMD", 2, "JMD", "Jamaican Dollar", "Jamaican dollars"),
            (Jod, "JOD", 3, "JOD", "Jordanian Dinar", "Jordanian dinars"),
            (Jpy, "JPY", 0, "¥", "Japanese Yen", "Japanese yen"),
            (Kes, "KES", 2, "KES", "Kenyan Shilling", "Kenyan shillings"),
            (Kgs, "KGS", 2, "KGS", "Kyrgystani Som", "Kyrgystani soms"),
            (Khr, "KHR", 2, "KHR", "Cambodian Riel", "Cambodian riels"),
            (Kmf, "KMF", 0, "KMF", "Comorian Franc", "Comorian francs"),
            (Kpw, "KPW", 2, "KPW", "North Korean Won", "North Korean won"),
            (Krw, "KRW", 0, "₩", "South Korean Won", "South Korean won"),
            (Kwd, "KWD", 3, "KWD", "Kuwaiti Dinar", "Kuwaiti dinars"),
            (Kyd, "KYD", 2, "KYD", "Cayman Islands Dollar", "Cayman Islands dollars"),
            (Kzt, "KZT", 2, "KZT", "Kazakhstani Tenge", "Kazakhstani tenges"),
            (Lak, "LAK", 2, "LAK", "Laotian Kip", "Laotian kips"),
            (Lbp, "LBP", 2, "LBP", "Lebanese Pound", "Lebanese pounds"),
            (Lkr, "LKR", 2, "LKR", "Sri Lankan Rupee", "Sri Lankan rupees"),
            (Lrd, "LRD", 2, "LRD", "Liberian Dollar", "Liberian dollars"),
            (Lsl, "LSL", 2, "LSL", "Lesotho Loti", "Lesotho lotis"),
            (Lyd, "LYD", 3, "LYD", "Libyan Dinar", "Libyan dinars"),
            (Mad, "MAD", 2, "MAD", "Moroccan Dirham", "Moroccan dirhams"),
            (Mdl, "MDL", 2, "MDL", "Moldovan Leu", "Moldovan lei"),
            (Mga, "MGA", 2, "MGA", "Malagasy Ariary", "Malagasy ariaries"),
            (Mkd, "MKD", 2, "MKD", "Macedonian Denar", "Macedonian denari"),
            (Mmk, "MMK", 2, "MMK", "Myanmar Kyat", "Myanmar kyats"),
            (Mnt, "MNT", 2, "MNT", "Mongolian Tugrik", "Mongolian tugriks"),
            (Mop, "MOP", 2, "MOP", "Macanese Pataca", "Macanese patacas"),
            (Mru, "MRU", 2, "MRU", "Mauritanian Ouguiya", "Mauritanian ouguiyas"),
            (Mur, "MUR", 2, "MUR", "Mauritian Rupee", "Mauritian rupees"),
            (Mvr, "MVR", 2, "MVR", "Maldivian Rufiyaa", "Maldivian rufiyaas"),
            (Mwk, "MWK", 2, "MWK", "Malawian Kwacha", "Malawian kwachas"),
            (Mxn, "MXN", 2, "MX$", "Mexican Peso", "Mexican pesos"),
            (Myr, "MYR", 2, "MYR", "Malaysian Ringgit", "Malaysian ringgits"),
            (Mzn, "MZN", 2, "MZN", "Mozambican Metical", "Mozambican meticals"),
            (Nad, "NAD", 2, "NAD", "Namibian Dollar", "Namibian dollars"),
            (Ngn, "NGN", 2, "NGN", "Nigerian Naira", "Nigerian nairas"),
            (Nio, "NIO", 2, "NIO", "Nicaraguan Córdoba", "Nicaraguan córdobas"),
            (Nok, "NOK", 2, "NOK", "Norwegian Krone", "Norwegian kroner"),
            (Npr, "NPR", 2, "NPR", "Nepalese Rupee", "Nepalese rupees"),
            (Nzd, "NZD", 2, "NZ$", "New Zealand Dollar", "New Zealand dollars"),
            (Omr, "OMR", 3, "OMR", "Omani Rial", "Omani rials"),
            (Pab, "PAB", 2, "PAB", "Panamanian Balboa", "Panamanian balboas"),
            (Pen, "PEN", 2, "PEN", "Peruvian Sol", "Peruvian soles"),
            (Pgk, "PGK", 2, "PGK", "Papua New Guinean Kina", "Papua New Guinean kina"),
            (Php, "PHP", 2, "₱", "Philippine Peso", "Philippine pesos"),
            (Pkr, "PKR", 2, "PKR", "Pakistani Rupee", "Pakistani rupees"),
            (Pln, "PLN", 2, "PLN", "Polish Zloty", "Polish zlotys"),
            (Pyg, "PYG", 0, "PYG", "Paraguayan Guarani", "Paraguayan guaranis"),
            (Qar, "QAR", 2, "QAR", "Qatari Riyal", "Qatari riyals"),
            (Ron, "RON", 2, "RON", "Romanian Leu", "Romanian lei"),
            (Rsd, "RSD", 2, "RSD", "Serbian Dinar", "Serbian dinars"),
            (Rub, "RUB", 2, "RUB", "Russian Ruble", "Russian rubles"),
            (Rwf, "RWF", 0, "RWF", "Rwandan Franc", "Rwandan francs"),
            (Sar, "SAR", 2, "SAR", "Saudi Riyal", "Saudi riyals"),
            (Sbd, "SBD", 2, "SBD", "Solomon Islands Dollar", "Solomon Islands dollars"),
            (Scr, "SCR", 2, "SCR", "Seychellois Rupee", "Seychellois rupees"),
            (Sdg, "SDG", 2, "SDG", "Sudanese Pound", "Sudanese pounds"),
            (Sek, "SEK", 2, "SEK", "Swedish Krona", "Swedish kronor"),
            (Sgd, "SGD", 2, "SGD", "Singapore Dollar", "Singapore dollars"),
            (Shp, "SHP", 2, "SHP", "St. Helena Pound", "St. Helena pounds"),
            (Sll, "SLL", 2, "SLL", "Sierra Leonean Leone", "Sierra Leonean leones"),
            (Sos, "SOS", 2, "SOS", "Somali Shilling", "Somali shillings"),
            (Srd, "SRD", 2, "SRD", "Surinamese Dollar", "Surinamese dollars"),
            (Ssp, "SSP", 2, "SSP", "South Sudanese Pound", "South Sudanese pounds"),
            (Stn, "STN", 2, "STN", "São Tomé & Príncipe Dobra", "São Tomé & Príncipe dobras"),
            (Syp, "SYP", 2, "SYP", "Syrian Pound", "Syrian pounds"),
            (Szl, "SZL", 2, "SZL", "Swazi Lilangeni", "Swazi emalangeni"),
            (Thb, "THB", 2, "THB", "Thai Baht", "Thai baht"),
            (Tjs, "TJS", 2, "TJS", "Tajikistani Somoni", "Tajikistani somonis"),
            (Tmt, "TMT", 2, "TMT", "Turkmenistani Manat", "Turkmenistani manat"),
            (Tnd, "TND", 3, "TND", "Tunisian Dinar", "Tunisian dinars"),
            (Top, "TOP", 2, "TOP", "Tongan Paʻanga", "Tongan paʻanga"),
            (Try, "TRY", 2, "TRY", "Turkish Lira", "Turkish Lira"),
            (Ttd, "TTD", 2, "TTD", "Trinidad & Tobago Dollar", "Trinidad & Tobago dollars"),
            (Twd, "TWD", 2, "NT$", "New Taiwan Dollar", "New Taiwan dollars"),
            (Tzs, "TZS", 2, "TZS", "Tanzanian Shilling", "Tanzanian shillings"),
            (Uah, "UAH", 2, "UAH", "Ukrainian Hryvnia", "Ukrainian hryvnias"),
            (Ugx, "UGX", 0, "UGX", "Ugandan Shilling", "Ugandan shillings"),
            (Usd, "USD", 2, "$", "US Dollar", "US dollars"),
            (Uyu, "UYU", 2, "UYU", "Uruguayan Peso", "Uruguayan pesos"),
            (Uzs, "UZS", 2, "UZS", "Uzbekistani Som", "Uzbekistani som"),
            (Vef, "VEF", 2, "VEF", "Venezuelan Bolívar (2008–2018)", "Venezuelan bolívars (2008–2018)"),
            (Ves, "VES", 2, "VES", "Venezuelan Bolívar", "Venezuelan bolívars"),
            (Vnd, "VND", 0, "₫", "Vietnamese Dong", "Vietnamese dong"),
            (Vuv, "VUV", 0, "VUV", "Vanuatu Vatu", "Vanuatu vatus"),
            (Wst, "WST", 2, "WST", "Samoan Tala", "Samoan tala"),
            (Xaf, "XAF", 0, "FCFA", "Central African CFA Franc", "Central African CFA francs"),
            (Xcd, "XCD", 2, "EC$", "East Caribbean Dollar", "East Caribbean dollars"),
            (Xof, "XOF", 0, "F CFA", "West African CFA Franc", "West African CFA francs"),
            (Xpf, "XPF", 2, "CFPF", "CFP Franc", "CFP francs"),
            (Yer, "YER", 2, "YER", "Yemeni Rial", "Yemeni rials"),
            (Zar, "ZAR", 2, "ZAR", "South African Rand", "South African rand"),
            (Zmw, "ZMW", 2, "ZMW", "Zambian Kwacha", "Zambian kwachas"),
        }
    };
}

macro_rules! define_currency_codes {
    ($(($variant:ident, $code:literal, $digits:literal, $symbol:literal, $name:literal, $plural:literal)),* $(,)?) => {
        /// ISO 4217 currency codes supported by the library.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum CurrencyCode {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl CurrencyCode {
            /// Every supported currency, in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Number of supported currencies.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the three-letter code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Returns the number of fractional digits of the minor unit.
            #[must_use]
            pub const fn minor_unit_digits(self) -> u32 {
                match self {
                    $(Self::$variant => $digits,)*
                }
            }

            /// Returns the international (English) symbol, or the code when none exists.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }

            /// Returns the English display name, e.g. `"US Dollar"`.
            #[must_use]
            pub const fn english_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Returns the English plural name, e.g. `"US dollars"`.
            #[must_use]
            pub const fn english_plural_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $plural,)*
                }
            }

            /// Looks up a code, ignoring ASCII case.
            #[must_use]
            pub fn from_code(code: &str) -> Option<Self> {
                match code.to_ascii_uppercase().as_str() {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

for_each_currency!(define_currency_codes);

impl CurrencyCode {
    /// Position of this currency in [`CurrencyCode::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
