/// Eastern Arabic digit glyphs, indexed by digit value
pub const EASTERN_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Western Arabic digit glyphs, indexed by digit value
pub const WESTERN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Largest magnitude accepted by tafgeet (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Hijri month names, indexed by `month - 1`
pub const HIJRI_MONTHS: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Gregorian month names in Arabic, indexed by `month - 1`
pub const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// Gregorian month names in English, indexed by `month - 1`
pub const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Tabular calendar arithmetic

/// JDN of 1 Muharram 1 AH in the tabular calendar (civil epoch)
pub(crate) const HIJRI_EPOCH_JDN: i64 = 1_948_440;
/// Days in one 30-year tabular cycle
pub(crate) const HIJRI_CYCLE_DAYS: i64 = 10_631;
/// First adjusted year that takes the Gregorian correction
pub(crate) const GREGORIAN_REFORM_YEAR: i64 = 1583;
/// Last day of October 1582 still reckoned in the Julian calendar
pub(crate) const JULIAN_LAST_DAY_OCTOBER_1582: i64 = 4;
/// Days dropped by the 1582 reform
pub(crate) const REFORM_GAP_DAYS: i64 = 10;

// Tafgeet word tables. Index 0 is unused wherever a zero digit renders nothing.

/// The word for zero
pub const ZERO_WORD: &str = "صفر";
/// Prefix for negative numbers
pub const NEGATIVE_WORD: &str = "سالب";
/// Conjunction placed before each following part
pub const CONJUNCTION: &str = " و";

pub(crate) const ONES: [&str; 10] = [
    "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
];

/// 10 through 19; index 0 is the irregular ten
pub(crate) const TEENS: [&str; 10] = [
    "عشرة",
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];

pub(crate) const TENS: [&str; 10] = [
    "", "عشرة", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];

/// Hundreds already carry their agreement (200 is the dual "مائتان")
pub(crate) const HUNDREDS: [&str; 10] = [
    "",
    "مائة",
    "مائتان",
    "ثلاثمائة",
    "أربعمائة",
    "خمسمائة",
    "ستمائة",
    "سبعمائة",
    "ثمانمائة",
    "تسعمائة",
];

/// Tier suffix forms: [unused, singular, dual, plural (3-10), accusative (11+)]
pub(crate) type TierForms = [&'static str; 5];

pub(crate) const THOUSANDS: TierForms = ["", "ألف", "ألفان", "آلاف", "ألفًا"];
pub(crate) const MILLIONS: TierForms = ["", "مليون", "مليونان", "ملايين", "مليونًا"];
pub(crate) const BILLIONS: TierForms = ["", "مليار", "ملياران", "مليارات", "مليارًا"];
pub(crate) const TRILLIONS: TierForms = ["", "تريليون", "تريليونان", "تريليونات", "تريليونًا"];

// Relative time

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MILLIS_PER_SECOND: i64 = 1000;

// Currency

/// Currency used when none is configured
pub const DEFAULT_CURRENCY: &str = "SAR";

/// Display symbols keyed by ISO 4217 code
pub const CURRENCY_SYMBOLS: [(&str, &str); 11] = [
    ("SAR", "ر.س"),
    ("EGP", "ج.م"),
    ("AED", "د.إ"),
    ("QAR", "ر.ق"),
    ("KWD", "د.ك"),
    ("BHD", "د.ب"),
    ("OMR", "ر.ع"),
    ("JOD", "د.أ"),
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
];

/// Minor units for well-formed codes not listed below
pub const DEFAULT_FRACTION_DIGITS: usize = 2;

/// Codes quoted with three decimal places
pub(crate) const THREE_DECIMAL_CURRENCIES: [&str; 6] = ["BHD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Codes quoted without decimals
pub(crate) const ZERO_DECIMAL_CURRENCIES: [&str; 24] = [
    "AFN", "ALL", "BIF", "CLP", "DJF", "GNF", "IQD", "IRR", "ISK", "JPY", "KMF", "KRW", "LAK",
    "LBP", "MMK", "PYG", "RWF", "SYP", "UGX", "VND", "VUV", "XAF", "XOF", "YER",
];
