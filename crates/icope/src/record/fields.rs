//! The closed set of question labels and answer literals.
//!
//! The Answer Record itself accepts any label, but everything the screening
//! engine and the grouped summary read goes through these constants. Labels
//! are the exact field names the collector form submits.

/// Affirmative answer for yes/no questions.
pub const YES: &str = "是";
/// Negative answer for yes/no questions.
pub const NO: &str = "否";
/// Passing result for pass/fail tests.
pub const PASS: &str = "通過";
/// Failing result for pass/fail tests.
pub const FAIL: &str = "未通過";
/// Value a checked checkbox submits.
pub const CHECKED: &str = "on";

/// Name of the person being assessed (used for the export file name).
pub const NAME: &str = "姓名";

// Cognition (ICOPE domain A)
pub const TODAY_DATE: &str = "今天的日期（年/月/日）";
pub const CURRENT_LOCATION: &str = "現在在哪裡？";
pub const MEMORY_ITEM_1: &str = "物品1";
pub const MEMORY_ITEM_2: &str = "物品2";
pub const MEMORY_ITEM_3: &str = "物品3";

/// The three memory items shown before the form, paired with the field each
/// recall answer is stored under.
pub const MEMORY_ITEMS: [(&str, &str); 3] = [
    (MEMORY_ITEM_1, "鉛筆"),
    (MEMORY_ITEM_2, "汽車"),
    (MEMORY_ITEM_3, "書"),
];

// Mobility (domain B)
pub const SIT_TO_STAND_SECONDS: &str = "椅子起身測試秒數";
pub const NEEDS_ASSISTIVE_DEVICE: &str = "需輔具？";

// Nutrition (domain C)
pub const WEIGHT_LOSS: &str = "您的體重是否在無意中減輕了3公斤以上？";
pub const REDUCED_APPETITE: &str = "您是否曾經食慾不振？";

// Vision (domain D)
pub const VISION_DIFFICULTY: &str = "您的眼睛看遠、看近或閱讀是否有困難？";
pub const WHO_VISION_TEST: &str = "WHO簡單視力「遠、近距離」測試";
pub const OPHTHALMOLOGY_SURVEY: &str = "高風險個案之眼科檢查調查表";

// Hearing (domain E)
pub const WHISPER_TEST: &str = "長者是否兩耳都聽得到？";

// Mood (domain F)
pub const FEELS_DOWN: &str = "您是否常感到煩悶（心煩或台語「阿雜」），或沒有希望？";
pub const LOST_INTEREST: &str = "您是否減少很多的活動和興趣的事？";

/// Basic demographic fields, in summary display order.
pub const BASIC_FIELDS: [&str; 14] = [
    "姓名",
    "身分證統一編號",
    "性別",
    "生日_年",
    "生日_月",
    "生日_日",
    "具原住民身分",
    "電話",
    "手機號碼",
    "縣市",
    "鄉鎮市區",
    "村里",
    "詳細地址",
    "LINE註冊個人代碼",
];

/// Chronic-condition checkbox fields. The last entry is the free-text detail
/// that accompanies the "other" checkbox.
pub const CHRONIC_FIELDS: [&str; 11] = [
    "慢性疾病_高血壓",
    "慢性疾病_糖尿病",
    "慢性疾病_高血脂症",
    "慢性疾病_心臟病",
    "慢性疾病_腦中風",
    "慢性疾病_腎臟病",
    "慢性疾病_精神疾病",
    "慢性疾病_COPD",
    "慢性疾病_癌症",
    "慢性疾病_其他",
    "慢性疾病_其他詳情",
];

/// Label prefix shared by the chronic-condition fields.
pub const CHRONIC_PREFIX: &str = "慢性疾病_";
/// Free-text detail field of the chronic-condition group.
pub const CHRONIC_DETAIL: &str = "慢性疾病_其他詳情";

/// Reasons the person is not registered on the LINE service.
pub const UNREGISTERED_FIELDS: [&str; 5] = [
    "未註冊_無未帶智慧型手機",
    "未註冊_拒絕加入",
    "未註冊_網路連線異常",
    "未註冊_其他",
    "未註冊_其他詳情",
];

/// Label prefix shared by the non-registration fields.
pub const UNREGISTERED_PREFIX: &str = "未註冊_";
/// Free-text detail field of the non-registration group.
pub const UNREGISTERED_DETAIL: &str = "未註冊_其他詳情";
