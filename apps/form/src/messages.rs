//! 利用者に表示する文言（モンゴル語）

/// テキスト項目が未入力
pub const REQUIRED_FIELD: &str = "Заавал бөглөнө үү";

/// 融資種別が未選択
pub const LOAN_TYPE_REQUIRED: &str = "Зээлийн төрөл сонгоно уу";

/// 支店が未選択
pub const BRANCH_REQUIRED: &str = "Салбар сонгоно уу";

/// 送信成功
pub const SUBMIT_SUCCEEDED: &str =
    "Таны хүсэлт амжилттай илгээгдлээ. Манай зээлийн эдийн засагч тантай холбогдох болно.";

/// サーバーがエラー文言を返さなかった場合の送信失敗
pub const SUBMIT_FAILED: &str = "Илгээхэд алдаа гарлаа. Дахин оролдоно уу.";

/// 通信失敗
pub const CONNECTION_FAILED: &str = "Холболт амжилтгүй. Дахин оролдоно уу.";

/// ドロップダウンの絞り込み結果が空
pub const NO_MATCHES: &str = "Олдсонгүй";
