//! # 融資種別・支店
//!
//! フォームの選択肢とハンドラのルーティングキーを定義する。
//!
//! | 型 | ドメイン用語 | コード |
//! |---|------------|-------|
//! | [`LoanType`] | 融資種別 | business, car, consumer, travel |
//! | [`Branch`] | 支店 | central, 22avtokom, soyoolj, diesel, orkhon-bayanondor |
//!
//! コードはワイヤ上の値、ラベルは利用者に表示するモンゴル語の名称。
//! ラベルは常にコードから導出する。

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// 固定の選択肢集合
///
/// 検索付きドロップダウンとラベル解決が共通で使う。
pub trait ChoiceOption: Copy + Eq + Sized + 'static {
    /// 表示順に並んだ全選択肢
    fn all() -> &'static [Self];

    /// ワイヤ上のコード
    fn code(self) -> &'static str;

    /// 表示用ラベル
    fn label(self) -> &'static str;

    /// コードから選択肢を引く
    ///
    /// 未知のコードは `None`。
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|option| option.code() == code)
    }
}

/// 融資種別
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LoanType {
    /// 事業融資
    Business,
    /// 自動車ローン
    Car,
    /// 消費者ローン
    Consumer,
    /// 旅行ローン
    Travel,
}

impl LoanType {
    /// 表示順の全種別
    pub const ALL: [Self; 4] = [Self::Business, Self::Car, Self::Consumer, Self::Travel];
}

impl ChoiceOption for LoanType {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn code(self) -> &'static str {
        self.into()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Business => "Бизнесийн зээл",
            Self::Car => "Автомашин зээл",
            Self::Consumer => "Хэрэглээний зээл",
            Self::Travel => "Аяллын зээл",
        }
    }
}

/// 支店
///
/// 通知メールの宛先を決めるルーティングキー。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Branch {
    /// 本店
    Central,
    /// 22 オートコム支店
    #[serde(rename = "22avtokom")]
    #[strum(serialize = "22avtokom")]
    Avtokom22,
    /// ソヨールジ支店
    Soyoolj,
    /// ディーゼル支店
    Diesel,
    /// オルホン・バヤンウンドゥル支店
    OrkhonBayanondor,
}

impl Branch {
    /// 表示順の全支店
    pub const ALL: [Self; 5] = [
        Self::Central,
        Self::Avtokom22,
        Self::Soyoolj,
        Self::Diesel,
        Self::OrkhonBayanondor,
    ];
}

impl ChoiceOption for Branch {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn code(self) -> &'static str {
        self.into()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Central => "Төв салбар",
            Self::Avtokom22 => "22 автоком салбар",
            Self::Soyoolj => "Соёолж салбар",
            Self::Diesel => "Дизель хүрээ салбар",
            Self::OrkhonBayanondor => "Орхон Баян-Өндөр салбар",
        }
    }
}
