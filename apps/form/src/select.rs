//! # 検索可能なドロップダウン
//!
//! 融資種別・支店の選択に使うドロップダウンの開閉状態と絞り込み文字列を管理する。
//! 選択値そのものはフォームの下書きが持ち、このコンポーネントは持たない。

use std::marker::PhantomData;

use zeel_domain::loan::ChoiceOption;

use crate::messages::NO_MATCHES;

/// 検索可能なドロップダウン
#[derive(Debug, Clone)]
pub struct SearchableSelect<T> {
    open:    bool,
    filter:  String,
    _option: PhantomData<T>,
}

impl<T: ChoiceOption> Default for SearchableSelect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ChoiceOption> SearchableSelect<T> {
    pub fn new() -> Self {
        Self {
            open:    false,
            filter:  String::new(),
            _option: PhantomData,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// 開閉を切り替える
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// 入力欄へのフォーカスで開く
    pub fn focus(&mut self) {
        self.open = true;
    }

    /// 絞り込み文字列を更新する。閉じていれば開く
    pub fn type_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.open = true;
    }

    /// 絞り込み後の選択肢
    ///
    /// ラベルに対する大文字小文字を区別しない部分一致。
    /// 絞り込み文字列が空なら全件を返す。
    pub fn filtered_options(&self) -> Vec<T> {
        if self.filter.is_empty() {
            return T::all().to_vec();
        }
        let needle = self.filter.to_lowercase();
        T::all()
            .iter()
            .copied()
            .filter(|option| option.label().to_lowercase().contains(&needle))
            .collect()
    }

    /// 絞り込み結果が空のときに表示する文言
    pub fn empty_placeholder(&self) -> Option<&'static str> {
        (self.open && self.filtered_options().is_empty()).then_some(NO_MATCHES)
    }

    /// 選択肢を選ぶ
    ///
    /// 閉じて絞り込み文字列を消し、下書きに渡すコードを返す。
    pub fn select(&mut self, option: T) -> &'static str {
        self.filter.clear();
        self.open = false;
        option.code()
    }

    /// コンポーネント外のクリックで閉じる
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    /// 入力欄に表示する文字列
    ///
    /// 開いている間は絞り込み文字列、閉じている間は選択中のラベル。
    pub fn display_text(&self, selected: Option<T>) -> &str {
        if self.open {
            &self.filter
        } else {
            selected.map_or("", ChoiceOption::label)
        }
    }
}
