//! # ルーティング表
//!
//! 支店コードから通知メールの宛先を決める。
//!
//! ## 解決順序
//!
//! 1. 支店別の宛先（`BRANCH_EMAILS`）に登録があればそれを使う
//! 2. 無ければ既定の宛先（`RESEND_TO_EMAIL`）を使う
//! 3. どちらも無ければ `None`（サーバー設定不備）
//!
//! 支店別の宛先は起動時に検証済みの型付きマップとして構築する。
//! 不正な設定はリクエスト時に無視するのではなく、起動時に拒否する。

use std::collections::HashMap;

use crate::{
    DomainError,
    email::EmailAddress,
    loan::{Branch, ChoiceOption},
};

/// 支店 → 宛先のルーティング表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutingTable {
    per_branch: HashMap<Branch, EmailAddress>,
    default:    Option<EmailAddress>,
}

impl RoutingTable {
    pub fn new(default: Option<EmailAddress>, per_branch: HashMap<Branch, EmailAddress>) -> Self {
        Self {
            per_branch,
            default,
        }
    }

    /// JSON オブジェクト（支店コード → アドレス）から支店別の宛先を読み込む
    ///
    /// 例: `{"central":"office@company.mn","diesel":"diesel@company.mn"}`
    ///
    /// # エラー
    ///
    /// JSON オブジェクトでない、未知の支店コードを含む、アドレスが不正な場合は
    /// `DomainError::Validation` を返す。
    pub fn parse_branch_emails(json: &str) -> Result<HashMap<Branch, EmailAddress>, DomainError> {
        let raw: HashMap<String, String> = serde_json::from_str(json).map_err(|e| {
            DomainError::Validation(format!(
                "支店別宛先は支店コードからアドレスへの JSON オブジェクトである必要があります: {e}"
            ))
        })?;

        raw.into_iter()
            .map(|(code, address)| {
                let branch = Branch::from_code(&code).ok_or_else(|| {
                    DomainError::Validation(format!("未知の支店コードです: {code}"))
                })?;
                Ok((branch, EmailAddress::new(address)?))
            })
            .collect()
    }

    /// 支店コードから宛先を解決する
    ///
    /// 未知の支店コードは支店別の登録を持たないものとして既定の宛先に落ちる。
    pub fn resolve(&self, branch_code: &str) -> Option<&EmailAddress> {
        Branch::from_code(branch_code)
            .and_then(|branch| self.per_branch.get(&branch))
            .or(self.default.as_ref())
    }

    /// 既定の宛先
    pub fn default_address(&self) -> Option<&EmailAddress> {
        self.default.as_ref()
    }

    /// 支店別に登録された宛先の数
    pub fn branch_entries(&self) -> usize {
        self.per_branch.len()
    }
}
