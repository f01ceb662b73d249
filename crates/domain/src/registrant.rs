//! # 登録者（Registrant）
//!
//! チェスクラブへの申込レコードを表すドメインモデル。
//!
//! ## ドメイン用語
//!
//! | 型 | 用語 | 説明 |
//! |---|------|------|
//! | [`SignupForm`] | 申込フォーム | クライアントが送信する 7 フィールドの入力 |
//! | [`Registrant`] | 登録者 | 申込日時が付与された永続化済みレコード |
//!
//! ## 設計方針
//!
//! - **メールアドレスが事実上のキー**: 一意制約は張らない（既存挙動の保持）。
//!   同一メールアドレスでの再申込は許容される
//! - **内部 ID を持たない**: `Registrant` はストレージの内部 ID を含まず、
//!   一覧レスポンスに ID が混入しないことを型で保証する

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 申込フォーム
///
/// `POST /signup` のリクエストボディ。フィールド名は既存フロントエンドとの
/// 契約であり camelCase 固定。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub player_first_name: String,
    pub player_last_name:  String,
    pub parent_first_name: String,
    pub parent_last_name:  String,
    pub phone_number:      String,
    pub email:             String,
    pub section:           String,
}

impl SignupForm {
    /// 申込に必須のワイヤフィールド名（検証順）
    ///
    /// バリデーションはこの順に presence チェックを行い、
    /// 最初に欠けていたフィールド名をエラーに含める。
    pub const REQUIRED_FIELDS: [&'static str; 7] = [
        "playerFirstName",
        "playerLastName",
        "parentFirstName",
        "parentLastName",
        "phoneNumber",
        "email",
        "section",
    ];
}

/// 登録者
///
/// 申込日時（サーバー側で UTC 付与）を持つ永続化済みレコード。
/// `GET /Club_users` のレスポンス要素としてそのままシリアライズされる。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrant {
    pub player_first_name: String,
    pub player_last_name:  String,
    pub parent_first_name: String,
    pub parent_last_name:  String,
    pub phone_number:      String,
    pub email:             String,
    pub section:           String,
    /// 申込日時（INSERT 時にサーバーが付与する UTC 時刻）
    pub signup_date:       DateTime<Utc>,
}

impl Registrant {
    /// 申込フォームから登録者レコードを組み立てる
    ///
    /// `signup_date` は呼び出し側が渡す（通常は `Utc::now()`）。
    pub fn from_form(form: SignupForm, signup_date: DateTime<Utc>) -> Self {
        Self {
            player_first_name: form.player_first_name,
            player_last_name: form.player_last_name,
            parent_first_name: form.parent_first_name,
            parent_last_name: form.parent_last_name,
            phone_number: form.phone_number,
            email: form.email,
            section: form.section,
            signup_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_form() -> SignupForm {
        serde_json::from_value(serde_json::json!({
            "playerFirstName": "A",
            "playerLastName": "B",
            "parentFirstName": "C",
            "parentLastName": "D",
            "phoneNumber": "123",
            "email": "a@b.com",
            "section": "U8"
        }))
        .unwrap()
    }

    #[test]
    fn test_signup_formはcamel_caseでデシリアライズされる() {
        let form = sample_form();

        assert_eq!(form.player_first_name, "A");
        assert_eq!(form.parent_last_name, "D");
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn test_required_fieldsは7フィールドを検証順に列挙する() {
        assert_eq!(SignupForm::REQUIRED_FIELDS.len(), 7);
        assert_eq!(SignupForm::REQUIRED_FIELDS[0], "playerFirstName");
        assert_eq!(SignupForm::REQUIRED_FIELDS[6], "section");
    }

    #[test]
    fn test_registrantのserializeは内部idを含まない() {
        let registrant = Registrant::from_form(sample_form(), Utc::now());
        let json = serde_json::to_value(&registrant).unwrap();

        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(!keys.contains(&"id"));
        assert!(!keys.contains(&"_id"));
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["playerFirstName"], "A");
    }

    #[test]
    fn test_from_formで申込日時が付与される() {
        let now = Utc::now();
        let registrant = Registrant::from_form(sample_form(), now);

        assert_eq!(registrant.signup_date, now);
        assert_eq!(registrant.section, "U8");
    }
}
