// リクエストパラメータのキー正規化
//
// snake_case / kebab-case / camelCase のいずれで送られたキーも
// camelCaseに揃え、操作のパラメータ定義と突き合わせられるようにする。

use std::collections::HashSet;

use serde_json::{Map, Value};

/// キーをcamelCaseに変換する
///
/// `_x` または `-x`（xはASCII小文字）を `X` に置き換える。
/// それ以外の文字はそのまま残すため、camelCaseのキーは変化しない。
///
/// # 例
/// - `access_token` → `accessToken`
/// - `start-date` → `startDate`
/// - `a__b` → `a_B`
pub fn to_camel_case(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' {
            if let Some(next) = chars.peek().copied().filter(|n| n.is_ascii_lowercase()) {
                result.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        result.push(c);
    }

    result
}

/// camelCaseのパラメータ名をPlaid APIのフィールド名（snake_case）に変換する
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('_');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// パラメータマップのすべてのキーをcamelCaseに正規化する
///
/// # 衝突時のルール
/// - 元からcamelCaseで書かれたキーが、変換されたキーより常に優先される
/// - 変換されたキー同士が衝突した場合は、リクエスト内で後に現れたものが勝つ
///
/// したがって `{"access_token": "a", "accessToken": "b"}` はキーの順序によらず
/// `accessToken = "b"` になる。
pub fn normalize_keys(parameters: Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::with_capacity(parameters.len());
    let mut canonical: HashSet<String> = HashSet::new();

    for (key, value) in parameters {
        let camel = to_camel_case(&key);

        if camel == key {
            canonical.insert(camel.clone());
            normalized.insert(camel, value);
        } else if !canonical.contains(&camel) {
            normalized.insert(camel, value);
        }
    }

    normalized
}
