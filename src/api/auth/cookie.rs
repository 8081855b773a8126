//! Cookie文字列の読み取り
//!
//! `a=1; b=2` 形式の文字列から値を取り出す。Cookieの設定はバックエンドの
//! `Set-Cookie` のみが行い、こちらからは書き込まない。

/// 偽造防止トークンを保持するCookie名
pub const CSRF_COOKIE: &str = "csrftoken";

/// Cookie文字列から特定のCookie値を抽出
///
/// 先頭一致した最初のエントリを採用し、値はURLデコードして返す。
/// Cookieストアが無い場合（`None`）や空文字列の場合は `None`。
pub fn get_cookie(cookies: Option<&str>, name: &str) -> Option<String> {
    let cookies = cookies?;
    if cookies.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix(prefix.as_str()))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let cookies = "sessionid=abc; csrftoken=tok123";
        assert_eq!(get_cookie(Some(cookies), "csrftoken").as_deref(), Some("tok123"));
        assert_eq!(get_cookie(Some(cookies), "sessionid").as_deref(), Some("abc"));
    }

    #[test]
    fn test_value_is_url_decoded() {
        let cookies = "greeting=ol%C3%A1%20mundo";
        assert_eq!(get_cookie(Some(cookies), "greeting").as_deref(), Some("olá mundo"));
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(get_cookie(Some("a=1; b=2"), "csrftoken"), None);
        assert_eq!(get_cookie(Some(""), "csrftoken"), None);
        assert_eq!(get_cookie(None, "csrftoken"), None);
    }

    #[test]
    fn test_key_must_match_exactly() {
        // 前方一致だけでは採用しない
        assert_eq!(get_cookie(Some("csrftoken_old=x"), "csrftoken"), None);
        assert_eq!(get_cookie(Some("CSRFTOKEN=x"), "csrftoken"), None);
        assert_eq!(get_cookie(Some("xcsrftoken=x"), "csrftoken"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let cookies = "csrftoken=first; csrftoken=second";
        assert_eq!(get_cookie(Some(cookies), "csrftoken").as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_cookie(Some("csrftoken="), "csrftoken").as_deref(), Some(""));
    }
}
