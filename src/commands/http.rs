//! HTTP Transport
//!
//! `GET <endpoint>?action=...` against the web app, body read as text.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Keep the RFC 3986 unreserved characters readable
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn action_url(endpoint: &str, action: &str, params: &[(&str, &str)]) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    let mut url = format!(
        "{}{}action={}",
        endpoint,
        separator,
        utf8_percent_encode(action, QUERY_VALUE)
    );
    for (name, value) in params {
        url.push_str(&format!(
            "&{}={}",
            utf8_percent_encode(name, QUERY_VALUE),
            utf8_percent_encode(value, QUERY_VALUE)
        ));
    }
    url
}

pub async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("リクエストの作成に失敗しました: {}", super::script_run::describe(&e)))?;

    let window = web_sys::window().ok_or("window がありません")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| super::script_run::describe(&e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Response への変換に失敗しました".to_string())?;

    if !resp.ok() {
        return Err(format!("HTTPエラー: {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| super::script_run::describe(&e))?)
        .await
        .map_err(|e| super::script_run::describe(&e))?;

    text.as_string()
        .ok_or_else(|| "レスポンス本文が文字列ではありません".to_string())
}
