//! `google.script.run` Transport
//!
//! Wraps the success/failure handler chain in a Promise so server functions
//! can be awaited.

use js_sys::{Array, Function, Promise, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn runner() -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let google = Reflect::get(&window, &JsValue::from_str("google"))?;
    if google.is_undefined() || google.is_null() {
        return Ok(JsValue::UNDEFINED);
    }
    let script = Reflect::get(&google, &JsValue::from_str("script"))?;
    if script.is_undefined() || script.is_null() {
        return Ok(JsValue::UNDEFINED);
    }
    Reflect::get(&script, &JsValue::from_str("run"))
}

/// True when the page is served from Apps Script
pub fn available() -> bool {
    runner().map(|r| r.is_object()).unwrap_or(false)
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("{} は関数ではありません", name)))
}

pub async fn call(function: &str, args: &[Value]) -> Result<JsValue, String> {
    let runner = runner().map_err(|e| describe(&e))?;
    let js_args = args
        .iter()
        .map(serde_wasm_bindgen::to_value)
        .collect::<Result<Array, _>>()
        .map_err(|e| e.to_string())?;

    let promise = Promise::new(&mut |resolve, reject| {
        let dispatched = (|| -> Result<(), JsValue> {
            let chained = method(&runner, "withSuccessHandler")?.call1(&runner, &resolve)?;
            let chained = method(&chained, "withFailureHandler")?.call1(&chained, &reject)?;
            method(&chained, function)?.apply(&chained, &js_args)?;
            Ok(())
        })();
        if let Err(e) = dispatched {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    JsFuture::from(promise).await.map_err(|e| describe(&e))
}

/// Human-readable text for a thrown JS value (`Error.message` when present)
pub fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
