//! Today's Date Header

use js_sys::Date;
use leptos::prelude::*;

use crate::config::{DATE_FORMAT, DATE_LOCALE};

/// e.g. `2026年10月18日日曜日`
fn format_today() -> String {
    let options = match serde_wasm_bindgen::to_value(&DATE_FORMAT) {
        Ok(options) => options,
        Err(e) => {
            crate::log::warn("DATE", &format!("date options: {}", e));
            wasm_bindgen::JsValue::UNDEFINED
        }
    };
    Date::new_0().to_locale_date_string(DATE_LOCALE, &options).into()
}

#[component]
pub fn DateHeader() -> impl IntoView {
    let today = format_today();

    view! {
        <div id="today-date">
            <h5>{today}</h5>
        </div>
    }
}
