use js_sys::Array;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::forms::collector::FormFields;

/// Reads every successful control of the submitted form, in document order.
/// File inputs are skipped.
pub fn form_fields(form: &HtmlFormElement) -> FormFields {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Could not read form data: {:?}", e);
            return FormFields::default();
        }
    };
    let iter = match js_sys::try_iter(data.as_ref()) {
        Ok(Some(iter)) => iter,
        _ => return FormFields::default(),
    };
    iter.filter_map(Result::ok)
        .filter_map(|entry| {
            let pair: Array = entry.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// The form behind a submit event, with the browser's own submission stopped.
pub fn submitted_form(e: &SubmitEvent) -> Option<HtmlFormElement> {
    e.prevent_default();
    e.target_dyn_into::<HtmlFormElement>()
}
