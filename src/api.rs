//! HTTP Command Wrappers
//!
//! Frontend bindings to the todos backend.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Todo;

const API_BASE: &str = "/api/todos";

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn send(method: &str, url: &str) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let promise: js_sys::Promise = window.fetch_with_request(&request);
    let response = JsFuture::from(promise).await.map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a response".to_string())?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    Ok(response)
}

// ========================
// Todo Commands
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    let response = send("GET", API_BASE).await?;
    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    send("DELETE", &format!("{API_BASE}/{id}")).await?;
    Ok(())
}
