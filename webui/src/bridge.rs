//! Functions page scripts use to register hooks and initializers before
//! calling `boot`.

use std::cell::RefCell;

use formkit::{Field, Form, HookRegistry, Initializers, ResponseContext, SubmitOptions, TransportError};
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Function};
use log::{error, warn};
use serde::Serialize;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use web_sys::HtmlFormElement;

/// Registrations waiting for `boot`; each part is taken once.
struct PendingPage {
    registry: Option<HookRegistry<HtmlFormElement>>,
    initializers: Option<Initializers>,
}

impl Default for PendingPage {
    fn default() -> Self {
        Self {
            registry: Some(HookRegistry::new()),
            initializers: Some(Initializers::new()),
        }
    }
}

thread_local! {
    static PAGE: RefCell<PendingPage> = RefCell::new(PendingPage::default());
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    JsValue::from_serde(value).unwrap_or_else(|e| {
        error!("Could not convert hook argument: {}", e);
        JsValue::UNDEFINED
    })
}

fn call(name: &str, hook: &Function, args: &Array) -> Option<JsValue> {
    match hook.apply(&JsValue::NULL, args) {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Hook `{}` threw: {:?}", name, e);
            None
        }
    }
}

fn with_registry(f: impl FnOnce(&mut HookRegistry<HtmlFormElement>)) {
    PAGE.with(|page| match page.borrow_mut().registry.as_mut() {
        Some(registry) => f(registry),
        None => warn!("Hook registered after forms were bound, ignoring"),
    });
}

/// Registers a `success`, `fail` or `done` hook:
/// `(envelope, statusText, transport, form)`.
#[wasm_bindgen(js_name = registerResponseHook)]
pub fn register_response_hook(name: String, hook: Function) {
    with_registry(|registry| {
        registry.register_response(name.clone(), move |ctx: &ResponseContext<'_, HtmlFormElement>| {
            let args = Array::new();
            args.push(&to_js(ctx.envelope));
            args.push(&JsValue::from_str(ctx.status_text));
            args.push(&to_js(ctx.transport));
            args.push(ctx.form.element.as_ref());
            call(&name, &hook, &args);
        });
    });
}

/// `(form, options)`; the result is only logged.
#[wasm_bindgen(js_name = registerBeforeSerializeHook)]
pub fn register_before_serialize_hook(name: String, hook: Function) {
    with_registry(|registry| {
        registry.register_before_serialize(
            name.clone(),
            move |form: &Form<HtmlFormElement>, options: &SubmitOptions| {
                let args = Array::new();
                args.push(form.element.as_ref());
                args.push(&to_js(options));
                call(&name, &hook, &args).map_or(true, |v| v.is_truthy())
            },
        );
    });
}

/// `(fields, form, options)`; the result is only logged.
#[wasm_bindgen(js_name = registerBeforeSubmitHook)]
pub fn register_before_submit_hook(name: String, hook: Function) {
    with_registry(|registry| {
        registry.register_before_submit(
            name.clone(),
            move |fields: &[Field], form: &Form<HtmlFormElement>, options: &SubmitOptions| {
                let args = Array::new();
                args.push(&to_js(&fields));
                args.push(form.element.as_ref());
                args.push(&to_js(options));
                call(&name, &hook, &args).map_or(true, |v| v.is_truthy())
            },
        );
    });
}

/// `(transport, statusText, errorDetail)`.
#[wasm_bindgen(js_name = registerErrorHook)]
pub fn register_error_hook(name: String, hook: Function) {
    with_registry(|registry| {
        registry.register_error(name.clone(), move |e: &TransportError| {
            let args = Array::new();
            args.push(&to_js(&e.info()));
            args.push(&JsValue::from_str(e.status_text()));
            args.push(&JsValue::from_str(&e.detail()));
            call(&name, &hook, &args);
        });
    });
}

#[wasm_bindgen(js_name = registerInitializer)]
pub fn register_initializer(initializer: Function) {
    PAGE.with(|page| match page.borrow_mut().initializers.as_mut() {
        Some(initializers) => initializers.register(move || {
            call("initializer", &initializer, &Array::new());
        }),
        None => warn!("Initializer registered after the page booted, ignoring"),
    });
}

/// Hands out the pending initializers; `None` once the page has booted.
pub(crate) fn take_initializers() -> Option<Initializers> {
    PAGE.with(|page| page.borrow_mut().initializers.take())
}

/// Hooks registered so far, including those added by initializers.
pub(crate) fn take_registry() -> HookRegistry<HtmlFormElement> {
    PAGE.with(|page| page.borrow_mut().registry.take().unwrap_or_default())
}
