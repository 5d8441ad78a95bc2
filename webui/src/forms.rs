use std::rc::Rc;

use formkit::{
    Form, FormSubmitController, HookAttributes, HookRegistry, SubmitMethod, SubmitOptions,
};
use log::{error, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, HtmlFormElement};

use crate::config::PageConfig;
use crate::presenter::DomPresenter;
use crate::transport::FetchTransport;
use crate::utils;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("could not attach listener: {reason}")]
    Listener { reason: String },

    #[error("unexpected markup: {reason}")]
    Markup { reason: String },
}

/// Binds every form matching the configured selector. Returns how many were
/// bound; failures are logged and skipped.
pub fn bind_forms(config: &PageConfig, registry: &HookRegistry<HtmlFormElement>) -> usize {
    let forms = match gloo_utils::document().query_selector_all(&config.form_selector) {
        Ok(forms) => utils::elements(forms),
        Err(e) => {
            error!("Invalid form selector {}: {:?}", config.form_selector, e);
            return 0;
        }
    };

    let controller_config = Rc::new(config.controller.clone());
    let spinner_selector: Rc<str> = config.spinner_selector.as_str().into();
    forms
        .into_iter()
        .filter_map(|element| match element.dyn_into::<HtmlFormElement>() {
            Ok(form) => Some(form),
            Err(element) => {
                warn!("Skipping non-form element <{}>", element.tag_name());
                None
            }
        })
        .filter(|form| {
            match bind_form(form, &controller_config, &spinner_selector, registry) {
                Ok(()) => true,
                Err(e) => {
                    error!("Could not bind form {}: {}", form_name(form), e);
                    false
                }
            }
        })
        .count()
}

/// Attaches the submit listener. A form whose hooks do not resolve still gets
/// one, which refuses the submission instead of letting the browser post it.
fn bind_form(
    form: &HtmlFormElement,
    config: &Rc<formkit::ControllerConfig>,
    spinner_selector: &Rc<str>,
    registry: &HookRegistry<HtmlFormElement>,
) -> Result<(), BindError> {
    let attributes = HookAttributes::from_lookup(|name| form.get_attribute(name));
    let hooks = registry.resolve(&attributes, config.resolution).map(Rc::new);
    if let Err(e) = &hooks {
        error!("Form {} will refuse submissions: {}", form_name(form), e);
    }
    let descriptor = Rc::new(Form::new(form.clone(), attributes));

    let on_submit = Closure::<dyn FnMut(Event)>::new({
        let config = config.clone();
        let spinner_selector = spinner_selector.clone();
        move |event: Event| {
            event.prevent_default();

            let controller = FormSubmitController::new(
                config.clone(),
                FetchTransport,
                DomPresenter::new(descriptor.element.clone(), spinner_selector.clone()),
            );
            match &hooks {
                Ok(hooks) => {
                    let form = descriptor.clone();
                    let hooks = hooks.clone();
                    let options = submit_options(&form.element);
                    wasm_bindgen_futures::spawn_local(async move {
                        controller.handle_submit(&*form, &*hooks, options).await;
                    });
                }
                Err(e) => controller.refuse_submit(e),
            }
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener {
            reason: format!("{:?}", e),
        })?;
    on_submit.forget();
    Ok(())
}

fn submit_options(form: &HtmlFormElement) -> SubmitOptions {
    SubmitOptions {
        url: form.action(),
        method: SubmitMethod::parse(&form.method()),
    }
}

fn form_name(form: &HtmlFormElement) -> String {
    let id = form.id();
    if id.is_empty() {
        form.action()
    } else {
        format!("#{}", id)
    }
}
