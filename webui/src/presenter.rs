use std::{rc::Rc, time::Duration};

use formkit::{BusyState, NotificationRequest, Presenter};
use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::{dialog, utils};

/// Presents one form's submission in the document.
pub struct DomPresenter {
    form: HtmlFormElement,
    spinner_selector: Rc<str>,
}

impl DomPresenter {
    pub fn new(form: HtmlFormElement, spinner_selector: Rc<str>) -> Self {
        Self {
            form,
            spinner_selector,
        }
    }
}

fn spinner_display(state: BusyState) -> &'static str {
    match state {
        BusyState::Busy => "inline-block",
        BusyState::Idle => "none",
    }
}

impl Presenter for DomPresenter {
    fn set_busy(&self, state: BusyState) {
        let spinners = match self.form.query_selector_all(&self.spinner_selector) {
            Ok(spinners) => utils::elements(spinners),
            Err(e) => {
                error!("Invalid spinner selector {}: {:?}", self.spinner_selector, e);
                return;
            }
        };

        for spinner in spinners {
            if let Some(control) = spinner.parent_element() {
                let result = match state {
                    BusyState::Busy => control.set_attribute("disabled", "disabled"),
                    BusyState::Idle => control.remove_attribute("disabled"),
                };
                if let Err(e) = result {
                    error!("Could not toggle submit control: {:?}", e);
                }
            }

            if let Some(spinner) = spinner.dyn_ref::<HtmlElement>() {
                if let Err(e) = spinner.style().set_property("display", spinner_display(state)) {
                    error!("Could not toggle spinner: {:?}", e);
                }
            }
        }
    }

    fn notify(&self, request: NotificationRequest) {
        dialog::show(request);
    }

    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            error!("Could not show alert: {:?}", e);
        }
    }

    fn navigate_after(&self, url: &str, delay: Duration) {
        let url = url.to_owned();
        Timeout::new(utils::millis(delay), move || {
            if let Err(e) = gloo_utils::window().location().set_href(&url) {
                error!("Could not navigate to {}: {:?}", url, e);
            }
        })
        .forget();
    }
}
