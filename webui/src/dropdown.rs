use std::rc::Rc;

use formkit::{DropdownSync, MenuItem, SelectionState, SelectionTarget};
use log::{debug, error};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event, HtmlInputElement};

use crate::config::PageConfig;
use crate::forms::BindError;
use crate::utils;

/// The trigger showing the label and the hidden input holding the value.
struct DomSelection {
    trigger: Element,
    input: Option<HtmlInputElement>,
}

impl SelectionTarget for DomSelection {
    fn apply(&self, state: &SelectionState) {
        self.trigger.set_text_content(Some(&state.label));
        if let (Some(input), Some(value)) = (&self.input, &state.value) {
            input.set_value(value);
        }
    }
}

pub fn setup_dropdowns(config: &PageConfig) -> usize {
    let menus = match gloo_utils::document().query_selector_all(&config.dropdown_selector) {
        Ok(menus) => utils::elements(menus),
        Err(e) => {
            error!("Invalid dropdown selector {}: {:?}", config.dropdown_selector, e);
            return 0;
        }
    };

    menus
        .into_iter()
        .filter(|menu| match setup_dropdown(menu, &config.item_selector) {
            Ok(()) => true,
            Err(e) => {
                error!("Could not set up dropdown: {}", e);
                false
            }
        })
        .count()
}

fn setup_dropdown(menu: &Element, item_selector: &str) -> Result<(), BindError> {
    let trigger = menu
        .previous_element_sibling()
        .ok_or_else(|| BindError::Markup {
            reason: "dropdown menu has no trigger before it".to_owned(),
        })?;
    let input = trigger
        .previous_element_sibling()
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if input.is_none() {
        debug!("Dropdown trigger has no value input before it");
    }

    let elements = menu
        .query_selector_all(item_selector)
        .map(utils::elements)
        .map_err(|e| BindError::Markup {
            reason: format!("invalid item selector {}: {:?}", item_selector, e),
        })?;
    let items = elements
        .iter()
        .map(|e| MenuItem {
            value: e.get_attribute("value"),
            text: e.text_content().unwrap_or_default(),
        })
        .collect();

    let dropdown = Rc::new(DropdownSync::new(DomSelection { trigger, input }, items));
    dropdown.initialize(menu.get_attribute("value").as_deref());

    for (index, element) in elements.iter().enumerate() {
        let on_click = Closure::<dyn FnMut(Event)>::new({
            let dropdown = dropdown.clone();
            move |_: Event| {
                dropdown.select(index);
            }
        });
        element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener {
                reason: format!("{:?}", e),
            })?;
        on_click.forget();
    }
    Ok(())
}
