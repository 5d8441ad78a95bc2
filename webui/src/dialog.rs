use std::{cell::RefCell, rc::Rc};

use formkit::{NotificationKind, NotificationRequest};
use gloo_timers::callback::Timeout;
use log::error;
use web_sys::{Element, HtmlDialogElement};
use yew::{classes, html, AppHandle, Callback, Component, Context, Html, NodeRef, Properties};

use crate::utils;

#[derive(Clone, PartialEq, Properties)]
pub struct Props {
    pub message: String,
    pub kind: NotificationKind,
    pub show_actions: bool,
    /// Emitted once the dialog has closed, by its button or by Escape.
    pub on_close: Callback<()>,
}

#[derive(Default)]
pub struct NotificationDialog {
    modal_ref: NodeRef,
}

pub enum Msg {
    Close,
    Closed,
}

impl Component for NotificationDialog {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Default::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                if let Some(modal) = self.modal_ref.cast::<HtmlDialogElement>() {
                    modal.close();
                }
                false
            }
            Msg::Closed => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <dialog
                class={classes!("notification", props.kind.as_str())}
                ref={self.modal_ref.clone()}
                onclose={ctx.link().callback(|_| Msg::Closed)}>
                <p>{ &props.message }</p>
                {
                    if props.show_actions {
                        html! { <button onclick={ctx.link().callback(|_| Msg::Close)}>{ "OK" }</button> }
                    } else {
                        html! {}
                    }
                }
            </dialog>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(modal) = self.modal_ref.cast::<HtmlDialogElement>() {
            if let Err(e) = modal.show_modal() {
                error!("Could not open notification: {:?}", e);
            }
        }
    }
}

struct MountedDialog {
    handle: AppHandle<NotificationDialog>,
    host: Element,
}

impl MountedDialog {
    fn remove(self) {
        self.handle.destroy();
        self.host.remove();
    }
}

/// Holds a value until the first of several paths takes it.
struct Teardown<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for Teardown<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Teardown<T> {
    fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    fn arm(&self, value: T) {
        *self.slot.borrow_mut() = Some(value);
    }

    fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }
}

/// Renders `request` into a fresh element at the end of the body. The dialog
/// is torn down when it closes, or after `dismiss_after` when transient.
pub fn show(request: NotificationRequest) {
    let host = match gloo_utils::document().create_element("div") {
        Ok(host) => host,
        Err(e) => {
            error!("Could not create notification host: {:?}", e);
            return;
        }
    };
    if let Err(e) = gloo_utils::body().append_child(&host) {
        error!("Could not attach notification host: {:?}", e);
        return;
    }

    let teardown = Teardown::<MountedDialog>::new();
    let dismiss = {
        let teardown = teardown.clone();
        move || {
            if let Some(dialog) = teardown.take() {
                dialog.remove();
            }
        }
    };

    let props = Props {
        message: request.message,
        kind: request.kind,
        show_actions: request.show_actions,
        on_close: Callback::from({
            let dismiss = dismiss.clone();
            move |_| dismiss()
        }),
    };
    teardown.arm(MountedDialog {
        handle: yew::Renderer::<NotificationDialog>::with_root_and_props(host.clone(), props).render(),
        host,
    });

    if let Some(after) = request.dismiss_after {
        Timeout::new(utils::millis(after), dismiss).forget();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Counted(Rc<Cell<usize>>);

    impl Counted {
        fn remove(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn teardown_runs_once_across_paths() {
        let removed = Rc::new(Cell::new(0));
        let teardown = Teardown::new();
        let on_close = teardown.clone();
        let on_timeout = teardown.clone();

        assert!(teardown.take().is_none(), "nothing mounted yet");
        teardown.arm(Counted(removed.clone()));

        for path in [&on_close, &on_timeout, &on_close] {
            if let Some(dialog) = path.take() {
                dialog.remove();
            }
        }

        assert_eq!(removed.get(), 1);
    }
}
