use std::rc::Rc;

use log::{debug, error};

use crate::config::ControllerConfig;
use crate::form::{Form, SubmitOptions, SubmitRequest};
use crate::hooks::{Dispatch, FormHooks, HookError, ResponseContext};
use crate::notification::{BusyState, NotificationKind, NotificationRequest, Presenter};
use crate::transport::{Transport, TransportError, TransportResponse};

/// Runs one form submission from hooks to notifications.
pub struct FormSubmitController<T, P> {
    config: Rc<ControllerConfig>,
    transport: T,
    presenter: P,
}

impl<T, P: Presenter> FormSubmitController<T, P> {
    pub fn new(config: Rc<ControllerConfig>, transport: T, presenter: P) -> Self {
        Self {
            config,
            transport,
            presenter,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub async fn handle_submit<E>(&self, form: &Form<E>, hooks: &FormHooks<E>, options: SubmitOptions)
    where
        T: Transport<E>,
    {
        if let Some(hook) = &hooks.before_serialize {
            if !hook(form, &options) {
                debug!("beforeSerialize hook returned false, continuing");
            }
        }

        let fields = self.transport.serialize(form);

        if let Some(hook) = &hooks.before_submit {
            if !hook(&fields, form, &options) {
                debug!("beforeSubmit hook returned false, continuing");
            }
        }

        let request = SubmitRequest { options, fields };
        self.presenter.set_busy(BusyState::Busy);
        let result = self.transport.submit(form, &request).await;

        match result {
            Ok(response) => self.handle_response(form, hooks, &response),
            Err(error) => self.handle_transport_error(hooks, &error),
        }

        self.presenter.set_busy(BusyState::Idle);
    }

    /// Stands in for `handle_submit` on a form whose declared hooks did not
    /// resolve: nothing is sent and the user gets the failure alert.
    pub fn refuse_submit(&self, error: &HookError) {
        error!("Refusing to submit form: {}", error);
        self.presenter.alert(&self.config.messages.failure_alert);
    }

    pub fn handle_transport_error<E>(&self, hooks: &FormHooks<E>, error: &TransportError) {
        debug!("Form submission failed: {}", error);
        match &hooks.on_error {
            Some(hook) => hook(error),
            None => self
                .presenter
                .alert(&self.config.transport_error_message(error.status())),
        }
    }

    pub fn handle_response<E>(&self, form: &Form<E>, hooks: &FormHooks<E>, response: &TransportResponse) {
        let envelope = &response.envelope;
        let is_success = envelope.is_success();
        let delay = self.config.redirect_delay(is_success);
        let context = ResponseContext {
            envelope,
            status_text: TransportResponse::STATUS_TEXT,
            transport: &response.info,
            form,
        };

        if is_success {
            match &hooks.success {
                Some(Dispatch::Hook { name, hook }) => {
                    debug!("Dispatching success hook `{}`", name);
                    hook(&context);
                }
                Some(Dispatch::Unresolved(_)) | None => self.presenter.notify(NotificationRequest::transient(
                    self.config.messages.success.clone(),
                    NotificationKind::Success,
                    self.config.success_notify(),
                )),
            }
        } else {
            match &hooks.fail {
                Some(dispatch) => self.dispatch(dispatch, NotificationKind::Warning, &context),
                None => self.presenter.notify(NotificationRequest::modal(
                    envelope
                        .message()
                        .unwrap_or(&self.config.messages.failure_modal),
                    NotificationKind::Warning,
                )),
            }
        }

        if let Some(dispatch) = &hooks.done {
            self.dispatch(dispatch, NotificationKind::Remind, &context);
        }

        if let Some(url) = envelope.redirect() {
            self.presenter.navigate_after(url, delay);
        } else if !is_success {
            self.presenter.alert(
                envelope
                    .message()
                    .unwrap_or(&self.config.messages.failure_alert),
            );
        }
    }

    fn dispatch<E>(&self, dispatch: &Dispatch<E>, kind: NotificationKind, context: &ResponseContext<'_, E>) {
        match dispatch {
            Dispatch::Hook { name, hook } => {
                debug!("Dispatching {} hook `{}`", kind.as_str(), name);
                hook(context);
            }
            Dispatch::Unresolved(name) => self.presenter.notify(NotificationRequest::transient(
                name.clone(),
                kind,
                self.config.fallback_notify(),
            )),
        }
    }
}
