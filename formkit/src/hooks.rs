use std::{collections::HashMap, rc::Rc};

use formkit_model::Envelope;
use log::warn;

use crate::config::HookResolution;
use crate::form::{Field, Form, HookAttributes, SubmitOptions};
use crate::transport::{TransportError, TransportInfo};

/// Arguments handed to `success`, `fail` and `done` hooks.
pub struct ResponseContext<'a, E> {
    pub envelope: &'a Envelope,
    pub status_text: &'a str,
    pub transport: &'a TransportInfo,
    pub form: &'a Form<E>,
}

pub type ResponseHook<E> = Rc<dyn Fn(&ResponseContext<'_, E>)>;
/// The returned flag is advisory; a submission is never cancelled by it.
pub type BeforeSerializeHook<E> = Rc<dyn Fn(&Form<E>, &SubmitOptions) -> bool>;
pub type BeforeSubmitHook<E> = Rc<dyn Fn(&[Field], &Form<E>, &SubmitOptions) -> bool>;
pub type ErrorHook = Rc<dyn Fn(&TransportError)>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    #[error("hook `{name}` declared by attribute `{attribute}` is not registered")]
    Unresolved {
        attribute: &'static str,
        name: String,
    },
}

/// Named hooks forms may refer to.
pub struct HookRegistry<E> {
    response: HashMap<String, ResponseHook<E>>,
    before_serialize: HashMap<String, BeforeSerializeHook<E>>,
    before_submit: HashMap<String, BeforeSubmitHook<E>>,
    error: HashMap<String, ErrorHook>,
}

impl<E> Default for HookRegistry<E> {
    fn default() -> Self {
        Self {
            response: HashMap::new(),
            before_serialize: HashMap::new(),
            before_submit: HashMap::new(),
            error: HashMap::new(),
        }
    }
}

impl<E> HookRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_response(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&ResponseContext<'_, E>) + 'static,
    ) -> &mut Self {
        self.response.insert(name.into(), Rc::new(hook));
        self
    }

    pub fn register_before_serialize(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&Form<E>, &SubmitOptions) -> bool + 'static,
    ) -> &mut Self {
        self.before_serialize.insert(name.into(), Rc::new(hook));
        self
    }

    pub fn register_before_submit(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&[Field], &Form<E>, &SubmitOptions) -> bool + 'static,
    ) -> &mut Self {
        self.before_submit.insert(name.into(), Rc::new(hook));
        self
    }

    pub fn register_error(
        &mut self,
        name: impl Into<String>,
        hook: impl Fn(&TransportError) + 'static,
    ) -> &mut Self {
        self.error.insert(name.into(), Rc::new(hook));
        self
    }

    /// Resolves the hooks a form declares.
    pub fn resolve(
        &self,
        attributes: &HookAttributes,
        resolution: HookResolution,
    ) -> Result<FormHooks<E>, HookError> {
        Ok(FormHooks {
            before_serialize: lookup(
                &self.before_serialize,
                HookAttributes::BEFORE_SERIALIZE,
                attributes.before_serialize.as_deref(),
                resolution,
            )?,
            before_submit: lookup(
                &self.before_submit,
                HookAttributes::BEFORE_SUBMIT,
                attributes.before_submit.as_deref(),
                resolution,
            )?,
            on_error: lookup(
                &self.error,
                HookAttributes::ON_ERROR,
                attributes.on_error.as_deref(),
                resolution,
            )?,
            success: self.dispatch(HookAttributes::SUCCESS, attributes.success.as_deref(), resolution)?,
            fail: self.dispatch(HookAttributes::FAIL, attributes.fail.as_deref(), resolution)?,
            done: self.dispatch(HookAttributes::DONE, attributes.done.as_deref(), resolution)?,
        })
    }

    fn dispatch(
        &self,
        attribute: &'static str,
        name: Option<&str>,
        resolution: HookResolution,
    ) -> Result<Option<Dispatch<E>>, HookError> {
        let Some(name) = name else {
            return Ok(None);
        };
        Ok(Some(
            match lookup(&self.response, attribute, Some(name), resolution)? {
                Some(hook) => Dispatch::Hook {
                    name: name.to_owned(),
                    hook,
                },
                None => Dispatch::Unresolved(name.to_owned()),
            },
        ))
    }
}

fn lookup<H: Clone>(
    hooks: &HashMap<String, H>,
    attribute: &'static str,
    name: Option<&str>,
    resolution: HookResolution,
) -> Result<Option<H>, HookError> {
    let Some(name) = name else {
        return Ok(None);
    };
    match (hooks.get(name), resolution) {
        (Some(hook), _) => Ok(Some(hook.clone())),
        (None, HookResolution::Strict) => Err(HookError::Unresolved {
            attribute,
            name: name.to_owned(),
        }),
        (None, HookResolution::Lenient) => {
            warn!("Hook `{}` for `{}` is not registered, using defaults", name, attribute);
            Ok(None)
        }
    }
}

/// A `success`, `fail` or `done` declaration after resolution.
pub enum Dispatch<E> {
    Hook { name: String, hook: ResponseHook<E> },
    /// Only produced under lenient resolution.
    Unresolved(String),
}

/// Hooks resolved for one form.
pub struct FormHooks<E> {
    pub before_serialize: Option<BeforeSerializeHook<E>>,
    pub before_submit: Option<BeforeSubmitHook<E>>,
    pub on_error: Option<ErrorHook>,
    pub success: Option<Dispatch<E>>,
    pub fail: Option<Dispatch<E>>,
    pub done: Option<Dispatch<E>>,
}

impl<E> Default for FormHooks<E> {
    fn default() -> Self {
        Self {
            before_serialize: None,
            before_submit: None,
            on_error: None,
            success: None,
            fail: None,
            done: None,
        }
    }
}
