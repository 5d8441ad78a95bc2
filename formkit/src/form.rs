use serde::Serialize;

/// A form bound to the submit controller. `element` is whatever handle the
/// host uses for the underlying form (a DOM element in the browser).
#[derive(Debug, Clone)]
pub struct Form<E> {
    pub element: E,
    pub attributes: HookAttributes,
}

impl<E> Form<E> {
    pub fn new(element: E, attributes: HookAttributes) -> Self {
        Self {
            element,
            attributes,
        }
    }
}

/// Hook names declared on a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookAttributes {
    pub before_serialize: Option<String>,
    pub before_submit: Option<String>,
    pub on_error: Option<String>,
    pub success: Option<String>,
    pub fail: Option<String>,
    pub done: Option<String>,
}

impl HookAttributes {
    pub const BEFORE_SERIALIZE: &'static str = "beforeSerialize";
    pub const BEFORE_SUBMIT: &'static str = "beforeSubmit";
    pub const ON_ERROR: &'static str = "onError";
    pub const SUCCESS: &'static str = "success";
    pub const FAIL: &'static str = "fail";
    pub const DONE: &'static str = "done";

    /// Reads every hook attribute through `lookup`. Blank values count as
    /// undeclared.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        Self {
            before_serialize: read(Self::BEFORE_SERIALIZE),
            before_submit: read(Self::BEFORE_SUBMIT),
            on_error: read(Self::ON_ERROR),
            success: read(Self::SUCCESS),
            fail: read(Self::FAIL),
            done: read(Self::DONE),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmitMethod {
    #[default]
    Get,
    Post,
}

impl SubmitMethod {
    /// Anything other than `get` posts, mirroring how browsers treat `method`.
    pub fn parse(method: &str) -> Self {
        if method.trim().eq_ignore_ascii_case("get") || method.trim().is_empty() {
            SubmitMethod::Get
        } else {
            SubmitMethod::Post
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOptions {
    pub url: String,
    pub method: SubmitMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub options: SubmitOptions,
    pub fields: Vec<Field>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn reads_declared_attributes() {
        let attrs: HashMap<&str, &str> = [("success", "saved"), ("done", " cleanup "), ("fail", "")]
            .into_iter()
            .collect();
        let hooks = HookAttributes::from_lookup(|name| attrs.get(name).map(|v| v.to_string()));

        assert_eq!(hooks.success.as_deref(), Some("saved"));
        assert_eq!(hooks.done.as_deref(), Some("cleanup"));
        assert_eq!(hooks.fail, None, "blank attribute is undeclared");
        assert_eq!(hooks.before_serialize, None);
    }

    #[test]
    fn method_parsing() {
        assert_eq!(SubmitMethod::parse("GET"), SubmitMethod::Get);
        assert_eq!(SubmitMethod::parse(""), SubmitMethod::Get);
        assert_eq!(SubmitMethod::parse("post"), SubmitMethod::Post);
        assert_eq!(SubmitMethod::parse("dialog"), SubmitMethod::Post);
    }
}
