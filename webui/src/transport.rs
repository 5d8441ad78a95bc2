use async_trait::async_trait;
use formkit::{
    Field, Form, SubmitMethod, SubmitRequest, Transport, TransportError, TransportInfo,
    TransportResponse,
};
use formkit_model::Envelope;
use gloo_net::http::Request;
use log::error;
use url::{form_urlencoded, Url};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

const MULTIPART: &str = "multipart/form-data";
const URLENCODED: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Submits forms with `fetch` and expects a JSON envelope back.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport<HtmlFormElement> for FetchTransport {
    fn serialize(&self, form: &Form<HtmlFormElement>) -> Vec<Field> {
        match FormData::new_with_form(&form.element) {
            Ok(data) => form_fields(&data),
            Err(e) => {
                error!("Could not read form data: {:?}", e);
                Vec::new()
            }
        }
    }

    async fn submit(
        &self,
        form: &Form<HtmlFormElement>,
        request: &SubmitRequest,
    ) -> Result<TransportResponse, TransportError> {
        let options = &request.options;
        let builder = match options.method {
            SubmitMethod::Get => Request::get(&query_url(&options.url, &request.fields)?),
            SubmitMethod::Post if form.element.enctype() == MULTIPART => {
                let data = FormData::new_with_form(&form.element).map_err(|e| {
                    TransportError::Network {
                        reason: format!("{:?}", e),
                    }
                })?;
                Request::post(&options.url).body(data)
            }
            SubmitMethod::Post => Request::post(&options.url)
                .header("Content-Type", URLENCODED)
                .body(urlencoded(&request.fields)),
        };

        let response = builder
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network {
                reason: e.to_string(),
            })?;

        let info = TransportInfo {
            status: response.status(),
            status_text: response.status_text(),
            url: Some(response.url()),
        };
        if !response.ok() {
            return Err(TransportError::Status {
                status: info.status,
                status_text: info.status_text,
            });
        }

        let envelope = response
            .json::<Envelope>()
            .await
            .map_err(|e| TransportError::InvalidResponse {
                status: info.status,
                reason: e.to_string(),
            })?;

        Ok(TransportResponse { envelope, info })
    }
}

/// Text entries of `data` in document order; file entries are skipped.
fn form_fields(data: &FormData) -> Vec<Field> {
    let Ok(Some(entries)) = js_sys::try_iter(data) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.unchecked_into::<js_sys::Array>())
        .filter_map(|pair| Some(Field::new(pair.get(0).as_string()?, pair.get(1).as_string()?)))
        .collect()
}

fn urlencoded(fields: &[Field]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|f| (&f.name, &f.value)))
        .finish()
}

/// `action` with `fields` appended to its query string.
fn query_url(action: &str, fields: &[Field]) -> Result<String, TransportError> {
    let mut url = Url::parse(action).map_err(|e| TransportError::Network {
        reason: format!("invalid form action {}: {}", action, e),
    })?;
    if !fields.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(fields.iter().map(|f| (&f.name, &f.value)));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<Field> {
        vec![Field::new("name", "Snow & ice"), Field::new("speed", "2")]
    }

    #[test]
    fn get_appends_fields_to_query() {
        assert_eq!(
            query_url("http://localhost/search?page=1", &fields()).unwrap(),
            "http://localhost/search?page=1&name=Snow+%26+ice&speed=2"
        );
        assert_eq!(
            query_url("http://localhost/search", &[]).unwrap(),
            "http://localhost/search"
        );
    }

    #[test]
    fn relative_action_is_rejected() {
        assert!(matches!(
            query_url("/search", &fields()),
            Err(TransportError::Network { .. })
        ));
    }

    #[test]
    fn post_body_is_urlencoded() {
        assert_eq!(urlencoded(&fields()), "name=Snow+%26+ice&speed=2");
    }
}
