use serde::{Deserialize, Deserializer, Serialize};

pub const SUCCESS_CODE: i64 = 200;

/// Response body returned by every form endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Envelope {
    pub fn new(code: i64) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }

    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().filter(|m| !m.is_empty())
    }

    pub fn redirect(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCode {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawCode::deserialize(deserializer)? {
        RawCode::Int(code) => Some(code),
        RawCode::Float(code) if code.fract() == 0.0 => Some(code as i64),
        RawCode::Text(code) => code.trim().parse().ok(),
        RawCode::Float(_) | RawCode::Other(_) => None,
    })
}
