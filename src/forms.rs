// src/forms.rs
//
// Query-string and form-body helpers shared by the routes.

use std::collections::HashMap;
use std::str::FromStr;

pub type FormFields = HashMap<String, String>;

/// Decodes `a=1&b=two` (query string or urlencoded body). Later keys win.
pub fn parse_urlencoded(raw: &[u8]) -> FormFields {
    url::form_urlencoded::parse(raw).into_owned().collect()
}

pub fn parse_query(req: &astra::Request) -> FormFields {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

/// Trimmed, non-empty field value.
pub fn text(form: &FormFields, key: &str) -> Option<String> {
    form.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Blank or absent is `None`; present but unparsable names the field.
pub fn optional_number<T: FromStr>(form: &FormFields, key: &str) -> Result<Option<T>, String> {
    match text(form, key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("{key} must be a number, got {raw:?}")),
        None => Ok(None),
    }
}

pub fn number_or<T: FromStr>(form: &FormFields, key: &str, default: T) -> Result<T, String> {
    Ok(optional_number(form, key)?.unwrap_or(default))
}
