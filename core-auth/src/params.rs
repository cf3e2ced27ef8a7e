//! Query parameters of the provider redirect.

use url::form_urlencoded;

/// The two parameters the provider may append to the redirect URL.
///
/// Empty values are treated as absent, and every other parameter
/// (`state`, `scope`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    pub fn new(code: Option<&str>, error: Option<&str>) -> Self {
        Self {
            code: non_empty(code),
            error: non_empty(error),
        }
    }

    /// Parses a raw query string, with or without the leading `?`.
    ///
    /// When a key repeats, the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "code" if params.code.is_none() => params.code = non_empty(Some(value.as_ref())),
                "error" if params.error.is_none() => params.error = non_empty(Some(value.as_ref())),
                _ => {}
            }
        }

        params
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
