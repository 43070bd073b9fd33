use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::ACCEPT_LANGUAGE, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub const SUPPORTED_LANGUAGES: [&str; 2] = ["ja", "en"];
pub const DEFAULT_LANGUAGE: &str = "ja";

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")
            .map(String::as_str)
            .unwrap_or(super::DEFAULT_LANGUAGE);

        Ok(rust_i18n::t!(value, locale = preferred_language).to_string())
    }
}

/// First supported language listed in `Accept-Language`.
pub fn preferred_language(headers: &HeaderMap) -> String {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| {
            v.split(',')
                .filter_map(|lang| {
                    let tag = lang.split(';').next()?.trim();
                    let iso = tag.split('-').next()?.to_lowercase();

                    SUPPORTED_LANGUAGES.contains(&iso.as_str()).then_some(iso)
                })
                .next()
        })
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
}

/// Locale key of a weekday, Monday being 0.
pub fn weekday_key(weekday: u8) -> &'static str {
    match weekday {
        0 => "weekday.monday",
        1 => "weekday.tuesday",
        2 => "weekday.wednesday",
        3 => "weekday.thursday",
        4 => "weekday.friday",
        5 => "weekday.saturday",
        _ => "weekday.sunday",
    }
}

pub struct Template {
    preferred_language: String,
}

impl Template {
    pub fn new(preferred_language: impl Into<String>) -> Self {
        Self {
            preferred_language: preferred_language.into(),
        }
    }

    /// Translates `key` in the request language.
    pub fn t(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.preferred_language.as_str()).to_string()
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.preferred_language.to_owned()),
        );

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }

    pub fn not_found(&self) -> Response {
        self.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
    }

    pub fn server_error(&self) -> Response {
        self.render_with_status(StatusCode::INTERNAL_SERVER_ERROR, ServerErrorTemplate)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template::new(preferred_language(&parts.headers)))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate;

/// Unwraps a query result inside a page handler, rendering the 500 page on
/// error. The `opt:` form also renders the 404 page on `None`.
#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        $crate::try_page_response!(sync: $result.await, $template)
    };

    (opt: $result:expr, $template:expr) => {
        $crate::try_page_response!(sync opt: $result.await, $template)
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!(err = %err, "page failed");

                return $template.server_error();
            }
        }
    };

    (sync opt: $result:expr, $template:expr) => {
        match $result {
            Ok(Some(r)) => r,
            Ok(_) => return $template.not_found(),
            Err(err) => {
                tracing::error!(err = %err, "page failed");

                return $template.server_error();
            }
        }
    };
}
