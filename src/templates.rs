//! Page templates rendered via `minijinja`.
//!
//! Templates are compiled into the binary from the `templates/` directory
//! and loaded into one [`Environment`] at startup. Every template name ends
//! in `.html`, so values are HTML-escaped on output.

use std::fmt;

use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::AppError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("_tweet.html", include_str!("../templates/_tweet.html")),
    ("users.html", include_str!("../templates/users.html")),
    ("user_show.html", include_str!("../templates/user_show.html")),
    ("tweets.html", include_str!("../templates/tweets.html")),
    ("tweet_show.html", include_str!("../templates/tweet_show.html")),
    ("error.html", include_str!("../templates/error.html")),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
];

/// The loaded page templates.
pub struct Templates {
    env: Environment<'static>,
}

impl fmt::Debug for Templates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Templates")
            .field("count", &TEMPLATES.len())
            .finish_non_exhaustive()
    }
}

impl Templates {
    /// Parses every page template. Fails on the first syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders template `name` with `ctx` as its context.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    pub fn page<S: Serialize>(&self, name: &str, ctx: S) -> Result<Html<String>, AppError> {
        self.render(name, ctx).map(Html)
    }

    /// Turns a page result into a response, rendering failures with
    /// `error.html` under the error's status.
    pub fn respond(&self, page: Result<Html<String>, AppError>) -> Response {
        match page {
            Ok(page) => page.into_response(),
            Err(err) => self.error_page(err),
        }
    }

    fn error_page(&self, err: AppError) -> Response {
        let (status, _, details) = err.parts();
        let reason = status.canonical_reason().unwrap_or("Error");

        let ctx = context! {
            status => status.as_u16(),
            reason => reason,
            details => details,
        };

        match self.render("error.html", ctx) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Error page failed to render");
                (status, reason).into_response()
            }
        }
    }
}
