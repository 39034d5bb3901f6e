// SPDX-License-Identifier: MPL-2.0
//! One-line status shown under the toolbar.
//!
//! The line stores an i18n key and its arguments rather than a rendered
//! string, so it follows language changes.

use crate::error::Error;
use crate::i18n::fluent::I18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    key: String,
    args: Vec<(&'static str, String)>,
    kind: StatusKind,
}

impl StatusLine {
    #[must_use]
    pub fn info(key: &str) -> Self {
        Self {
            key: key.to_string(),
            args: Vec::new(),
            kind: StatusKind::Info,
        }
    }

    #[must_use]
    pub fn info_with_arg(key: &str, name: &'static str, value: String) -> Self {
        Self {
            key: key.to_string(),
            args: vec![(name, value)],
            kind: StatusKind::Info,
        }
    }

    #[must_use]
    pub fn error(key: &str) -> Self {
        Self {
            key: key.to_string(),
            args: Vec::new(),
            kind: StatusKind::Error,
        }
    }

    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        Self {
            key: error.i18n_key().to_string(),
            args: vec![("details", error.details().to_string())],
            kind: StatusKind::Error,
        }
    }

    #[must_use]
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Renders the line in the current locale.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        let args: Vec<(&str, &str)> = self
            .args
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        i18n.tr_with_args(&self.key, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn error_status_includes_details() {
        let status = StatusLine::from_error(&Error::Image("bad header".into()));
        assert_eq!(status.kind(), StatusKind::Error);
        assert_eq!(
            status.text(&english()),
            "Could not decode the image: bad header"
        );
    }

    #[test]
    fn info_status_substitutes_argument() {
        let status = StatusLine::info_with_arg("status-image-loaded", "name", "alps.jpg".into());
        assert_eq!(status.kind(), StatusKind::Info);
        assert_eq!(status.text(&english()), "Showing alps.jpg");
    }

    #[test]
    fn status_follows_language() {
        let status = StatusLine::info("status-generated-image");
        let mut i18n = english();
        let english_text = status.text(&i18n);
        i18n.set_locale("fr".parse().unwrap());
        assert_ne!(status.text(&i18n), english_text);
    }
}
