// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use http::uri::InvalidUri;

/// Raised when a URI or a set of [`UriParams`](crate::UriParams) does not address a resource.
///
/// This is the only failure this crate produces. Building and decoding are total and never
/// fail, so callers that need structural guarantees must go through
/// [`Uri::validate`](crate::Uri::validate). Errors coming from the `http` crate, for
/// example while checking a base URL, are exposed via `source()` as `http::Error`.
#[ohno::error]
#[from(http::Error)]
pub struct SdkError;

/// Covers the two places that parse text with `http`: the base URL given to
/// [`UriOptions::from_uri_str`](crate::UriOptions::from_uri_str) and the assembled URL
/// in [`Uri::to_http_uri`](crate::Uri::to_http_uri).
impl From<InvalidUri> for SdkError {
    fn from(err: InvalidUri) -> Self {
        Self::from(http::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use ohno::ErrorExt;

    use super::SdkError;
    use crate::{Uri, UriOptions, UriParams};

    #[test]
    fn display_contains_cause() {
        let error = SdkError::caused_by("service uri is empty");
        let display = error.to_string();
        assert!(display.contains("service uri is empty"), "unexpected message: {display}");
        assert!(error.message().contains("service uri is empty"));
    }

    #[test]
    fn plain_cause_has_no_http_source() {
        let error = SdkError::caused_by("service uri is empty");
        assert!(error.find_source::<http::Error>().is_none());
    }

    #[test]
    fn from_invalid_uri_keeps_source() {
        let invalid = "http://[::1:invalid".parse::<http::Uri>().unwrap_err();
        let error = SdkError::from(invalid);

        assert!(!error.to_string().is_empty());
        assert!(error.source().is_some(), "should expose the http error as source");
    }

    #[test]
    fn unparseable_base_url_carries_http_error() {
        let error = UriOptions::from_uri_str("http://[::1:invalid").unwrap_err();
        assert!(error.find_source::<http::Error>().is_some());
    }

    #[test]
    fn unparseable_assembled_url_carries_http_error() {
        let params = UriParams::new().with_proxy("a b");
        let uri = Uri::of(Some(&params), &UriOptions::new("https://example.com"));

        let error = uri.to_http_uri().unwrap_err();
        assert!(error.find_source::<http::Error>().is_some());
    }
}
