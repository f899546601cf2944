// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;

use crate::path::segments;
use crate::{SdkError, Uri, UriParams};

/// Input accepted by [`Uri::validate`]: either a compact string URI or structured parameters.
#[derive(Debug, Clone)]
pub enum ValidationInput<'a> {
    /// A compact string URI such as `"folder/service[1.0]"`.
    Text(Cow<'a, str>),
    /// Already structured parameters.
    Params(&'a UriParams),
}

impl<'a> From<&'a str> for ValidationInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for ValidationInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for ValidationInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a UriParams> for ValidationInput<'a> {
    fn from(params: &'a UriParams) -> Self {
        Self::Params(params)
    }
}

impl Uri {
    /// Parses a compact string URI into [`UriParams`].
    ///
    /// Empty segments are skipped, so leading, trailing and repeated slashes do not matter.
    /// The recognized shapes are:
    ///
    /// | input                        | result                             |
    /// |------------------------------|------------------------------------|
    /// | `service/{id}`               | `service_id`                       |
    /// | `version/{id}`               | `version_id`                       |
    /// | `proxy/{path...}`            | `proxy`                            |
    /// | `folders/{f}/services/{s}`   | `folder` and `service`             |
    /// | `{f}/{s}`                    | `folder` and `service`             |
    ///
    /// The service segment may carry a version in brackets, as in `f/s[1.0]`; empty brackets
    /// mean no version.
    ///
    /// Decoding never fails. Input with fewer than two segments yields empty parameters, and
    /// any other shape falls back to reading the first two segments as folder and service.
    /// Use [`Uri::validate`] to reject input that does not address a resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_uri::{Uri, UriParams};
    ///
    /// assert_eq!(
    ///     Uri::decode("///f//s[1.0]//"),
    ///     UriParams::new().with_folder("f").with_service("s").with_version("1.0")
    /// );
    /// assert_eq!(Uri::decode("version/123"), UriParams::new().with_version_id("123"));
    /// assert_eq!(Uri::decode("//f/"), UriParams::default());
    /// ```
    #[must_use]
    pub fn decode(uri: &str) -> UriParams {
        let tokens: Vec<&str> = segments(uri).collect();

        match tokens.as_slice() {
            [] | [_] => UriParams::default(),
            ["service", id] => UriParams::new().with_service_id(*id),
            ["version", id] => UriParams::new().with_version_id(*id),
            ["proxy", rest @ ..] => UriParams::new().with_proxy(rest.join("/")),
            ["folders", folder, "services", service] | [folder, service] => named(folder, service),
            [folder, service, extra @ ..] => {
                log_lenient_decode(uri, extra.len());
                named(folder, service)
            }
        }
    }

    /// Checks that `input` addresses a resource.
    ///
    /// `input` is a `&str`, a borrowed or owned `String`, or `&UriParams`.
    ///
    /// # Errors
    ///
    /// Returns an [`SdkError`] if:
    ///
    /// - a string input decodes to empty parameters, for example `""`, `"///"` or `"f//"`,
    /// - parameters carry a `version` without both a `folder` and a `service`.
    ///
    /// Empty parameters are valid; they address the base endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_uri::{Uri, UriParams};
    ///
    /// assert!(Uri::validate("f/s").is_ok());
    /// assert!(Uri::validate("f//").is_err());
    /// assert!(Uri::validate(&UriParams::new().with_version("1.0")).is_err());
    /// ```
    pub fn validate<'a>(input: impl Into<ValidationInput<'a>>) -> Result<(), SdkError> {
        let result = match input.into() {
            ValidationInput::Text(text) => {
                if Self::decode(&text).is_empty() {
                    Err(SdkError::caused_by(format!("invalid service uri: `{text}`")))
                } else {
                    Ok(())
                }
            }
            ValidationInput::Params(params) => check_params(params),
        };

        if let Err(error) = &result {
            log_rejected(error);
        }

        result
    }
}

fn check_params(params: &UriParams) -> Result<(), SdkError> {
    match (params.version(), params.folder(), params.service()) {
        (Some(version), None, _) | (Some(version), _, None) => Err(SdkError::caused_by(format!(
            "version `{version}` requires both a folder and a service"
        ))),
        _ => Ok(()),
    }
}

fn named(folder: &str, service: &str) -> UriParams {
    let (service, version) = split_version(service);
    if service.is_empty() {
        return UriParams::default();
    }

    let params = UriParams::new().with_folder(folder).with_service(service);
    match version {
        Some(version) => params.with_version(version),
        None => params,
    }
}

/// Splits `name[version]` into its name and non-empty version.
fn split_version(service: &str) -> (&str, Option<&str>) {
    service
        .strip_suffix(']')
        .and_then(|rest| rest.split_once('['))
        .map_or((service, None), |(name, version)| {
            (name, Some(version).filter(|version| !version.is_empty()))
        })
}

#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when logs feature not used")
)]
fn log_lenient_decode(uri: &str, ignored: usize) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "spark_uri.decode.lenient",
        tracing::Level::DEBUG,
        uri.value = uri,
        uri.ignored_segments = ignored,
        "unrecognized uri shape, reading first two segments as folder and service"
    );
}

#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when logs feature not used")
)]
fn log_rejected(error: &SdkError) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "spark_uri.validate.rejected",
        tracing::Level::DEBUG,
        reason = %error,
    );
}
