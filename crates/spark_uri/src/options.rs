// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use http::uri::Scheme;

use crate::SdkError;

/// The API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "api/v3";

/// Where and how [`Uri`](crate::Uri) builds its URLs.
///
/// Holds the base URL of the tenant (for example
/// `https://excel.my-env.coherent.global/my-tenant`), the API version path inserted after it,
/// and an optional endpoint appended to the resource path.
///
/// With the `serde` feature enabled the options can be read from configuration files;
/// missing fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use spark_uri::{DEFAULT_API_VERSION, UriOptions};
///
/// let options = UriOptions::new("https://excel.test.coherent.global/tenant").endpoint("execute");
///
/// assert_eq!(options.api_version(), DEFAULT_API_VERSION);
/// assert_eq!(options.get_endpoint(), Some("execute"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct UriOptions {
    base_url: String,
    version: String,
    endpoint: Option<String>,
}

impl UriOptions {
    /// Creates options for `base_url` with the default API version and no endpoint.
    ///
    /// The base URL is taken as is. Use [`from_uri_str`](Self::from_uri_str) to have it checked.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Creates options for a base URL that must be an absolute HTTP or HTTPS URL.
    ///
    /// # Errors
    ///
    /// Returns an [`SdkError`] if:
    ///
    /// - the text is not a valid URI,
    /// - the scheme is missing or is not HTTP or HTTPS,
    /// - the authority is missing,
    /// - the URL carries a query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_uri::UriOptions;
    ///
    /// let options = UriOptions::from_uri_str("https://excel.test.coherent.global/tenant/")?;
    /// assert_eq!(options.base_url(), "https://excel.test.coherent.global/tenant");
    ///
    /// assert!(UriOptions::from_uri_str("ftp://example.com").is_err());
    /// # Ok::<_, spark_uri::SdkError>(())
    /// ```
    pub fn from_uri_str(base_url: &str) -> Result<Self, SdkError> {
        let uri: http::Uri = base_url.parse()?;

        match uri.scheme() {
            Some(scheme) if *scheme == Scheme::HTTP || *scheme == Scheme::HTTPS => {}
            Some(scheme) => {
                return Err(SdkError::caused_by(format!(
                    "unsupported scheme: {scheme}, only HTTP and HTTPS schemes are supported"
                )));
            }
            None => return Err(SdkError::caused_by("the base url must have a scheme")),
        }

        if uri.authority().is_none() {
            return Err(SdkError::caused_by("the base url must have an authority"));
        }

        if uri.query().is_some() {
            return Err(SdkError::caused_by("the base url must not contain a query string"));
        }

        Ok(Self::new(base_url.trim_end_matches('/')))
    }

    /// Sets the API version path, such as `api/v4`.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the endpoint appended after the resource path.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Removes the endpoint.
    #[must_use]
    pub fn without_endpoint(mut self) -> Self {
        self.endpoint = None;
        self
    }

    /// The base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API version path.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.version
    }

    /// The endpoint, if any.
    #[must_use]
    pub fn get_endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl Default for UriOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            version: DEFAULT_API_VERSION.to_owned(),
            endpoint: None,
        }
    }
}
