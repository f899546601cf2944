// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display};

use crate::path::PathJoiner;
use crate::{DEFAULT_API_VERSION, SdkError, UriOptions, UriParams};

/// A fully assembled Spark API URL.
///
/// A `Uri` is produced by [`Uri::of`] from structured [`UriParams`] or by [`Uri::partial`]
/// from an already formatted resource path. The URL text is fixed once built.
///
/// # Examples
///
/// ```
/// use spark_uri::{Uri, UriOptions, UriParams};
///
/// let options = UriOptions::new("https://excel.test.coherent.global/tenant").endpoint("execute");
/// let params = UriParams::new().with_folder("f").with_service("s");
///
/// assert_eq!(
///     Uri::of(Some(&params), &options).value(),
///     "https://excel.test.coherent.global/tenant/api/v3/folders/f/services/s/execute"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    value: String,
}

/// The resource segment selected for a set of parameters.
///
/// The variants are listed in priority order; [`ResourceSegment::select`] returns the
/// first one the parameters satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResourceSegment<'a> {
    Proxy { path: &'a str, public: bool },
    Public,
    VersionId(&'a str),
    FolderService { folder: &'a str, service: &'a str },
    ServiceId(&'a str),
    None,
}

impl<'a> ResourceSegment<'a> {
    pub(crate) fn select(params: &'a UriParams) -> Self {
        let named = params.folder().zip(params.service());

        match (params.proxy(), params.is_public(), params.version_id(), named, params.service_id()) {
            (Some(path), public, _, _, _) => Self::Proxy { path, public },
            (None, true, _, _, _) => Self::Public,
            (None, false, Some(id), _, _) => Self::VersionId(id),
            (None, false, None, Some((folder, service)), _) => Self::FolderService { folder, service },
            (None, false, None, None, Some(id)) => Self::ServiceId(id),
            (None, false, None, None, None) => Self::None,
        }
    }

    fn push_onto(self, joiner: &mut PathJoiner) {
        match self {
            Self::Proxy { path, public } => {
                if public {
                    joiner.push("public");
                }
                joiner.push("proxy").push(path);
            }
            Self::Public => {
                joiner.push("public");
            }
            Self::VersionId(id) => {
                joiner.push("version").push(id);
            }
            Self::FolderService { folder, service } => {
                joiner.push("folders").push(folder).push("services").push(service);
            }
            Self::ServiceId(id) => {
                joiner.push("service").push(id);
            }
            Self::None => {}
        }
    }
}

impl Uri {
    /// Builds `{base_url}/{version}/{resource}[/{endpoint}]` from structured parameters.
    ///
    /// The resource segment is chosen by priority:
    ///
    /// 1. `proxy/{proxy}`, under `public/` when the parameters are public
    /// 2. `public`
    /// 3. `version/{version_id}`
    /// 4. `folders/{folder}/services/{service}`
    /// 5. `service/{service_id}`
    /// 6. nothing
    ///
    /// Empty segments and repeated slashes are dropped from the path, so the result never
    /// contains `//` after the scheme nor ends with `/`. `None` behaves like
    /// [`UriParams::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_uri::{Uri, UriOptions, UriParams};
    ///
    /// let options = UriOptions::new("https://example.com/tenant");
    ///
    /// let params = UriParams::new().with_proxy("/custom-endpoint///").with_public(true);
    /// assert_eq!(
    ///     Uri::of(Some(&params), &options).value(),
    ///     "https://example.com/tenant/api/v3/public/proxy/custom-endpoint"
    /// );
    ///
    /// let options = options.version("api/v4").endpoint("execute");
    /// assert_eq!(Uri::of(None, &options).value(), "https://example.com/tenant/api/v4/execute");
    /// ```
    #[must_use]
    pub fn of(params: Option<&UriParams>, options: &UriOptions) -> Self {
        let empty = UriParams::default();
        let params = params.unwrap_or(&empty);

        let mut joiner = PathJoiner::default();
        joiner.push(options.api_version());
        ResourceSegment::select(params).push_onto(&mut joiner);
        joiner.push_opt(options.get_endpoint());

        Self {
            value: joiner.finish_under(options.base_url()),
        }
    }

    /// Builds `{base_url}/api/v3/{resource_path}[/{endpoint}]` from a formatted resource path.
    ///
    /// The API version is always [`DEFAULT_API_VERSION`]; the version held by `options` is
    /// not consulted. Slashes in `resource_path` are normalized like in [`Uri::of`].
    ///
    /// # Examples
    ///
    /// ```
    /// use spark_uri::{Uri, UriOptions};
    ///
    /// let options = UriOptions::new("https://example.com/tenant").endpoint("execute");
    /// assert_eq!(
    ///     Uri::partial("/folders/f/services/s/", &options).value(),
    ///     "https://example.com/tenant/api/v3/folders/f/services/s/execute"
    /// );
    /// ```
    #[must_use]
    pub fn partial(resource_path: &str, options: &UriOptions) -> Self {
        let mut joiner = PathJoiner::default();
        joiner
            .push(DEFAULT_API_VERSION)
            .push(resource_path)
            .push_opt(options.get_endpoint());

        Self {
            value: joiner.finish_under(options.base_url()),
        }
    }

    /// The assembled URL.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the `Uri` and returns the assembled URL.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Converts the assembled URL into an [`http::Uri`] for use with HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns an [`SdkError`] if the URL is not a valid URI, which happens when the base URL
    /// or one of the parameters contains characters that are not allowed in a URI.
    pub fn to_http_uri(&self) -> Result<http::Uri, SdkError> {
        Ok(self.value.parse::<http::Uri>()?)
    }
}

impl Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.value
    }
}

impl TryFrom<Uri> for http::Uri {
    type Error = SdkError;

    fn try_from(uri: Uri) -> Result<Self, Self::Error> {
        uri.to_http_uri()
    }
}
