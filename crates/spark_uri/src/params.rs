// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{SdkError, Uri};

/// Names a single field of [`UriParams`] for [`UriParams::pick`] and [`UriParams::omit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UriParamField {
    /// [`UriParams::folder`]
    Folder,
    /// [`UriParams::service`]
    Service,
    /// [`UriParams::version`]
    Version,
    /// [`UriParams::service_id`]
    ServiceId,
    /// [`UriParams::version_id`]
    VersionId,
    /// [`UriParams::proxy`]
    Proxy,
    /// [`UriParams::is_public`]
    Public,
}

impl UriParamField {
    /// Every field, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Folder,
        Self::Service,
        Self::Version,
        Self::ServiceId,
        Self::VersionId,
        Self::Proxy,
        Self::Public,
    ];

    /// The snake_case name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Service => "service",
            Self::Version => "version",
            Self::ServiceId => "service_id",
            Self::VersionId => "version_id",
            Self::Proxy => "proxy",
            Self::Public => "public",
        }
    }
}

impl Display for UriParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UriParamField {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SdkError::caused_by(format!("unknown uri parameter: {s}")))
    }
}

/// The structured components of a Spark resource URI.
///
/// A resource is addressed either by name (`folder` + `service`, optionally pinned to a
/// semantic `version`), by opaque identifier (`service_id` or `version_id`), or through a
/// custom `proxy` path. The `public` flag places the resource under the public namespace.
///
/// Every field is optional. The default value addresses no specific resource and is used
/// for base and public endpoints.
///
/// An empty string never counts as a value: the `with_*` setters store it as absent and the
/// accessors report it as `None`, so `with_folder("")` addresses nothing.
///
/// Values are immutable: the `with_*` methods consume `self` and return the updated value,
/// and [`pick`](Self::pick) / [`omit`](Self::omit) produce new instances.
///
/// # Examples
///
/// ```
/// use spark_uri::UriParams;
///
/// let params = UriParams::default()
///     .with_folder("my-folder")
///     .with_service("my-service")
///     .with_version("1.2.3");
///
/// assert_eq!(params.service_uri(), "my-folder/my-service[1.2.3]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct UriParams {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_present"))]
    folder: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_present"))]
    service: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_present"))]
    version: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_present"))]
    service_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_present"))]
    version_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_present"))]
    proxy: Option<String>,
    public: bool,
}

impl UriParams {
    /// Creates an empty set of parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the folder name.
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = present(folder.into());
        self
    }

    /// Sets the service name.
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = present(service.into());
        self
    }

    /// Sets the semantic version of the folder/service pair.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = present(version.into());
        self
    }

    /// Sets the opaque service identifier.
    #[must_use]
    pub fn with_service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = present(service_id.into());
        self
    }

    /// Sets the opaque version identifier.
    #[must_use]
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = present(version_id.into());
        self
    }

    /// Sets the custom proxy path.
    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = present(proxy.into());
        self
    }

    /// Places the resource in (or out of) the public namespace.
    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// The folder name.
    #[must_use]
    pub fn folder(&self) -> Option<&str> {
        non_empty(self.folder.as_deref())
    }

    /// The service name.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        non_empty(self.service.as_deref())
    }

    /// The semantic version of the folder/service pair.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    /// The opaque service identifier.
    #[must_use]
    pub fn service_id(&self) -> Option<&str> {
        non_empty(self.service_id.as_deref())
    }

    /// The opaque version identifier.
    #[must_use]
    pub fn version_id(&self) -> Option<&str> {
        non_empty(self.version_id.as_deref())
    }

    /// The custom proxy path.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        non_empty(self.proxy.as_deref())
    }

    /// Whether the resource lives in the public namespace.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.public
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.public
            && self.folder().is_none()
            && self.service().is_none()
            && self.version().is_none()
            && self.service_id().is_none()
            && self.version_id().is_none()
            && self.proxy().is_none()
    }

    /// Returns a copy holding only the given fields; every other field is reset.
    ///
    /// ```
    /// use spark_uri::{UriParamField, UriParams};
    ///
    /// let params = UriParams::new().with_folder("f").with_service("s").with_service_id("42");
    /// let named = params.pick([UriParamField::Folder, UriParamField::Service]);
    ///
    /// assert_eq!(named, UriParams::new().with_folder("f").with_service("s"));
    /// ```
    #[must_use]
    pub fn pick(&self, fields: impl IntoIterator<Item = UriParamField>) -> Self {
        let mut picked = Self::default();
        for field in fields {
            picked.copy_field(self, field);
        }
        picked
    }

    /// Returns a copy with the given fields reset; every other field is kept.
    #[must_use]
    pub fn omit(&self, fields: impl IntoIterator<Item = UriParamField>) -> Self {
        let mut kept = self.clone();
        for field in fields {
            kept.clear_field(field);
        }
        kept
    }

    /// Like [`pick`](Self::pick), naming fields by their snake_case names.
    ///
    /// Names that do not match any field are ignored.
    #[must_use]
    pub fn pick_names<I>(&self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.pick(parse_names(names))
    }

    /// Like [`omit`](Self::omit), naming fields by their snake_case names.
    ///
    /// Names that do not match any field are ignored.
    #[must_use]
    pub fn omit_names<I>(&self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.omit(parse_names(names))
    }

    /// The canonical short form of the addressed service.
    ///
    /// Named addressing wins over `service_id`, which wins over `version_id`:
    ///
    /// - `"{folder}/{service}"`, followed by `"[{version}]"` when a version is set
    /// - `"service/{service_id}"`
    /// - `"version/{version_id}"`
    /// - `""` when none of the above is available
    ///
    /// [`Uri::decode`] reverses this form, except for a folder literally named `service`,
    /// `version` or `proxy`: `service/x` reads back as the service identifier `x`. The short
    /// form has no way to escape those names; use [`Uri::of`] to address such folders.
    #[must_use]
    pub fn service_uri(&self) -> String {
        match (self.folder(), self.service(), self.service_id(), self.version_id()) {
            (Some(folder), Some(service), _, _) => match self.version() {
                Some(version) => format!("{folder}/{service}[{version}]"),
                None => format!("{folder}/{service}"),
            },
            (_, _, Some(service_id), _) => format!("service/{service_id}"),
            (_, _, None, Some(version_id)) => format!("version/{version_id}"),
            _ => String::new(),
        }
    }

    fn copy_field(&mut self, from: &Self, field: UriParamField) {
        match field {
            UriParamField::Folder => self.folder.clone_from(&from.folder),
            UriParamField::Service => self.service.clone_from(&from.service),
            UriParamField::Version => self.version.clone_from(&from.version),
            UriParamField::ServiceId => self.service_id.clone_from(&from.service_id),
            UriParamField::VersionId => self.version_id.clone_from(&from.version_id),
            UriParamField::Proxy => self.proxy.clone_from(&from.proxy),
            UriParamField::Public => self.public = from.public,
        }
    }

    fn clear_field(&mut self, field: UriParamField) {
        match field {
            UriParamField::Folder => self.folder = None,
            UriParamField::Service => self.service = None,
            UriParamField::Version => self.version = None,
            UriParamField::ServiceId => self.service_id = None,
            UriParamField::VersionId => self.version_id = None,
            UriParamField::Proxy => self.proxy = None,
            UriParamField::Public => self.public = false,
        }
    }
}

/// `None` for an empty string.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn present(value: String) -> Option<String> {
    Some(value).filter(|value| !value.is_empty())
}

#[cfg(feature = "serde")]
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.and_then(present))
}

fn parse_names<I>(names: I) -> impl Iterator<Item = UriParamField>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names.into_iter().filter_map(|name| name.as_ref().parse().ok())
}

impl Display for UriParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.service_uri())
    }
}

/// Parsing never fails, it follows the lenient rules of [`Uri::decode`].
impl FromStr for UriParams {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Uri::decode(s))
    }
}
