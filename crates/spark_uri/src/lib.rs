// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! URI construction and decomposition for Coherent Spark REST API clients.
//!
//! Spark resources are addressed in several ways: by name (a folder and a service, optionally
//! pinned to a semantic version), by opaque service or version identifiers, or through custom
//! proxy endpoints, each of which may live in the public namespace. This crate turns those
//! addresses into canonical API URLs and parses their compact string form back.
//!
//! # Core Types
//!
//! - [`UriParams`] - Immutable structured address of a resource
//! - [`Uri`] - Builds full URLs from parameters and decodes compact string URIs
//! - [`UriOptions`] - Base URL, API version and endpoint used when building URLs
//! - [`SdkError`] - Raised by [`Uri::validate`] when input does not address a resource
//!
//! # Building URLs
//!
//! ```rust
//! use spark_uri::{Uri, UriOptions, UriParams};
//!
//! let options = UriOptions::new("https://excel.test.coherent.global/tenant").endpoint("execute");
//!
//! let params = UriParams::new().with_folder("f").with_service("s");
//! assert_eq!(
//!     Uri::of(Some(&params), &options).value(),
//!     "https://excel.test.coherent.global/tenant/api/v3/folders/f/services/s/execute"
//! );
//!
//! let params = UriParams::new().with_version_id("123");
//! assert_eq!(
//!     Uri::of(Some(&params), &options.without_endpoint()).value(),
//!     "https://excel.test.coherent.global/tenant/api/v3/version/123"
//! );
//! ```
//!
//! # Decoding and Validation
//!
//! Compact string URIs such as `folder/service[1.0]`, `service/{id}` or `version/{id}` are
//! decoded leniently: decoding never fails, and input that does not address anything yields
//! empty parameters. Validate before use when that matters.
//!
//! ```rust
//! use spark_uri::{Uri, UriParams};
//!
//! let params = Uri::decode("f/s[1.0]");
//! assert_eq!(params, UriParams::new().with_folder("f").with_service("s").with_version("1.0"));
//! assert_eq!(params.service_uri(), "f/s[1.0]");
//!
//! assert!(Uri::validate("f//").is_err());
//! ```
//!
//! # Features
//!
//! - `logs` - emits `tracing` events when decoding falls back to its lenient reading and
//!   when validation rejects input
//! - `serde` - `Serialize` / `Deserialize` for [`UriParams`] and [`UriOptions`]

mod decode;
mod error;
mod options;
mod params;
mod path;
#[cfg(test)]
mod testing;
mod uri;

pub use decode::ValidationInput;
pub use error::SdkError;
pub use options::{DEFAULT_API_VERSION, UriOptions};
pub use params::{UriParamField, UriParams};
pub use uri::Uri;
