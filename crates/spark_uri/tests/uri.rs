// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Building Spark API URLs from parameters and resource paths.

use rstest::rstest;
use spark_uri::{Uri, UriOptions, UriParams};

const BASE_URL: &str = "https://excel.test.coherent.global/tenant-name";

static_assertions::assert_impl_all!(Uri: Send, Sync, Clone, Eq, std::hash::Hash, std::fmt::Display);
static_assertions::assert_impl_all!(UriOptions: Send, Sync, Clone, Eq, Default);

#[rstest]
#[case::folder_service("folders/f/services/s", Some("execute"), "api/v3/folders/f/services/s/execute")]
#[case::proxy("proxy/custom-endpoint", None, "api/v3/proxy/custom-endpoint")]
#[case::extra_slashes("/folders/f/services/s/", Some("execute"), "api/v3/folders/f/services/s/execute")]
#[case::public_version("/public/version/123/", None, "api/v3/public/version/123")]
#[case::doubled_slashes("public//version///123", None, "api/v3/public/version/123")]
fn partial_resources(#[case] resource: &str, #[case] endpoint: Option<&str>, #[case] expected: &str) {
    let mut options = UriOptions::new(BASE_URL);
    if let Some(endpoint) = endpoint {
        options = options.endpoint(endpoint);
    }

    assert_eq!(Uri::partial(resource, &options).value(), format!("{BASE_URL}/{expected}"));
}

#[test]
fn named_service_with_endpoint() {
    let options = UriOptions::new(BASE_URL).endpoint("execute");
    let params = UriParams::new().with_folder("f").with_service("s");

    assert_eq!(
        Uri::of(Some(&params), &options).value(),
        format!("{BASE_URL}/api/v3/folders/f/services/s/execute")
    );
}

#[test]
fn no_params_with_custom_version() {
    let options = UriOptions::new(BASE_URL).version("api/v4").endpoint("execute");
    assert_eq!(Uri::of(None, &options).value(), format!("{BASE_URL}/api/v4/execute"));
}

#[test]
fn empty_params_match_none() {
    let options = UriOptions::new(BASE_URL).endpoint("execute");
    assert_eq!(Uri::of(Some(&UriParams::default()), &options), Uri::of(None, &options));
}

#[test]
fn public_namespace() {
    let options = UriOptions::new(BASE_URL).version("api/v4").endpoint("execute");
    let params = UriParams::new().with_public(true);

    assert_eq!(
        Uri::of(Some(&params), &options).value(),
        format!("{BASE_URL}/api/v4/public/execute")
    );
}

#[test]
fn version_id_wins_over_folder_and_service() {
    let options = UriOptions::new(BASE_URL).endpoint("execute");
    let params = UriParams::new()
        .with_folder("low")
        .with_service("priority")
        .with_version_id("high-priority");

    assert_eq!(
        Uri::of(Some(&params), &options).value(),
        format!("{BASE_URL}/api/v3/version/high-priority/execute")
    );
}

#[rstest]
#[case::version_id(UriParams::new().with_version_id("123"), "api/v3/version/123")]
#[case::service_id(UriParams::new().with_service_id("456"), "api/v3/service/456")]
#[case::proxy(UriParams::new().with_proxy("custom-endpoint"), "api/v3/proxy/custom-endpoint")]
#[case::public_proxy(
    UriParams::new().with_proxy("custom-endpoint").with_public(true),
    "api/v3/public/proxy/custom-endpoint"
)]
#[case::public_proxy_slashes(
    UriParams::new().with_proxy("/custom-endpoint///").with_public(true),
    "api/v3/public/proxy/custom-endpoint"
)]
#[case::public_wins_over_ids(
    UriParams::new().with_public(true).with_version_id("123").with_service_id("456"),
    "api/v3/public"
)]
#[case::service_id_when_name_incomplete(
    UriParams::new().with_service("s").with_service_id("456"),
    "api/v3/service/456"
)]
#[case::nothing_addressable(UriParams::new().with_folder("f").with_version("1.0"), "api/v3")]
#[case::empty_folder_uses_service_id(
    UriParams::new().with_folder("").with_service("s").with_service_id("456"),
    "api/v3/service/456"
)]
#[case::empty_service_uses_service_id(
    UriParams::new().with_folder("f").with_service("").with_service_id("456"),
    "api/v3/service/456"
)]
#[case::empty_proxy_under_public(UriParams::new().with_proxy("").with_public(true), "api/v3/public")]
#[case::empty_proxy(UriParams::new().with_proxy("").with_version_id("123"), "api/v3/version/123")]
#[case::empty_version_id(UriParams::new().with_version_id(""), "api/v3")]
#[case::empty_service_id(UriParams::new().with_service_id(""), "api/v3")]
fn resource_segments(#[case] params: UriParams, #[case] expected: &str) {
    let options = UriOptions::new(BASE_URL);
    assert_eq!(Uri::of(Some(&params), &options).value(), format!("{BASE_URL}/{expected}"));
}

#[test]
fn built_urls_have_no_empty_segments() {
    let options = UriOptions::new(format!("{BASE_URL}/")).version("//api//v3//").endpoint("/a//b/");
    let params = UriParams::new().with_proxy("//x//y//");
    let uri = Uri::of(Some(&params), &options);

    let path = uri.value().strip_prefix("https://").unwrap();
    assert!(!path.contains("//"), "unexpected empty segment in {uri}");
    assert!(!path.ends_with('/'), "unexpected trailing slash in {uri}");
    assert_eq!(uri.value(), format!("{BASE_URL}/api/v3/proxy/x/y/a/b"));
}

#[test]
fn checked_base_url_builds_http_uri() {
    let options = UriOptions::from_uri_str("https://excel.test.coherent.global/tenant-name/").unwrap();
    let params = UriParams::new().with_folder("f").with_service("s");

    let uri = Uri::of(Some(&params), &options.endpoint("execute")).to_http_uri().unwrap();
    assert_eq!(uri.scheme_str(), Some("https"));
    assert_eq!(uri.path(), "/tenant-name/api/v3/folders/f/services/s/execute");
}
