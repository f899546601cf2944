// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builds a few Spark API URLs and decodes a compact service URI.

use spark_uri::{SdkError, Uri, UriOptions, UriParams};

fn main() -> Result<(), SdkError> {
    let options = UriOptions::from_uri_str("https://excel.test.coherent.global/my-tenant")?.endpoint("execute");

    let params = Uri::decode("my-folder/my-service[1.0.0]");
    Uri::validate(&params)?;
    println!("{}", Uri::of(Some(&params), &options));

    let by_id = UriParams::new().with_version_id("8f0a4c1e");
    println!("{}", Uri::of(Some(&by_id), &options));

    let proxy = UriParams::new().with_proxy("/my/custom/endpoint/").with_public(true);
    println!("{}", Uri::of(Some(&proxy), &options.without_endpoint()));

    Ok(())
}
