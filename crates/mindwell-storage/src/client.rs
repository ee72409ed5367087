use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config.
///
/// `endpoint_url` points the client at an S3-compatible server (MinIO,
/// LocalStack); such servers generally need path-style addressing.
pub async fn build_client(endpoint_url: Option<&str>) -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    match endpoint_url {
        Some(url) => {
            let s3_config = aws_sdk_s3::config::Builder::from(&config)
                .endpoint_url(url)
                .force_path_style(true)
                .build();
            Client::from_conf(s3_config)
        }
        None => Client::new(&config),
    }
}
