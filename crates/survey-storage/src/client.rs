use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build the process-wide S3 client from the ambient AWS configuration.
///
/// `AWS_ENDPOINT_URL` is honored by `aws-config` itself, which is how the
/// LocalStack environment points the client at its local endpoint; when an
/// endpoint override is present the client switches to path-style
/// addressing, which LocalStack requires.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let force_path_style = std::env::var("AWS_ENDPOINT_URL").is_ok();
    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(force_path_style)
        .build();

    Client::from_conf(s3_config)
}
