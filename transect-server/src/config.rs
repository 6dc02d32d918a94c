//! Server configuration

use clap::Parser;

/// TranSECT storage gateway
#[derive(Parser, Clone, Debug)]
#[command(name = "transect-server")]
#[command(about = "Storage gateway and gallery view server for the TranSECT visualizer")]
pub struct Config {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5001")]
    pub port: u16,

    /// S3/MinIO endpoint URL
    #[arg(long, default_value = "http://localhost:9000")]
    pub s3_endpoint: String,

    /// Bucket holding uploaded visualizations
    #[arg(long, default_value = "visualizations")]
    pub bucket: String,

    /// Access key ID
    #[arg(long, env = "S3_ACCESS_KEY_ID", default_value = "minioadmin")]
    pub access_key_id: String,

    /// Secret access key
    #[arg(long, env = "S3_SECRET_ACCESS_KEY", default_value = "minioadmin")]
    pub secret_access_key: String,

    /// AWS region (use "us-east-1" for MinIO)
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Allow plain-HTTP object storage (local MinIO)
    #[arg(long, default_value_t = true)]
    pub allow_http: bool,

    /// Base URL prepended to object paths to form public URLs
    #[arg(long, default_value = "http://localhost:9000/visualizations")]
    pub public_base_url: String,
}
