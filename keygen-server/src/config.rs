use clap::Parser;

/// Server configuration, read from flags or `KEYGEN_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "keygen-server", version, about = "HTTP API for random key generators")]
pub struct Config {
	/// Address to bind.
	#[arg(long, env = "KEYGEN_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind.
	#[arg(long, env = "KEYGEN_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Public site URL used for sitemap entries.
	#[arg(long, env = "KEYGEN_BASE_URL", default_value = "https://key-generator.com")]
	pub base_url: String,

	/// Browser origin allowed to call the API (CORS). Same-origin only when unset.
	#[arg(long, env = "KEYGEN_CORS_ORIGIN")]
	pub cors_origin: Option<String>,
}
