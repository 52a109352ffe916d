mod api;
mod config;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;

use keygen_core::{Catalog, Producer};

use crate::api::AppState;
use crate::config::Config;

/// Builds the CORS policy: one allowed origin when configured, same-origin otherwise.
fn cors(origin: Option<&str>) -> Cors {
	match origin {
		Some(origin) => Cors::default()
			.allowed_origin(origin)
			.allowed_methods(vec!["GET"])
			.allow_any_header()
			.max_age(3600),
		None => Cors::default(),
	}
}

/// Main entry point for the server.
///
/// Builds the standard catalog once, wraps it in a secure producer shared
/// read-only by every worker, and starts an Actix-web HTTP server.
///
/// # Notes
/// - The bind address, public URL and CORS origin come from `Config`.
/// - Log level is controlled by `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();

	let state = web::Data::new(AppState {
		producer: Producer::secure(Catalog::standard()),
		base_url: config.base_url.clone(),
	});
	log::info!(
		"serving {} generators on {}:{}",
		state.producer.catalog().len(),
		config.host,
		config.port
	);

	let cors_origin = config.cors_origin.clone();
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors(cors_origin.as_deref()))
			.app_data(state.clone())
			.configure(api::configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
