#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	pointer_structural_match,
	private_in_public,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use axum::Extension;

mod config;
mod data;
mod error;
mod helpers;
mod routes;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("reading configuration: {0}")]
	Config(#[from] figment::Error),
	#[error("running server: {0}")]
	RunServer(#[from] hyper::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let config = config::config()?;

	init_logging(config.log_level);

	let items = Arc::new(data::Items::generate(config.item_count));
	let config = Arc::new(config);

	let mut app = routes::configure();
	app = app.layer(Extension(items));
	app = app.layer(Extension(Arc::clone(&config)));
	app = app.layer(tower_http::trace::TraceLayer::new_for_http());

	tracing::info!(address = %config.address, "listening");
	axum::Server::bind(&config.address)
		.serve(app.into_make_service())
		.await?;
	Ok(())
}

fn init_logging(log_level: tracing_subscriber::filter::LevelFilter) {
	use tracing_subscriber::layer::{Layer, SubscriberExt};
	use tracing_subscriber::util::SubscriberInitExt;

	let layer = tracing_subscriber::fmt::layer()
		.with_file(true)
		.with_line_number(true)
		.with_writer(std::io::stderr);

	tracing_subscriber::registry()
		.with(layer.with_filter(log_level))
		.init();
}
