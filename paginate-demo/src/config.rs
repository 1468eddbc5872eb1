use std::net::SocketAddr;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize)]
pub struct Config {
	#[serde(default = "default_address")]
	pub address: SocketAddr,
	#[serde(
		default = "default_log_level",
		deserialize_with = "deserialize_level_filter"
	)]
	pub log_level: LevelFilter,
	#[serde(default = "default_page_size")]
	pub page_size: paginate::PageNum,
	#[serde(default = "default_item_count")]
	pub item_count: i64,
	#[serde(default)]
	pub pagination: paginate::Config,
}

fn deserialize_level_filter<'de, D: serde::de::Deserializer<'de>>(
	d: D,
) -> Result<LevelFilter, D::Error>
where
	D::Error: serde::de::Error,
{
	String::deserialize(d)?
		.parse()
		.map_err(serde::de::Error::custom)
}

fn default_address() -> SocketAddr {
	([127, 0, 0, 1], 8080).into()
}

const fn default_log_level() -> LevelFilter {
	LevelFilter::INFO
}

const fn default_page_size() -> paginate::PageNum {
	10
}

const fn default_item_count() -> i64 {
	47
}

pub fn config() -> Result<Config, figment::Error> {
	use figment::providers::Format as _;

	figment::Figment::new()
		.merge(figment::providers::Toml::file("paginate-demo.toml"))
		.merge(figment::providers::Env::prefixed("PAGINATE_DEMO_"))
		.extract()
}
