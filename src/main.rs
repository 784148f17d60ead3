// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use leptos::config::get_configuration;
	use miette::IntoDiagnostic;
	use page_not_found::config::parse_config;
	use page_not_found::web::server::run_server;

	tracing_subscriber::fmt::init();

	let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.kdl"));
	let config = parse_config(&config_path).await?;
	tracing::debug!(path = %config_path, "Loaded configuration");

	let leptos_options = get_configuration(None).into_diagnostic()?.leptos_options;
	run_server(&config, leptos_options).await?;

	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client bundle starts from `hydrate` in the library.
}
