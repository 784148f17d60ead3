// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::extract::Request;
use axum::response::IntoResponse;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::convert::Infallible;
use tokio::net::TcpListener;
use tower::service_fn;
use tower_http::services::ServeDir;

/// Serves the site until the listener fails. Bind and serve errors are returned to the caller.
pub async fn run_server(config: &ConfigData, leptos_options: LeptosOptions) -> miette::Result<()> {
	let site_addr = &config.web.bind_addr;
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	let app = build_router(AppState { leptos_options });

	tracing::info!("Listening on http://{}", site_addr);
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

pub fn build_router(app_state: AppState) -> Router {
	let routes = generate_route_list(App);

	// Anything that isn't a route or a file under the site root renders the app, which lands on the
	// router's fallback page.
	let not_found = service_fn({
		let leptos_options = app_state.leptos_options.clone();
		move |request: Request| {
			let leptos_options = leptos_options.clone();
			async move {
				tracing::debug!(uri = %request.uri(), "No route or static file matched");
				let render = render_app_to_stream(move || shell(leptos_options.clone()));
				Ok::<_, Infallible>(render(request).await.into_response())
			}
		}
	});
	let static_files = ServeDir::new(&*app_state.leptos_options.site_root)
		.call_fallback_on_method_not_allowed(true)
		.not_found_service(not_found);

	Router::new()
		.leptos_routes(&app_state, routes, {
			let leptos_options = app_state.leptos_options.clone();
			move || shell(leptos_options.clone())
		})
		.fallback_service(static_files)
		.with_state(app_state)
}
