// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::home::Home;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/page-not-found.css" />

		<Router>
			<Routes fallback=MissingRoute>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

/// Router fallback. Sets the response status on the server before rendering the page.
#[component]
fn MissingRoute() -> impl IntoView {
	#[cfg(feature = "ssr")]
	if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
		response.set_status(axum::http::StatusCode::NOT_FOUND);
	}

	view! {
		<Title text="Page not found" />
		<NotFound />
	}
}
