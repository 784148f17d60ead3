// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use leptos::prelude::*;

/// Shown for any location the router can't match.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main id="not_found_page">
			<div class="not_found_message">
				<h1>"Page not found"</h1>
				<p>"The page you're looking for doesn't exist."</p>
			</div>
		</main>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render() -> String {
		view! { <NotFound /> }.to_html()
	}

	// Apostrophes may come out entity-encoded depending on the renderer.
	fn unescape(html: &str) -> String {
		html.replace("&#x27;", "'").replace("&#39;", "'")
	}

	#[test]
	fn renders_heading_and_message() {
		let html = unescape(&render());
		assert!(html.contains("<h1>Page not found</h1>"));
		assert!(html.contains("<p>The page you're looking for doesn't exist.</p>"));
	}

	#[test]
	fn message_is_nested_in_container() {
		let html = unescape(&render());
		let container = html.find("<main id=\"not_found_page\">").unwrap();
		let message = html.find("<div class=\"not_found_message\">").unwrap();
		let heading = html.find("<h1>").unwrap();
		let body = html.find("<p>").unwrap();
		let message_end = html.find("</div>").unwrap();
		let container_end = html.rfind("</main>").unwrap();

		assert!(container < message);
		assert!(message < heading);
		assert!(heading < body);
		assert!(body < message_end);
		assert!(message_end < container_end);
	}

	#[test]
	fn output_is_identical_across_renders() {
		let first = render();
		for _ in 0..5 {
			assert_eq!(render(), first);
		}
	}
}
