// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlValue};
use miette::{Diagnostic, IntoDiagnostic};
use std::error::Error;
use std::fmt;
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> miette::Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_contents(&config_file_contents)
}

pub fn parse_config_contents(contents: &str) -> miette::Result<ConfigData> {
	let document: KdlDocument = contents.parse()?;

	let web = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or(ConfigError::MissingNode("web"))?;
	let bind_addr = match web.get_arg("bind_addr") {
		Some(KdlValue::String(addr)) => addr.clone(),
		Some(_) => return Err(ConfigError::NotAString("web.bind_addr").into()),
		None => return Err(ConfigError::MissingNode("web.bind_addr").into()),
	};

	Ok(ConfigData {
		web: WebConfig { bind_addr },
	})
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

#[derive(Debug, Diagnostic, Eq, PartialEq)]
pub enum ConfigError {
	MissingNode(&'static str),
	NotAString(&'static str),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingNode(path) => write!(f, "Missing required configuration value `{}`", path),
			Self::NotAString(path) => write!(f, "Configuration value `{}` must be a string", path),
		}
	}
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_bind_addr() {
		let config = parse_config_contents("web {\n\tbind_addr \"127.0.0.1:3000\"\n}\n").unwrap();
		assert_eq!(config.web.bind_addr, "127.0.0.1:3000");
	}

	#[test]
	fn missing_web_block() {
		let error = parse_config_contents("other \"value\"\n").unwrap_err();
		assert_eq!(
			error.downcast_ref::<ConfigError>(),
			Some(&ConfigError::MissingNode("web"))
		);
	}

	#[test]
	fn missing_bind_addr() {
		let error = parse_config_contents("web {\n}\n").unwrap_err();
		assert_eq!(
			error.downcast_ref::<ConfigError>(),
			Some(&ConfigError::MissingNode("web.bind_addr"))
		);
	}

	#[test]
	fn bind_addr_must_be_string() {
		let error = parse_config_contents("web {\n\tbind_addr 3000\n}\n").unwrap_err();
		assert_eq!(
			error.downcast_ref::<ConfigError>(),
			Some(&ConfigError::NotAString("web.bind_addr"))
		);
	}

	#[test]
	fn invalid_syntax() {
		let error = parse_config_contents("web {").unwrap_err();
		assert!(error.downcast_ref::<ConfigError>().is_none());
	}
}
