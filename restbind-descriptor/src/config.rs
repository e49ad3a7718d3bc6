//! Generator configuration (`restbind.toml`).

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root of `restbind.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub java: JavaConfig,
}

/// Options for the Java target.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JavaConfig {
    /// Package of the schema and enum classes.
    pub schema_package: String,
    /// Package of the Retrofit proxy interfaces.
    pub proxy_package: String,
    /// Package of the client facade.
    pub client_package: String,
    /// Class name of the client facade.
    pub client_class: String,
    /// Emit the client facade.
    pub emit_client: bool,
    /// Default server URL baked into the client facade.
    pub base_url: String,
    /// Default HTTP timeout of the client facade, in seconds.
    pub timeout_secs: u32,
    /// Superclass sentinel meaning "no parent", also the generic base element type.
    pub root_schema: String,
    /// Target type of every `Key<...>` reference.
    pub key_type: String,
    /// Element type of the flattened `parameters` field of model builders.
    pub model_parameter_schema: String,
    /// Extra line in the header of every generated file.
    pub notice: Option<String>,
    /// Overrides for primitive type mappings (raw token -> Java type).
    pub types: IndexMap<String, String>,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            schema_package: "water.bindings.pojos".to_string(),
            proxy_package: "water.bindings.proxies.retrofit".to_string(),
            client_package: "water.bindings".to_string(),
            client_class: "H2oApi".to_string(),
            emit_client: false,
            base_url: "http://localhost:54321/".to_string(),
            timeout_secs: 60,
            root_schema: "Iced".to_string(),
            key_type: "KeyV3".to_string(),
            model_parameter_schema: "ModelParameterSchemaV3".to_string(),
            notice: None,
            types: IndexMap::new(),
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Read a config file, falling back to the defaults when it does not exist.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a config, using `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let java = &self.java;
        for (key, package) in [
            ("schema_package", &java.schema_package),
            ("proxy_package", &java.proxy_package),
            ("client_package", &java.client_package),
        ] {
            if !package.split('.').all(is_java_identifier) {
                return Err(ctx.validation_error_near(
                    format!("`{key}` is not a valid Java package name: '{package}'"),
                    package,
                ));
            }
        }
        for (key, name) in [
            ("client_class", &java.client_class),
            ("key_type", &java.key_type),
            ("model_parameter_schema", &java.model_parameter_schema),
        ] {
            if !is_java_identifier(name) {
                return Err(ctx.validation_error_near(
                    format!("`{key}` is not a valid Java identifier: '{name}'"),
                    name,
                ));
            }
        }
        if java.base_url.is_empty() {
            return Err(ctx.validation_error("`base_url` must not be empty"));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "restbind.toml")
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
