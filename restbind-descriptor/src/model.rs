//! Typed descriptor records supplied by the API description.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Data flow direction of a schema field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Input,
    Output,
    Inout,
}

/// One field of a schema, or one parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDescriptor {
    /// Raw wire identifier (snake_case or ALL_CAPS).
    pub name: String,
    /// Raw type token, e.g. `int`, `Key<Frame>`, `enum`, `double[][]`, `Map<string,string>`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Nested schema or enum name, when the type refers to one.
    #[serde(default)]
    pub schema_name: Option<String>,
    /// Default value as sent by the server.
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub help: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub is_path_param: bool,
    /// The element type is itself a schema.
    #[serde(default)]
    pub is_schema: bool,
    /// Declared on a superclass and only restated for reference.
    #[serde(default)]
    pub is_inherited: bool,
    /// Members of the enum, for `enum` typed fields.
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

impl FieldDescriptor {
    /// Create an input field with no default value.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            schema_name: None,
            value: None,
            help: String::new(),
            direction: Direction::Input,
            is_path_param: false,
            is_schema: false,
            is_inherited: false,
            values: Vec::new(),
        }
    }

    pub fn schema_name(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn path_param(mut self) -> Self {
        self.is_path_param = true;
        self
    }

    pub fn nested_schema(mut self) -> Self {
        self.is_schema = true;
        self
    }

    pub fn inherited(mut self) -> Self {
        self.is_inherited = true;
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the raw type token denotes an enum.
    pub fn is_enum(&self) -> bool {
        self.ty.starts_with("enum")
    }

    /// Whether the raw type token denotes a map.
    pub fn is_map(&self) -> bool {
        self.ty.starts_with("Map")
    }

    /// Whether the raw type token denotes an object key reference.
    pub fn is_key(&self) -> bool {
        self.ty.starts_with("Key")
    }
}

/// A named data-class description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaDescriptor {
    pub name: String,
    /// Parent schema name, or the root sentinel when there is no parent.
    pub superclass: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
    pub fn new(name: impl Into<String>, superclass: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: superclass.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// One REST endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndpointDescriptor {
    pub http_method: String,
    /// Path template with `{var}` placeholders.
    pub url_pattern: String,
    pub handler_method: String,
    pub api_name: String,
    /// Proxy grouping key.
    pub class_name: String,
    pub input_schema: String,
    pub output_schema: String,
    /// Parameters of the call signature, in order.
    #[serde(default)]
    pub input_params: Vec<FieldDescriptor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Set on model-builder and grid endpoints.
    #[serde(default)]
    pub algo: Option<String>,
}

impl EndpointDescriptor {
    pub fn new(
        http_method: impl Into<String>,
        url_pattern: impl Into<String>,
        handler_method: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        let handler_method = handler_method.into();
        Self {
            http_method: http_method.into(),
            url_pattern: url_pattern.into(),
            api_name: handler_method.clone(),
            handler_method,
            class_name: class_name.into(),
            input_schema: String::new(),
            output_schema: String::new(),
            input_params: Vec::new(),
            summary: String::new(),
            algo: None,
        }
    }

    pub fn api_name(mut self, api_name: impl Into<String>) -> Self {
        self.api_name = api_name.into();
        self
    }

    pub fn schemas(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.input_schema = input.into();
        self.output_schema = output.into();
        self
    }

    pub fn param(mut self, param: FieldDescriptor) -> Self {
        self.input_params.push(param);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn algo(mut self, algo: impl Into<String>) -> Self {
        self.algo = Some(algo.into());
        self
    }

    pub fn is_model_builder(&self) -> bool {
        self.algo.is_some()
    }
}

/// A named enumerated type and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub members: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_field_defaults() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "num_rows",
            "type": "long",
        }))
        .unwrap();

        assert_eq!(field, FieldDescriptor::new("num_rows", "long"));
        assert_eq!(field.direction, Direction::Input);
    }

    #[test]
    fn test_field_nulls() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "model_id",
            "type": "Key<Model>",
            "schema_name": "ModelKeyV3",
            "value": null,
            "help": null,
            "direction": "INOUT",
            "values": null,
        }))
        .unwrap();

        assert_eq!(field.value, None);
        assert_eq!(field.help, "");
        assert_eq!(field.direction, Direction::Inout);
        assert!(field.is_key());
    }

    #[test]
    fn test_field_ignores_extra_metadata() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "name": "ntrees",
            "type": "int",
            "level": "critical",
            "is_gridable": true,
        }))
        .unwrap();
        assert_eq!(field.name, "ntrees");
    }

    #[test]
    fn test_type_predicates() {
        assert!(FieldDescriptor::new("a", "enum").is_enum());
        assert!(FieldDescriptor::new("a", "Map<string,string>").is_map());
        assert!(FieldDescriptor::new("a", "Key<Frame>[]").is_key());
        assert!(!FieldDescriptor::new("a", "int").is_enum());
    }

    #[test]
    fn test_endpoint_algo() {
        let endpoint: EndpointDescriptor = serde_json::from_value(json!({
            "http_method": "POST",
            "url_pattern": "/3/ModelBuilders/gbm",
            "handler_method": "trainGbm",
            "api_name": "train_gbm",
            "class_name": "ModelBuilders",
            "input_schema": "GBMParametersV3",
            "output_schema": "GBMV3",
            "algo": "gbm",
        }))
        .unwrap();

        assert!(endpoint.is_model_builder());
        assert!(endpoint.input_params.is_empty());
        assert_eq!(endpoint.summary, "");
    }
}
