//! The API description dump: schemas and endpoints plus the derived views.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    EndpointDescriptor, EnumDescriptor, Error, Result, SchemaDescriptor, error::SourceContext,
};

/// A fully materialized API description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiDescription {
    #[serde(default)]
    pub schemas: Vec<SchemaDescriptor>,
    #[serde(default)]
    pub endpoints: Vec<EndpointDescriptor>,
}

impl ApiDescription {
    /// Read and parse a description dump from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a description dump, using `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e))
    }

    /// Enumerated types referenced by schema fields.
    ///
    /// Enum names come out sorted, and so do the members of each enum, so
    /// that the emitted declarations do not depend on descriptor order.
    pub fn enums(&self) -> Vec<EnumDescriptor> {
        let mut enums: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        let enum_fields = self
            .schemas
            .iter()
            .flat_map(|schema| &schema.fields)
            .filter(|field| field.is_enum());

        for field in enum_fields {
            let Some(name) = field.schema_name.as_deref() else {
                continue;
            };
            enums
                .entry(name)
                .or_default()
                .extend(field.values.iter().map(String::as_str));
        }

        enums
            .into_iter()
            .map(|(name, members)| EnumDescriptor {
                name: name.to_string(),
                members: members.into_iter().map(String::from).collect(),
            })
            .collect()
    }

    /// Endpoints grouped by proxy class name.
    ///
    /// Groups keep the order in which their class name first appears.
    pub fn endpoint_groups(&self) -> IndexMap<&str, Vec<&EndpointDescriptor>> {
        let mut groups: IndexMap<&str, Vec<&EndpointDescriptor>> = IndexMap::new();
        for endpoint in &self.endpoints {
            groups
                .entry(endpoint.class_name.as_str())
                .or_default()
                .push(endpoint);
        }
        groups
    }

    /// Schemas indexed by name.
    pub fn schemas_map(&self) -> IndexMap<&str, &SchemaDescriptor> {
        self.schemas
            .iter()
            .map(|schema| (schema.name.as_str(), schema))
            .collect()
    }
}

impl FromStr for ApiDescription {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "api.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldDescriptor;

    fn enum_field(name: &str, schema: &str, values: &[&str]) -> FieldDescriptor {
        FieldDescriptor::new(name, "enum")
            .schema_name(schema)
            .values(values.iter().copied())
    }

    #[test]
    fn test_parse_minimal() {
        let api: ApiDescription = r#"{"schemas": [], "endpoints": []}"#.parse().unwrap();
        assert!(api.schemas.is_empty());
        assert!(api.endpoints.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let result = "{\"schemas\": [ }".parse::<ApiDescription>();
        assert!(matches!(result.map_err(|e| *e), Err(Error::ParseJson { .. })));
    }

    #[test]
    fn test_open_missing_file() {
        let result = ApiDescription::open("/definitely/not/here.json");
        assert!(matches!(result.map_err(|e| *e), Err(Error::Io { .. })));
    }

    #[test]
    fn test_enums_are_merged_and_sorted() {
        let api = ApiDescription {
            schemas: vec![
                SchemaDescriptor::new("GBMParametersV3", "ModelParametersSchemaV3")
                    .field(enum_field("distribution", "GenmodelDistributionFamily", &[
                        "gaussian", "bernoulli",
                    ]))
                    .field(enum_field("category", "ModelCategory", &["Binomial"])),
                SchemaDescriptor::new("GLMParametersV3", "ModelParametersSchemaV3").field(
                    enum_field("distribution", "GenmodelDistributionFamily", &[
                        "poisson", "gaussian",
                    ]),
                ),
            ],
            endpoints: Vec::new(),
        };

        let enums = api.enums();

        assert_eq!(enums.len(), 2);
        assert_eq!(enums[0].name, "GenmodelDistributionFamily");
        assert_eq!(enums[0].members, vec!["bernoulli", "gaussian", "poisson"]);
        assert_eq!(enums[1].name, "ModelCategory");
    }

    #[test]
    fn test_enum_without_schema_name_is_skipped() {
        let api = ApiDescription {
            schemas: vec![
                SchemaDescriptor::new("S", "Iced")
                    .field(FieldDescriptor::new("x", "enum").values(["a"])),
            ],
            endpoints: Vec::new(),
        };
        assert!(api.enums().is_empty());
    }

    #[test]
    fn test_endpoint_groups_preserve_order() {
        let api = ApiDescription {
            schemas: Vec::new(),
            endpoints: vec![
                EndpointDescriptor::new("GET", "/3/Frames", "list", "Frames"),
                EndpointDescriptor::new("GET", "/3/Models", "list", "Models"),
                EndpointDescriptor::new("DELETE", "/3/Frames", "deleteAll", "Frames"),
            ],
        };

        let groups = api.endpoint_groups();
        let names: Vec<_> = groups.keys().copied().collect();

        assert_eq!(names, vec!["Frames", "Models"]);
        assert_eq!(groups["Frames"].len(), 2);
        assert_eq!(groups["Frames"][1].handler_method, "deleteAll");
    }

    #[test]
    fn test_schemas_map() {
        let api = ApiDescription {
            schemas: vec![SchemaDescriptor::new("FrameV3", "Iced")],
            endpoints: Vec::new(),
        };
        assert!(api.schemas_map().contains_key("FrameV3"));
    }
}
