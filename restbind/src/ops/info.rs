//! Info operation - description statistics.

use std::path::Path;

use restbind_descriptor::ApiDescription;

use crate::reports::{GroupInfo, InfoReport, Stats};

/// Execute the info operation.
pub fn info(api: &ApiDescription, description_path: &Path) -> InfoReport {
    let groups = api.endpoint_groups();

    let stats = Stats {
        schemas: api.schemas.len(),
        enums: api.enums().len(),
        endpoints: api.endpoints.len(),
        groups: groups.len(),
        builders: api.endpoints.iter().filter(|e| e.is_model_builder()).count(),
    };

    InfoReport {
        description_path: std::fs::canonicalize(description_path)
            .unwrap_or_else(|_| description_path.to_path_buf()),
        stats,
        groups: groups
            .into_iter()
            .map(|(name, endpoints)| GroupInfo {
                name: name.to_string(),
                endpoints: endpoints.len(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use restbind_descriptor::{
        EndpointDescriptor, FieldDescriptor, SchemaDescriptor,
    };

    use super::*;

    #[test]
    fn test_info_counts() {
        let api = ApiDescription {
            schemas: vec![
                SchemaDescriptor::new("GBMParametersV3", "Iced").field(
                    FieldDescriptor::new("distribution", "enum")
                        .schema_name("DistributionFamily")
                        .values(["AUTO", "gaussian"]),
                ),
            ],
            endpoints: vec![
                EndpointDescriptor::new("POST", "/3/ModelBuilders/gbm", "train_gbm", "ModelBuilders")
                    .algo("gbm"),
                EndpointDescriptor::new("GET", "/3/ModelBuilders", "list", "ModelBuilders"),
                EndpointDescriptor::new("GET", "/3/About", "get", "About"),
            ],
        };

        let report = info(&api, Path::new("api.json"));

        assert_eq!(report.stats.schemas, 1);
        assert_eq!(report.stats.enums, 1);
        assert_eq!(report.stats.endpoints, 3);
        assert_eq!(report.stats.groups, 2);
        assert_eq!(report.stats.builders, 1);
        assert_eq!(report.groups[0].name, "ModelBuilders");
        assert_eq!(report.groups[0].endpoints, 2);
    }
}
