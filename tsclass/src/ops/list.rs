//! List operation - show the structs found in the sources.

use super::Project;
use crate::reports::{FieldInfo, ListReport, StructInfo};

/// Execute the list operation.
pub fn list(project: &Project) -> ListReport {
    let structs = project
        .catalog()
        .iter()
        .map(|decl| StructInfo {
            name: decl.ty.qualified().to_string(),
            fields: decl
                .fields
                .iter()
                .map(|field| FieldInfo {
                    name: field.name.clone(),
                    external_name: (!field.is_suppressed())
                        .then(|| field.external_name.clone()),
                    kind: field.kind.to_string(),
                    flattened: field.embedded,
                })
                .collect(),
        })
        .collect();

    ListReport { structs }
}
