//! List command report data structures.

use super::output::{Output, Report};

/// Structs found in the configured sources.
#[derive(Debug)]
pub struct ListReport {
    pub structs: Vec<StructInfo>,
}

#[derive(Debug)]
pub struct StructInfo {
    /// Qualified name, e.g. `models::Person`.
    pub name: String,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug)]
pub struct FieldInfo {
    pub name: String,
    /// Serialized name, `None` when the field is skipped.
    pub external_name: Option<String>,
    pub kind: String,
    pub flattened: bool,
}

impl FieldInfo {
    fn describe(&self) -> String {
        let mut line = format!("{}: {}", self.name, self.kind);
        match &self.external_name {
            None => line.push_str(" (skipped)"),
            Some(external) if *external != self.name => {
                line.push_str(&format!(" as '{}'", external))
            }
            Some(_) => {}
        }
        if self.flattened {
            line.push_str(" (flattened)");
        }
        line
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.structs.is_empty() {
            out.preformatted("No structs found.");
            return;
        }

        for (i, info) in self.structs.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&info.name);
            for field in &info.fields {
                out.list_item(&field.describe());
            }
        }
    }
}
