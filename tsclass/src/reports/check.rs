//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a conversion without writing.
#[derive(Debug)]
pub struct CheckReport {
    /// Source files that were parsed.
    pub sources: Vec<PathBuf>,
    /// Number of structs found in the sources.
    pub structs: usize,
    /// Class names in output order.
    pub classes: Vec<String>,
    /// File a `generate` run would write.
    pub output: PathBuf,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Sources", &self.sources.len().to_string());
        out.key_value("Structs", &self.structs.to_string());
        out.newline();

        out.section(&format!("Classes ({})", self.classes.len()));
        for class in &self.classes {
            out.list_item(class);
        }
        out.newline();

        out.preformatted(&format!(
            "✓ {} classes convert cleanly into {}",
            self.classes.len(),
            self.output.display()
        ));
    }
}
