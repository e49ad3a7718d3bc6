//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from description info.
#[derive(Debug)]
pub struct InfoReport {
    pub description_path: PathBuf,
    pub stats: Stats,
    /// Endpoint groups in first-appearance order.
    pub groups: Vec<GroupInfo>,
}

/// Description statistics.
#[derive(Debug, Default)]
pub struct Stats {
    pub schemas: usize,
    pub enums: usize,
    pub endpoints: usize,
    /// Endpoint groups, one proxy interface each.
    pub groups: usize,
    /// Model-builder and grid endpoints.
    pub builders: usize,
}

#[derive(Debug)]
pub struct GroupInfo {
    pub name: String,
    pub endpoints: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.preformatted(&format!("  Description {}", self.description_path.display()));
        out.newline();

        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        out.preformatted(&format!("  Schemas     {}", self.stats.schemas));
        out.preformatted(&format!("  Enums       {}", self.stats.enums));
        let builders = if self.stats.builders > 0 {
            format!(" ({} with helpers)", self.stats.builders)
        } else {
            String::new()
        };
        out.preformatted(&format!("  Endpoints   {}{}", self.stats.endpoints, builders));
        out.preformatted(&format!("  Groups      {}", self.stats.groups));

        if !self.groups.is_empty() {
            out.newline();
            out.preformatted("  Groups");
            out.preformatted("  ──────");
            let width = self.groups.iter().map(|g| g.name.len()).max().unwrap_or(0);
            for group in &self.groups {
                out.preformatted(&format!(
                    "  {:<width$}  {}",
                    group.name,
                    group.endpoints,
                    width = width
                ));
            }
        }
    }
}
