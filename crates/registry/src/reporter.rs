//! Human-readable registry report.
//!
//! Lists the admin handover state, the operators, every category and the
//! blacklist, annotating addresses the caller knows a label for.

use alloy_primitives::Address;
use whitelist_core::{AdminState, Category};

use crate::registry::AccessRegistry;

/// Rendered view of one registry.
#[derive(Debug)]
pub struct Report {
    pub admin: Address,
    pub admin_state: AdminState,
    pub sections: Vec<Section>,
}

/// One titled list of addresses.
#[derive(Debug)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

#[derive(Debug)]
pub struct Entry {
    pub address: Address,
    pub label: Option<String>,
}

impl Report {
    /// Build a report; `labeler` names addresses it recognizes.
    pub fn build<F>(registry: &AccessRegistry, labeler: F) -> Self
    where
        F: Fn(&Address) -> Option<String>,
    {
        let section = |title: &'static str, members: &[Address]| Section {
            title,
            entries: members
                .iter()
                .map(|address| Entry {
                    address: *address,
                    label: labeler(address),
                })
                .collect(),
        };

        let mut sections = Vec::with_capacity(5);
        sections.push(section("Operators", registry.available_operators()));
        for category in Category::ALL {
            sections.push(section(category.title(), registry.members(category)));
        }
        sections.push(section("Blacklist", registry.blacklist()));

        Self {
            admin: registry.admin(),
            admin_state: registry.admin_state(),
            sections,
        }
    }

    /// Render the report as plain text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024);

        out.push_str("=== Access Registry ===\n");
        out.push_str(&format!("Admin:          {}\n", self.admin));
        match self.admin_state {
            AdminState::Stable => out.push_str("Pending admin:  none\n"),
            AdminState::TransferPending(nominee) => {
                out.push_str(&format!("Pending admin:  {nominee} (awaiting accept)\n"))
            }
        }

        for section in &self.sections {
            out.push_str(&format!("\n{} ({})\n", section.title, section.entries.len()));
            if section.entries.is_empty() {
                out.push_str("  (empty)\n");
            }
            for (i, entry) in section.entries.iter().enumerate() {
                match &entry.label {
                    Some(label) => out.push_str(&format!(
                        "  {:>3}. {}  {}\n",
                        i + 1,
                        entry.address,
                        label
                    )),
                    None => out.push_str(&format!("  {:>3}. {}\n", i + 1, entry.address)),
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Address = Address::repeat_byte(0xAA);

    #[test]
    fn report_lists_sections_in_order_with_labels() {
        let router = Address::repeat_byte(0x01);
        let mut r = AccessRegistry::new(&[], ADMIN).unwrap();
        r.add_dexs(&ADMIN, &[router]).unwrap();
        r.transfer_admin(&ADMIN, Address::repeat_byte(0x02)).unwrap();

        let report = Report::build(&r, |a| (*a == router).then(|| "Test Router".to_string()));
        let titles: Vec<_> = report.sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Operators", "DEXs", "Cross chains", "Any routers", "Blacklist"]
        );

        let text = report.render();
        assert!(text.contains("Test Router"));
        assert!(text.contains("awaiting accept"));
        assert!(text.contains("DEXs (1)"));
        assert!(text.contains("Blacklist (0)"));
    }

    #[test]
    fn stable_report_renders_empty_sections_and_numbering() {
        let op = Address::repeat_byte(0x0B);
        let r = AccessRegistry::new(&[op], ADMIN).unwrap();

        let text = Report::build(&r, |_| None).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=== Access Registry ===");
        assert_eq!(lines[2], "Pending admin:  none");
        assert_eq!(lines[4], "Operators (1)");
        assert_eq!(lines[5], format!("    1. {op}"));
        assert_eq!(text.matches("  (empty)").count(), 4);
        assert!(text.ends_with('\n'));
    }
}
