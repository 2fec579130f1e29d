//! Display implementations for draft models.
//!
//! This module contains all Display trait implementations for the core
//! domain models, separated from the model definitions to maintain clean
//! separation of concerns.
//!
//! The Display implementations render a draft as a markdown outline:
//! header, build status, summary counts, then the nested
//! container/item/sub-item tree with priority icons. Useful for terminal
//! progress display while a build is running.

use std::fmt;

use crate::models::{Container, Draft, Item, Priority, SubItem};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            writeln!(f, "# (untitled draft)")?;
        } else {
            writeln!(f, "# {}", self.name)?;
        }
        writeln!(f)?;

        // Metadata section
        if self.is_building {
            writeln!(f, "- Status: building")?;
        } else if self.message.is_empty() {
            writeln!(f, "- Status: complete")?;
        } else {
            writeln!(f, "- Status: complete ({})", self.message)?;
        }
        writeln!(
            f,
            "- Containers: {} | Items: {} | Sub-items: {}",
            self.summary.container_count, self.summary.item_count, self.summary.sub_item_count
        )?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        for container in &self.containers {
            writeln!(f)?;
            write!(f, "{container}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.items.is_empty() {
            writeln!(f)?;
            for item in &self.items {
                write!(f, "{item}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.name)?;

        let mut annotations = Vec::new();
        if self.priority != Priority::None {
            annotations.push(self.priority.with_icon().to_string());
        }
        if let Some(minutes) = self.estimated_minutes {
            annotations.push(format!("~{minutes} min"));
        }
        if !annotations.is_empty() {
            write!(f, " ({})", annotations.join(", "))?;
        }
        writeln!(f)?;

        for sub_item in &self.sub_items {
            write!(f, "{sub_item}")?;
        }

        Ok(())
    }
}

impl fmt::Display for SubItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  - {}", self.name)?;
        if let Some(minutes) = self.estimated_minutes {
            write!(f, " (~{minutes} min)")?;
        }
        writeln!(f)
    }
}
