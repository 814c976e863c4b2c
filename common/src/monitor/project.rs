use std::collections::HashMap;

use super::endpoint::Endpoint;

/// Projects and their endpoints, both kept in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct ProjectSet {
    order: Vec<String>,
    projects: HashMap<String, Vec<Endpoint>>,
}

impl ProjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `endpoint` to `project`, registering the project on first use.
    pub fn push(&mut self, project: &str, endpoint: Endpoint) {
        if !self.projects.contains_key(project) {
            self.order.push(project.to_string());
        }
        self.projects
            .entry(project.to_string())
            .or_default()
            .push(endpoint);
    }

    pub fn get(&self, project: &str) -> Option<&[Endpoint]> {
        self.projects.get(project).map(Vec::as_slice)
    }

    /// Project names in the order they first appeared.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Endpoint])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.projects[name].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of endpoints across every project.
    pub fn endpoint_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
