use crate::project::{Project, ProjectStatus};

/// A filtered view over store snapshots: holds only the projects whose
/// status matches the list it backs. Registered as a store listener and
/// refreshed on every notification.
#[derive(Debug)]
pub struct ListProjection {
    status: ProjectStatus,
    projects: Vec<Project>,
}

impl ListProjection {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            projects: Vec::new(),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn refresh(&mut self, snapshot: Vec<Project>) {
        self.projects = snapshot
            .into_iter()
            .filter(|project| project.status == self.status)
            .collect();
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
