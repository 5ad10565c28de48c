//! Observable project store.
//!
//! The store is the single source of truth for projects. It is
//! constructed once in `main` and handed to the app by value; every
//! consumer sees it through the app, so "one store per process" holds
//! without a global. Observers receive a full snapshot copy after every
//! effective mutation, in registration order. There is no replay on
//! registration and no unsubscribe.

use crate::project::{Project, ProjectId, ProjectStatus};

/// Seam for store subscribers. Closures taking a snapshot implement it
/// directly.
#[cfg_attr(test, mockall::automock)]
pub trait StoreObserver {
    fn on_change(&mut self, projects: Vec<Project>);
}

impl<F> StoreObserver for F
where
    F: FnMut(Vec<Project>),
{
    fn on_change(&mut self, projects: Vec<Project>) {
        self(projects)
    }
}

#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Box<dyn StoreObserver>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new Active project and notify every observer.
    ///
    /// The caller is responsible for pre-validating the fields; the
    /// store accepts whatever it is given.
    pub fn add_project(&mut self, title: String, description: String, people: u8) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        tracing::debug!(%id, "project added");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Reassign a project's status. Unknown ids and moves to the current
    /// status are silent no-ops and fire no notification.
    pub fn move_project(&mut self, id: ProjectId, status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(%id, "move ignored: no such project");
            return;
        };
        if project.status == status {
            tracing::debug!(%id, "move ignored: already {}", status.label());
            return;
        }
        project.set_status(status);
        tracing::debug!(%id, "project moved to {}", status.label());
        self.notify();
    }

    /// Register an observer for all future snapshots. Past state is not
    /// replayed.
    pub fn add_listener(&mut self, observer: impl StoreObserver + 'static) {
        self.listeners.push(Box::new(observer));
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener.on_change(self.projects.clone());
        }
    }
}
