//! Navigation state: which top-level view is shown and which project is selected.
//!
//! DESIGN
//! ======
//! The root component owns a single `RwSignal<NavState>` and hands children
//! read-only values plus `Callback` setters. Views never touch the signal
//! directly, so every page transition goes through `navigate` or
//! `navigate_to_project`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::{Deserialize, Serialize};

use crate::data::projects::DEFAULT_PROJECT_ID;

/// Top-level views reachable from the navigation controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Expertise,
    Work,
    Project,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Expertise, Page::Work, Page::Project, Page::Contact];

    /// Stable lowercase identifier, used for logging and `data-page` markers.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Expertise => "expertise",
            Page::Work => "work",
            Page::Project => "project",
            Page::Contact => "contact",
        }
    }
}

/// Identity of the mounted view. A change of key remounts the view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Home,
    Expertise,
    Work,
    Project(String),
    Contact,
}

impl ViewKey {
    pub fn page(&self) -> Page {
        match self {
            ViewKey::Home => Page::Home,
            ViewKey::Expertise => Page::Expertise,
            ViewKey::Work => Page::Work,
            ViewKey::Project(_) => Page::Project,
            ViewKey::Contact => Page::Contact,
        }
    }
}

/// Current page plus the selected project id.
///
/// `project_id` is kept even while another page is shown so that returning to
/// `Page::Project` (e.g. from the footer) shows the last selected project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub project_id: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self { page: Page::Home, project_id: DEFAULT_PROJECT_ID.to_owned() }
    }
}

impl NavState {
    /// Switch to `target`. Any page is reachable from any other.
    pub fn navigate(&mut self, target: Page) {
        self.page = target;
    }

    /// Select a project and show its detail view in one step.
    ///
    /// The id is not validated here; the detail view resolves it and falls
    /// back to the default project.
    pub fn navigate_to_project(&mut self, id: impl Into<String>) {
        self.project_id = id.into();
        self.page = Page::Project;
    }

    pub fn view_key(&self) -> ViewKey {
        match self.page {
            Page::Home => ViewKey::Home,
            Page::Expertise => ViewKey::Expertise,
            Page::Work => ViewKey::Work,
            Page::Project => ViewKey::Project(self.project_id.clone()),
            Page::Contact => ViewKey::Contact,
        }
    }
}
