//! Role-filtered navigation and page routing.

use crate::model::Role;
use std::fmt::Display;

/// Every page the workbench knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Formulator,
    Projects,
    Suppliers,
    Certifications,
    Analytics,
    Users,
    Settings,
}

/// The pages that have their own view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Formulator,
}

impl Page {
    pub fn id(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Formulator => "formulator",
            Page::Projects => "projects",
            Page::Suppliers => "suppliers",
            Page::Certifications => "certifications",
            Page::Analytics => "analytics",
            Page::Users => "users",
            Page::Settings => "settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        NAVIGATION
            .iter()
            .map(|item| item.page)
            .find(|page| page.id() == id)
    }

    /// The view shown for this page. Pages without one show the dashboard.
    pub fn renders(self) -> View {
        match self {
            Page::Formulator => View::Formulator,
            _ => View::Dashboard,
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One entry of the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

const EVERYONE: &[Role] = &[Role::Admin, Role::User, Role::CertifyingBody];
const STAFF: &[Role] = &[Role::Admin, Role::User];
const ADMINS: &[Role] = &[Role::Admin];

pub const NAVIGATION: [NavItem; 8] = [
    NavItem { page: Page::Dashboard, label: "Dashboard", roles: EVERYONE },
    NavItem { page: Page::Formulator, label: "Formulator", roles: STAFF },
    NavItem { page: Page::Projects, label: "Projects", roles: STAFF },
    NavItem { page: Page::Suppliers, label: "Suppliers", roles: STAFF },
    NavItem { page: Page::Certifications, label: "Certifications", roles: EVERYONE },
    NavItem { page: Page::Analytics, label: "Analytics", roles: ADMINS },
    NavItem { page: Page::Users, label: "Users", roles: ADMINS },
    NavItem { page: Page::Settings, label: "Settings", roles: EVERYONE },
];

/// Navigation entries visible to `role`, in list order.
pub fn visible_items(role: Role) -> Vec<&'static NavItem> {
    NAVIGATION.iter().filter(|item| item.allows(role)).collect()
}

/// Tracks the current page of one signed-in user.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn go(&mut self, page: Page) {
        self.current = page;
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn view(&self) -> View {
        self.current.renders()
    }
}
