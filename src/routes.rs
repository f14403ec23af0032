//! Route table for the admin shell.
//!
//! Public routes render for anyone; every other known route sits behind the
//! route guard. Unknown paths fall back by auth state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Where invalid or anonymous sessions are sent.
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const DASHBOARD_ROUTE: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Students,
    AddStudent,
    DeleteStudent(String),
    EditStudent(String),
    AddBooks,
}

impl Route {
    /// Match a path. Specific student routes win over `/students/:id`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] => Some(Self::Dashboard),
            ["login"] => Some(Self::Login),
            ["register"] => Some(Self::Register),
            ["students"] => Some(Self::Students),
            ["students", "add"] => Some(Self::AddStudent),
            ["students", "delete", id] if !id.is_empty() => Some(Self::DeleteStudent((*id).to_owned())),
            ["students", id] if !id.is_empty() => Some(Self::EditStudent((*id).to_owned())),
            ["addBooks"] => Some(Self::AddBooks),
            _ => None,
        }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => LOGIN_ROUTE.to_owned(),
            Self::Register => REGISTER_ROUTE.to_owned(),
            Self::Dashboard => DASHBOARD_ROUTE.to_owned(),
            Self::Students => "/students".to_owned(),
            Self::AddStudent => "/students/add".to_owned(),
            Self::DeleteStudent(id) => format!("/students/delete/{id}"),
            Self::EditStudent(id) => format!("/students/{id}"),
            Self::AddBooks => "/addBooks".to_owned(),
        }
    }
}
