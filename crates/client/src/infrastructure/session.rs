//! Session provider backed by startup configuration.

use blogs_domain::Viewer;

use crate::ports::outbound::SessionPort;

/// Viewer resolved once at startup; `None` browses anonymously.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    viewer: Option<Viewer>,
}

impl StaticSession {
    pub fn new(viewer: Option<Viewer>) -> Self {
        Self { viewer }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionPort for StaticSession {
    fn current_viewer(&self) -> Option<Viewer> {
        self.viewer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogs_domain::{Role, ViewerId};

    #[test]
    fn reports_configured_viewer() {
        let id = ViewerId::new("u1").expect("valid id");
        let session = StaticSession::new(Some(Viewer::new(id.clone()).with_role(Role::Admin)));

        let viewer = session.current_viewer().expect("signed in");
        assert_eq!(viewer.id, id);
        assert!(viewer.is_admin());
        assert!(StaticSession::anonymous().current_viewer().is_none());
    }
}
