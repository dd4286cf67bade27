//! Named views and the two navigation phases.

/// Whether a view needs a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unauthenticated,
    Authenticated,
}

/// Every screen the application can show. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Login,
    Registration,
    Dashboard,
    BulkUpload,
    QrTerminal,
    Directory,
}

impl View {
    /// Post-login views, in navigation bar order
    pub const NAVIGATION: [View; 4] = [
        View::Dashboard,
        View::BulkUpload,
        View::QrTerminal,
        View::Directory,
    ];

    /// View shown right after signing in
    pub const LANDING: View = View::Dashboard;

    pub fn phase(self) -> Phase {
        match self {
            Self::Login | Self::Registration => Phase::Unauthenticated,
            Self::Dashboard | Self::BulkUpload | Self::QrTerminal | Self::Directory => {
                Phase::Authenticated
            }
        }
    }

    pub fn requires_session(self) -> bool {
        self.phase() == Phase::Authenticated
    }

    /// Stable identifier (DOM ids, log fields)
    pub fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
            Self::Dashboard => "dashboard",
            Self::BulkUpload => "upload",
            Self::QrTerminal => "terminal",
            Self::Directory => "directory",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Registration => "Create account",
            Self::Dashboard => "Dashboard",
            Self::BulkUpload => "Excel Import",
            Self::QrTerminal => "QR Terminal",
            Self::Directory => "Employees",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        assert_eq!(View::Login.phase(), Phase::Unauthenticated);
        assert_eq!(View::Registration.phase(), Phase::Unauthenticated);
        for view in View::NAVIGATION {
            assert!(view.requires_session(), "{} should require a session", view);
        }
        assert!(View::LANDING.requires_session());
    }

    #[test]
    fn test_ids_are_unique() {
        let all = [
            View::Login,
            View::Registration,
            View::Dashboard,
            View::BulkUpload,
            View::QrTerminal,
            View::Directory,
        ];
        let ids: std::collections::HashSet<_> = all.iter().map(|v| v.id()).collect();
        assert_eq!(ids.len(), all.len());
    }
}
