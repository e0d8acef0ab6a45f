//! Routing shell
//!
//! Resolves a URL path to a page and decides which chrome surrounds it.
//! Every `/admin` path hides the public navbar and footer; every admin path
//! but the login page gets the sidebar.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facility {
    SwimmingPools,
    FitnessCentre,
    AdventurePark,
    Transportation,
}

impl Facility {
    pub const ALL: [Facility; 4] = [
        Self::SwimmingPools,
        Self::FitnessCentre,
        Self::AdventurePark,
        Self::Transportation,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::SwimmingPools => "swimming-pools",
            Self::FitnessCentre => "fitness-centre",
            Self::AdventurePark => "adventure-park",
            Self::Transportation => "transportation",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Rooms,
    MyBookings,
    Facility(Facility),
    AdminLogin,
    AdminDashboard,
    AdminRooms,
    AdminUsers,
    NotFound,
}

impl Route {
    /// Resolve a path; query string, fragment and trailing slashes are ignored
    pub fn resolve(path: &str) -> Self {
        let path = normalize(path);
        match path {
            "/" => Self::Home,
            "/rooms" => Self::Rooms,
            "/my-bookings" => Self::MyBookings,
            "/admin/login" => Self::AdminLogin,
            "/admin/dashboard" => Self::AdminDashboard,
            "/admin/rooms" => Self::AdminRooms,
            "/admin/users" => Self::AdminUsers,
            _ => path
                .strip_prefix("/facilities/")
                .and_then(Facility::from_slug)
                .map(Self::Facility)
                .unwrap_or(Self::NotFound),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Rooms => "/rooms".into(),
            Self::MyBookings => "/my-bookings".into(),
            Self::Facility(f) => format!("/facilities/{}", f.slug()),
            Self::AdminLogin => "/admin/login".into(),
            Self::AdminDashboard => "/admin/dashboard".into(),
            Self::AdminRooms => "/admin/rooms".into(),
            Self::AdminUsers => "/admin/users".into(),
            Self::NotFound => "/404".into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Which shared frame pieces are shown around a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub navbar: bool,
    pub footer: bool,
    pub sidebar: bool,
}

impl Chrome {
    /// Chrome depends on the path prefix only, so unknown admin paths still
    /// get the admin frame
    pub fn for_path(path: &str) -> Self {
        let path = normalize(path);
        let admin = path.starts_with("/admin");
        Self {
            navbar: !admin,
            footer: !admin,
            sidebar: admin && path != "/admin/login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Admin sidebar; Reservations, Content and Settings have no page yet
pub const SIDEBAR: [SidebarItem; 6] = [
    SidebarItem {
        label: "Dashboard",
        path: "/admin/dashboard",
    },
    SidebarItem {
        label: "Rooms",
        path: "/admin/rooms",
    },
    SidebarItem {
        label: "Reservasi",
        path: "/admin/bookings",
    },
    SidebarItem {
        label: "Konten",
        path: "/admin/content",
    },
    SidebarItem {
        label: "Pengguna",
        path: "/admin/users",
    },
    SidebarItem {
        label: "Pengaturan",
        path: "/admin/settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ignores_trailing_slash_and_query() {
        assert_eq!(Route::resolve("/rooms/"), Route::Rooms);
        assert_eq!(Route::resolve("/admin/users?page=2"), Route::AdminUsers);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/#top"), Route::Home);
        assert_eq!(
            Route::resolve("/facilities/adventure-park"),
            Route::Facility(Facility::AdventurePark)
        );
        assert_eq!(Route::resolve("/facilities/spa"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips() {
        for f in Facility::ALL {
            assert_eq!(Route::resolve(&Route::Facility(f).path()), Route::Facility(f));
        }
    }

    #[test]
    fn test_chrome_rules() {
        let public = Chrome::for_path("/my-bookings");
        assert!(public.navbar && public.footer && !public.sidebar);

        let login = Chrome::for_path("/admin/login/");
        assert!(!login.navbar && !login.footer && !login.sidebar);

        let dashboard = Chrome::for_path("/admin/dashboard");
        assert!(!dashboard.navbar && dashboard.sidebar);

        // no page, still the admin frame
        let settings = Chrome::for_path("/admin/settings");
        assert_eq!(Route::resolve("/admin/settings"), Route::NotFound);
        assert!(settings.sidebar && !settings.footer);

        assert!(Chrome::for_path("/").footer);
    }

    #[test]
    fn test_sidebar_targets() {
        let resolved: Vec<Route> = SIDEBAR.iter().map(|i| Route::resolve(i.path)).collect();
        assert_eq!(resolved[0], Route::AdminDashboard);
        assert_eq!(resolved[1], Route::AdminRooms);
        assert_eq!(resolved[4], Route::AdminUsers);
        assert_eq!(resolved[2], Route::NotFound);
    }
}
