//! Site routes and navbar state.

use serde::Serialize;

/// One of the six pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Courses,
    Gallery,
    Achievements,
    Contact,
}

impl Route {
    /// All routes in navbar order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Courses,
        Route::Gallery,
        Route::Achievements,
        Route::Contact,
    ];

    /// URL path relative to the site root.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about-us",
            Route::Courses => "/courses",
            Route::Gallery => "/gallery",
            Route::Achievements => "/achievements",
            Route::Contact => "/contact",
        }
    }

    /// Label shown in the navbar.
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About Us",
            Route::Courses => "Courses",
            Route::Gallery => "Gallery",
            Route::Achievements => "Achievements",
            Route::Contact => "Contact",
        }
    }

    /// Template used to render this route.
    pub fn template(self) -> &'static str {
        match self {
            Route::Home => "home.html",
            Route::About => "about.html",
            Route::Courses => "courses.html",
            Route::Gallery => "gallery.html",
            Route::Achievements => "achievements.html",
            Route::Contact => "contact.html",
        }
    }

    /// Directory under the output root (`""` for the home page).
    pub fn output_dir(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Find the route for a request path.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// A rendered navbar link.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavLink {
    /// Display name
    pub name: String,
    /// Href including the base URL
    pub href: String,
    /// Whether this link points at the current page
    pub active: bool,
}

/// Build the navbar for the page at `current_path`.
///
/// At most one link is active; a path outside the route table marks none.
pub fn nav_links(current_path: &str, base_url: &str) -> Vec<NavLink> {
    let current = normalize(current_path);

    Route::ALL
        .iter()
        .map(|route| NavLink {
            name: route.name().to_string(),
            href: href(base_url, route.path()),
            active: route.path() == current,
        })
        .collect()
}

/// Join the base URL and a route path.
pub fn href(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" {
        format!("{}/", base)
    } else {
        format!("{}{}/", base, path)
    }
}

/// Strip trailing slashes so `/courses/` and `/courses` compare equal.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link was followed; the menu always closes.
    pub fn navigate(&mut self) {
        self.open = false;
    }
}
