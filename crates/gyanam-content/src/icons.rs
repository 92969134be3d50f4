//! Symbolic icon resolution.
//!
//! Content documents reference icons by name (`"Users"`, `"Award"`, ...).
//! [`Icon`] is the single registry of every icon the site can draw, and
//! [`IconSet`] is the per-page allow-list that decides which of those names
//! a given page accepts. Resolution never fails: an unknown or disallowed
//! name yields `None` and the renderer skips the icon slot.

use std::fmt;

/// Every icon the site knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    Award,
    BookOpen,
    Building2,
    CheckCircle,
    CheckCircle2,
    ChevronLeft,
    ChevronRight,
    Clock,
    Eye,
    Facebook,
    GraduationCap,
    Home,
    Instagram,
    Mail,
    MapPin,
    Medal,
    Menu,
    Moon,
    Phone,
    Star,
    Sun,
    Target,
    TrendingUp,
    Trophy,
    Users,
    X,
}

impl Icon {
    /// All registered icons.
    pub const ALL: &'static [Icon] = &[
        Icon::ArrowRight,
        Icon::Award,
        Icon::BookOpen,
        Icon::Building2,
        Icon::CheckCircle,
        Icon::CheckCircle2,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Clock,
        Icon::Eye,
        Icon::Facebook,
        Icon::GraduationCap,
        Icon::Home,
        Icon::Instagram,
        Icon::Mail,
        Icon::MapPin,
        Icon::Medal,
        Icon::Menu,
        Icon::Moon,
        Icon::Phone,
        Icon::Star,
        Icon::Sun,
        Icon::Target,
        Icon::TrendingUp,
        Icon::Trophy,
        Icon::Users,
        Icon::X,
    ];

    /// Look up an icon by its content name (exact, case-sensitive).
    pub fn from_name(name: &str) -> Option<Icon> {
        Self::ALL.iter().copied().find(|icon| icon.name() == name)
    }

    /// The name content documents use for this icon.
    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => "ArrowRight",
            Icon::Award => "Award",
            Icon::BookOpen => "BookOpen",
            Icon::Building2 => "Building2",
            Icon::CheckCircle => "CheckCircle",
            Icon::CheckCircle2 => "CheckCircle2",
            Icon::ChevronLeft => "ChevronLeft",
            Icon::ChevronRight => "ChevronRight",
            Icon::Clock => "Clock",
            Icon::Eye => "Eye",
            Icon::Facebook => "Facebook",
            Icon::GraduationCap => "GraduationCap",
            Icon::Home => "Home",
            Icon::Instagram => "Instagram",
            Icon::Mail => "Mail",
            Icon::MapPin => "MapPin",
            Icon::Medal => "Medal",
            Icon::Menu => "Menu",
            Icon::Moon => "Moon",
            Icon::Phone => "Phone",
            Icon::Star => "Star",
            Icon::Sun => "Sun",
            Icon::Target => "Target",
            Icon::TrendingUp => "TrendingUp",
            Icon::Trophy => "Trophy",
            Icon::Users => "Users",
            Icon::X => "X",
        }
    }

    /// Inner SVG elements on a 24x24 stroke grid.
    fn body(self) -> &'static str {
        match self {
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::Award => {
                r#"<circle cx="12" cy="8" r="6"/><path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"/>"#
            }
            Icon::BookOpen => {
                r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#
            }
            Icon::Building2 => {
                r#"<path d="M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z"/><path d="M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2"/><path d="M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2"/><path d="M10 6h4"/><path d="M10 10h4"/><path d="M10 14h4"/><path d="M10 18h4"/>"#
            }
            Icon::CheckCircle => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="m9 11 3 3L22 4"/>"#
            }
            Icon::CheckCircle2 => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
            Icon::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Icon::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Icon::Eye => {
                r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Icon::Facebook => {
                r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#
            }
            Icon::GraduationCap => {
                r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            Icon::Home => {
                r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
            }
            Icon::Instagram => {
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
            }
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Icon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Icon::Medal => {
                r#"<path d="M7.21 15 2.66 7.14a2 2 0 0 1 .13-2.2L4.4 2.8A2 2 0 0 1 6 2h12a2 2 0 0 1 1.6.8l1.6 2.14a2 2 0 0 1 .14 2.2L16.79 15"/><path d="M11 12 5.12 2.2"/><path d="m13 12 5.88-9.8"/><path d="M8 7h8"/><circle cx="12" cy="17" r="5"/>"#
            }
            Icon::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            Icon::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Icon::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
            }
            Icon::Target => {
                r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#
            }
            Icon::TrendingUp => {
                r#"<polyline points="22 7 13.5 15.5 8.5 10.5 2 17"/><polyline points="16 7 22 7 22 13"/>"#
            }
            Icon::Trophy => {
                r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/><path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/><path d="M4 22h16"/><path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/><path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/><path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#
            }
            Icon::Users => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
            }
            Icon::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        }
    }

    /// Render as an inline SVG element with the given CSS classes.
    pub fn svg(self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon icon-{} {}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.name().to_lowercase(),
            class,
            self.body()
        )
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A page's allow-list of icon names.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    page: &'static str,
    allowed: &'static [Icon],
}

impl IconSet {
    pub const HOME: IconSet = IconSet::new(
        "home",
        &[
            Icon::Users,
            Icon::BookOpen,
            Icon::Award,
            Icon::Building2,
            Icon::CheckCircle2,
            Icon::ArrowRight,
        ],
    );

    pub const ABOUT: IconSet =
        IconSet::new("about", &[Icon::Users, Icon::Award, Icon::Target, Icon::Eye]);

    pub const COURSES: IconSet = IconSet::new(
        "courses",
        &[
            Icon::BookOpen,
            Icon::Clock,
            Icon::Users,
            Icon::GraduationCap,
            Icon::Award,
            Icon::CheckCircle,
        ],
    );

    pub const ACHIEVEMENTS: IconSet = IconSet::new(
        "achievements",
        &[
            Icon::Trophy,
            Icon::Award,
            Icon::Star,
            Icon::Medal,
            Icon::TrendingUp,
            Icon::Users,
        ],
    );

    pub const CONTACT: IconSet = IconSet::new(
        "contact",
        &[Icon::Mail, Icon::Phone, Icon::MapPin, Icon::Clock],
    );

    pub const FOOTER: IconSet = IconSet::new(
        "footer",
        &[
            Icon::Facebook,
            Icon::Instagram,
            Icon::Mail,
            Icon::Phone,
            Icon::MapPin,
        ],
    );

    const fn new(page: &'static str, allowed: &'static [Icon]) -> Self {
        Self { page, allowed }
    }

    /// Page this set belongs to.
    pub fn page(&self) -> &'static str {
        self.page
    }

    /// Icons this page accepts.
    pub fn allowed(&self) -> &'static [Icon] {
        self.allowed
    }

    /// Resolve a content icon name for this page.
    ///
    /// Returns `None` when the name is unknown or not allowed here.
    pub fn resolve(&self, name: &str) -> Option<Icon> {
        let resolved = self
            .allowed
            .iter()
            .copied()
            .find(|icon| icon.name() == name);

        if resolved.is_none() {
            tracing::warn!("Icon '{}' is not available on the {} page", name, self.page);
        }

        resolved
    }

    /// Resolve and render in one step.
    pub fn render(&self, name: &str, class: &str) -> Option<String> {
        self.resolve(name).map(|icon| icon.svg(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SETS: &[IconSet] = &[
        IconSet::HOME,
        IconSet::ABOUT,
        IconSet::COURSES,
        IconSet::ACHIEVEMENTS,
        IconSet::CONTACT,
        IconSet::FOOTER,
    ];

    #[test]
    fn resolves_every_allowed_name() {
        for set in ALL_SETS {
            for icon in set.allowed() {
                assert_eq!(set.resolve(icon.name()), Some(*icon), "{} on {}", icon, set.page());
            }
        }
    }

    #[test]
    fn rejects_names_outside_the_allow_list() {
        for set in ALL_SETS {
            for icon in Icon::ALL {
                if !set.allowed().contains(icon) {
                    assert_eq!(set.resolve(icon.name()), None, "{} on {}", icon, set.page());
                }
            }
            assert_eq!(set.resolve("Rocket"), None);
            assert_eq!(set.resolve(""), None);
        }
    }

    #[test]
    fn same_name_resolves_per_page() {
        assert_eq!(IconSet::HOME.resolve("Building2"), Some(Icon::Building2));
        assert_eq!(IconSet::ABOUT.resolve("Building2"), None);
        assert_eq!(IconSet::ACHIEVEMENTS.resolve("Trophy"), Some(Icon::Trophy));
        assert_eq!(IconSet::COURSES.resolve("Trophy"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Icon::from_name("users"), None);
        assert_eq!(Icon::from_name("Users"), Some(Icon::Users));
    }

    #[test]
    fn names_round_trip_through_registry() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()), Some(*icon));
        }
    }

    #[test]
    fn renders_svg_with_classes() {
        let svg = IconSet::CONTACT.render("Mail", "h-5 w-5").unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("icon-mail h-5 w-5"));
        assert!(svg.ends_with("</svg>"));
        assert!(IconSet::CONTACT.render("Trophy", "h-5 w-5").is_none());
    }
}
