//! Bundled starter content, written by `gyanam init`.

pub const HOME: &str = include_str!("../fixtures/home.json");
pub const ABOUT: &str = include_str!("../fixtures/about.json");
pub const COURSES: &str = include_str!("../fixtures/courses.json");
pub const GALLERY: &str = include_str!("../fixtures/gallery.json");
pub const ACHIEVEMENTS: &str = include_str!("../fixtures/achievements.json");
pub const CONTACT: &str = include_str!("../fixtures/contact.json");
pub const FOOTER: &str = include_str!("../fixtures/footer.json");

/// `(file name, source)` for every bundled document.
pub const DOCUMENTS: [(&str, &str); 7] = [
    ("home.json", HOME),
    ("about.json", ABOUT),
    ("courses.json", COURSES),
    ("gallery.json", GALLERY),
    ("achievements.json", ACHIEVEMENTS),
    ("contact.json", CONTACT),
    ("footer.json", FOOTER),
];
