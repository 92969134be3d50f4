//! View models handed to the page templates.
//!
//! Content documents keep symbolic icon names and root-relative URLs. The
//! views here resolve icons through each page's [`IconSet`], prefix URLs
//! with the site base URL and flatten the curriculum into the structure the
//! courses template walks. An icon that does not resolve becomes `None` and
//! the template leaves the node out.

use serde::Serialize;

use gyanam_content::curriculum::{AdmissionProcess, CoCurricular, Scholarships};
use gyanam_content::pages::{
    ContactForm, Faq, IconCard, SchoolInfo, Stat, Story, VirtualTour,
};
use gyanam_content::{
    grade_label, ContentStore, Curriculum, FooterContent, Hero, Icon, IconSet, Stream,
};
use gyanam_widgets::{nav_links, CarouselConfig, Lightbox, NavLink, Route};

use crate::probe::GalleryImage;

/// Prefix a root-relative content URL with the base URL.
///
/// External, mail, phone and fragment links pass through unchanged.
pub fn site_url(base_url: &str, url: &str) -> String {
    if url.starts_with('/') && !url.starts_with("//") {
        format!("{}{}", base_url.trim_end_matches('/'), url)
    } else {
        url.to_string()
    }
}

/// Shared chrome of every page: title, navbar and footer.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub site_title: String,
    pub page_title: String,
    pub base_url: String,
    pub logo: String,
    pub nav: Vec<NavLink>,
    pub footer: FooterView,
    pub icons: ChromeIcons,
}

/// Icons the navbar and lightbox draw regardless of content.
#[derive(Debug, Clone, Serialize)]
pub struct ChromeIcons {
    pub menu: String,
    pub close: String,
    pub sun: String,
    pub moon: String,
}

impl Default for ChromeIcons {
    fn default() -> Self {
        Self {
            menu: Icon::Menu.svg(""),
            close: Icon::X.svg(""),
            sun: Icon::Sun.svg("theme-light"),
            moon: Icon::Moon.svg("theme-dark"),
        }
    }
}

impl Layout {
    pub fn new(route: Route, site_title: &str, base_url: &str, store: &ContentStore, year: i32) -> Self {
        Self {
            site_title: site_title.to_string(),
            page_title: route.name().to_string(),
            base_url: base_url.to_string(),
            logo: site_url(base_url, &store.footer.brand.logo),
            nav: nav_links(route.path(), base_url),
            footer: FooterView::new(&store.footer, base_url, year),
            icons: ChromeIcons::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialView {
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub name: String,
    pub logo: String,
    pub logo_height: String,
    pub description: String,
    pub quick_links: Vec<LinkView>,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub address_icon: Option<String>,
    pub phone_icon: Option<String>,
    pub email_icon: Option<String>,
    pub social: Vec<SocialView>,
    pub copyright: String,
}

impl FooterView {
    pub fn new(footer: &FooterContent, base_url: &str, year: i32) -> Self {
        let icons = IconSet::FOOTER;

        Self {
            name: footer.brand.name.clone(),
            logo: site_url(base_url, &footer.brand.logo),
            logo_height: footer
                .brand
                .logo_height
                .clone()
                .unwrap_or_else(|| "h-12".to_string()),
            description: footer.brand.description.clone(),
            quick_links: footer
                .quick_links
                .iter()
                .map(|link| LinkView {
                    text: link.text.clone(),
                    url: site_url(base_url, &link.url),
                })
                .collect(),
            address: footer.contact_info.address.clone(),
            phone: footer.contact_info.phone.clone(),
            email: footer.contact_info.email.clone(),
            address_icon: icons.render("MapPin", ""),
            phone_icon: icons.render("Phone", ""),
            email_icon: icons.render("Mail", ""),
            social: footer
                .social_media
                .iter()
                .map(|link| SocialView {
                    platform: link.platform.clone(),
                    url: link.url.clone(),
                    icon: icons.render(&link.icon, ""),
                })
                .collect(),
            copyright: format!("© {} {}", year, footer.copyright),
        }
    }
}

/// A card whose icon has been resolved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

impl CardView {
    fn new(card: &IconCard, icons: IconSet) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            icon: icons.render(&card.icon, ""),
        }
    }

    fn all(cards: &[IconCard], icons: IconSet) -> Vec<Self> {
        cards.iter().map(|card| Self::new(card, icons)).collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatView {
    pub value: String,
    pub label: String,
    pub icon: Option<String>,
}

fn stats(stats: &[Stat], icons: IconSet) -> Vec<StatView> {
    stats
        .iter()
        .map(|stat| StatView {
            value: stat.value.clone(),
            label: stat.label.clone(),
            icon: stat.icon.as_deref().and_then(|name| icons.render(name, "")),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub hero: HomeHeroView,
    pub stats: Vec<StatView>,
    pub features: FeaturesView,
    pub cta: CtaView,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeHeroView {
    pub title: String,
    pub highlighted_title: Option<String>,
    pub description: String,
    pub slides: Vec<String>,
    pub carousel: CarouselConfig,
    pub buttons: Vec<ButtonView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ButtonView {
    pub text: String,
    pub url: String,
    pub variant: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturesView {
    pub title: String,
    pub subtitle: Option<String>,
    pub items: Vec<CardView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CtaView {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub highlight_icon: Option<String>,
    pub button_text: String,
    pub button_url: String,
    pub button_icon: Option<String>,
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AboutView {
    pub hero: Hero,
    pub story: Story,
    pub mission_vision: Vec<CardView>,
    pub values_title: String,
    pub values: Vec<CardView>,
    pub facts: Vec<FactView>,
}

/// One row of the school information card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FactView {
    pub label: String,
    pub value: String,
    pub icon: String,
}

fn school_facts(info: &SchoolInfo) -> Vec<FactView> {
    let location = &info.location;
    let fact = |label: &str, value: String, icon: Icon| FactView {
        label: label.to_string(),
        value,
        icon: icon.svg(""),
    };

    vec![
        fact(
            "Location",
            format!(
                "{}, {}, {}, {} - {}",
                location.village, location.block, location.district, location.state, location.pincode
            ),
            Icon::MapPin,
        ),
        fact(
            "Classes",
            format!("{} to {}", info.classes.from, info.classes.to),
            Icon::GraduationCap,
        ),
        fact("Affiliation", info.affiliation.clone(), Icon::Award),
        fact("School Type", info.school_type.clone(), Icon::Users),
        fact("Established", info.establishment_year.clone(), Icon::Clock),
        fact("UDISE Code", info.udise_code.clone(), Icon::BookOpen),
        fact("Management", info.management.clone(), Icon::Building2),
    ]
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CoursesView {
    pub hero: Hero,
    pub features: Vec<CardView>,
    pub levels: Vec<LevelView>,
    pub check_icon: Option<String>,
    pub level_icon: Option<String>,
    pub admission_process: AdmissionProcess,
    pub scholarships: Scholarships,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelView {
    pub name: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub curriculum: CurriculumView,
}

/// Curriculum flattened for rendering, tagged by shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CurriculumView {
    Flat { subjects: Vec<String> },
    Grouped { groups: Vec<GradeGroup> },
    Streams { streams: Vec<Stream> },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GradeGroup {
    pub key: String,
    pub label: String,
    pub subjects: Vec<String>,
}

impl From<&Curriculum> for CurriculumView {
    fn from(curriculum: &Curriculum) -> Self {
        match curriculum {
            Curriculum::Flat(subjects) => CurriculumView::Flat {
                subjects: subjects.clone(),
            },
            Curriculum::Grouped(groups) => CurriculumView::Grouped {
                groups: groups
                    .iter()
                    .map(|(key, subjects)| GradeGroup {
                        key: key.clone(),
                        label: grade_label(key),
                        subjects: subjects.clone(),
                    })
                    .collect(),
            },
            Curriculum::Streams(streams) => CurriculumView::Streams {
                streams: streams.clone(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub hero: Hero,
    pub images: Vec<GalleryImage>,
    pub lightbox: Lightbox,
    pub tour: Option<VirtualTour>,
    pub prev_icon: String,
    pub next_icon: String,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AchievementsView {
    pub hero: Hero,
    pub stats: Vec<StatView>,
    pub years: Vec<YearView>,
    pub alumni: Vec<gyanam_content::pages::Alumnus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearView {
    pub year: String,
    pub items: Vec<AchievementView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementView {
    pub title: String,
    pub category: String,
    pub description: String,
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub hero: Hero,
    pub form: ContactForm,
    pub info: Vec<ContactInfoView>,
    pub faq: Faq,
    pub faq_url: String,
    pub map: MapView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfoView {
    pub title: String,
    pub content: String,
    pub subtext: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub google_url: String,
    pub embed_url: String,
    pub attribution_url: String,
    pub coordinates: String,
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// The view for one route.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PageView {
    Home(HomeView),
    About(AboutView),
    Courses(CoursesView),
    Gallery(GalleryView),
    Achievements(AchievementsView),
    Contact(ContactView),
}

impl PageView {
    /// Build the view for `route`. Gallery images come already probed.
    pub fn build(
        route: Route,
        store: &ContentStore,
        gallery: &[GalleryImage],
        base_url: &str,
    ) -> Self {
        match route {
            Route::Home => PageView::Home(home(store, base_url)),
            Route::About => PageView::About(about(store)),
            Route::Courses => PageView::Courses(courses(store)),
            Route::Gallery => PageView::Gallery(gallery_view(store, gallery, base_url)),
            Route::Achievements => PageView::Achievements(achievements(store)),
            Route::Contact => PageView::Contact(contact(store, base_url)),
        }
    }
}

fn home(store: &ContentStore, base_url: &str) -> HomeView {
    let home = &store.home;
    let icons = IconSet::HOME;

    HomeView {
        hero: HomeHeroView {
            title: home.hero.title.clone(),
            highlighted_title: home.hero.highlighted_title.clone(),
            description: home.hero.description.clone(),
            slides: home
                .hero
                .carousel_images
                .iter()
                .map(|src| site_url(base_url, src))
                .collect(),
            carousel: CarouselConfig::default(),
            buttons: home
                .hero
                .cta_buttons
                .iter()
                .map(|button| ButtonView {
                    text: button.text.clone(),
                    url: site_url(base_url, &button.url),
                    variant: button.variant.clone(),
                })
                .collect(),
        },
        stats: stats(&home.stats, icons),
        features: FeaturesView {
            title: home.features.title.clone(),
            subtitle: home.features.subtitle.clone(),
            items: CardView::all(&home.features.items, icons),
        },
        cta: CtaView {
            title: home.cta.title.clone(),
            description: home.cta.description.clone(),
            highlights: home.cta.highlights.clone(),
            highlight_icon: icons.render("CheckCircle2", ""),
            button_text: home.cta.button_text.clone(),
            button_url: site_url(base_url, &home.cta.button_url),
            button_icon: icons.render("ArrowRight", ""),
        },
    }
}

fn about(store: &ContentStore) -> AboutView {
    let about = &store.about;
    let icons = IconSet::ABOUT;

    AboutView {
        hero: about.hero.clone(),
        story: about.story.clone(),
        mission_vision: about
            .mission_vision
            .values()
            .map(|card| CardView::new(card, icons))
            .collect(),
        values_title: about.values.title.clone(),
        values: CardView::all(&about.values.items, icons),
        facts: school_facts(&about.school_info),
    }
}

fn courses(store: &ContentStore) -> CoursesView {
    let courses = &store.courses;
    let icons = IconSet::COURSES;

    CoursesView {
        hero: courses.hero.clone(),
        features: CardView::all(&courses.features, icons),
        levels: courses
            .curriculum
            .iter()
            .map(|level| LevelView {
                name: level.name.clone(),
                description: level.description.clone(),
                key_features: level.key_features.clone(),
                curriculum: CurriculumView::from(&level.curriculum),
            })
            .collect(),
        check_icon: icons.render("CheckCircle", ""),
        level_icon: icons.render("GraduationCap", ""),
        admission_process: courses.admission_process.clone(),
        scholarships: courses.scholarships.clone(),
        activities: courses
            .co_curricular_activities
            .as_ref()
            .map(|c: &CoCurricular| c.activities.clone())
            .unwrap_or_default(),
    }
}

fn gallery_view(store: &ContentStore, gallery: &[GalleryImage], base_url: &str) -> GalleryView {
    let content = &store.gallery;

    let images: Vec<GalleryImage> = gallery
        .iter()
        .map(|image| GalleryImage {
            src: site_url(base_url, &image.src),
            ..image.clone()
        })
        .collect();

    GalleryView {
        hero: content.hero.clone(),
        lightbox: Lightbox::new(images.len()),
        images,
        tour: content.tour.clone().map(|tour| VirtualTour {
            poster: site_url(base_url, &tour.poster),
            ..tour
        }),
        prev_icon: Icon::ChevronLeft.svg(""),
        next_icon: Icon::ChevronRight.svg(""),
    }
}

fn achievements(store: &ContentStore) -> AchievementsView {
    let content = &store.achievements;
    let icons = IconSet::ACHIEVEMENTS;

    AchievementsView {
        hero: content.hero.clone(),
        stats: stats(&content.stats, icons),
        years: content
            .achievements
            .iter()
            .map(|group| YearView {
                year: group.year.clone(),
                items: group
                    .items
                    .iter()
                    .map(|item| AchievementView {
                        title: item.title.clone(),
                        category: item.category.clone(),
                        description: item.description.clone(),
                        icon: icons.render(&item.icon, ""),
                    })
                    .collect(),
            })
            .collect(),
        alumni: content.alumni.clone(),
    }
}

fn contact(store: &ContentStore, base_url: &str) -> ContactView {
    let content = &store.contact;
    let icons = IconSet::CONTACT;
    let map = content.map;

    ContactView {
        hero: content.hero.clone(),
        form: content.form.clone(),
        info: content
            .contact_info
            .iter()
            .map(|info| ContactInfoView {
                title: info.title.clone(),
                content: info.content.clone(),
                subtext: info.subtext.clone(),
                icon: icons.render(&info.icon, ""),
            })
            .collect(),
        faq: content.faq.clone(),
        faq_url: site_url(base_url, "/courses"),
        map: MapView {
            google_url: map.google_maps_url(),
            embed_url: map.osm_embed_url(),
            attribution_url: map.osm_attribution_url(),
            coordinates: map.display_coordinates(),
            icon: Icon::MapPin.svg(""),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyanam_content::{defaults, parse_document, CoursesContent};
    use pretty_assertions::assert_eq;

    fn store() -> ContentStore {
        ContentStore {
            home: parse_document(defaults::HOME).unwrap(),
            about: parse_document(defaults::ABOUT).unwrap(),
            courses: parse_document(defaults::COURSES).unwrap(),
            gallery: parse_document(defaults::GALLERY).unwrap(),
            achievements: parse_document(defaults::ACHIEVEMENTS).unwrap(),
            contact: parse_document(defaults::CONTACT).unwrap(),
            footer: parse_document(defaults::FOOTER).unwrap(),
        }
    }

    #[test]
    fn site_url_prefixes_root_relative_links() {
        assert_eq!(site_url("/", "/courses"), "/courses");
        assert_eq!(site_url("/academy/", "/courses"), "/academy/courses");
        assert_eq!(site_url("/academy/", "https://x.org/a"), "https://x.org/a");
        assert_eq!(site_url("/academy/", "mailto:a@b.c"), "mailto:a@b.c");
        assert_eq!(site_url("/academy/", "//cdn.example/x"), "//cdn.example/x");
    }

    #[test]
    fn unresolved_icon_leaves_card_without_icon() {
        let card = IconCard {
            title: "Library".to_string(),
            description: "Open daily".to_string(),
            icon: "Trophy".to_string(),
        };

        let view = CardView::new(&card, IconSet::HOME);

        assert_eq!(view.icon, None);
        assert_eq!(view.title, "Library");
    }

    #[test]
    fn grouped_curriculum_gets_grade_labels() {
        let courses: CoursesContent = parse_document(defaults::COURSES).unwrap();
        let grouped = courses
            .curriculum
            .iter()
            .find(|level| matches!(level.curriculum, Curriculum::Grouped(_)))
            .unwrap();

        let CurriculumView::Grouped { groups } = CurriculumView::from(&grouped.curriculum) else {
            panic!("expected grouped view");
        };

        assert_eq!(groups[0].key, "class_1_5");
        assert_eq!(groups[0].label, "CLASS-1_5");
    }

    #[test]
    fn curriculum_view_is_tagged_by_shape() {
        let view = CurriculumView::from(&Curriculum::Flat(vec!["Art".to_string()]));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["kind"], "flat");
        assert_eq!(json["subjects"][0], "Art");
        assert!(json.get("groups").is_none());
        assert!(json.get("streams").is_none());
    }

    #[test]
    fn layout_marks_current_route_active() {
        let layout = Layout::new(Route::Gallery, "Gyanam Academy", "/", &store(), 2026);
        let active: Vec<&str> = layout
            .nav
            .iter()
            .filter(|link| link.active)
            .map(|link| link.name.as_str())
            .collect();

        assert_eq!(active, vec!["Gallery"]);
        assert_eq!(layout.page_title, "Gallery");
    }

    #[test]
    fn footer_carries_year_and_resolved_icons() {
        let footer = FooterView::new(&store().footer, "/", 2026);

        assert!(footer.copyright.starts_with("© 2026 "));
        assert!(footer.social.iter().all(|link| link.icon.is_some()));
        assert!(footer.email_icon.is_some());
    }

    #[test]
    fn gallery_view_starts_with_closed_lightbox() {
        let images = vec![
            GalleryImage::fallback("/gallary/gal1.jpg".to_string(), "One".to_string()),
            GalleryImage::fallback("/gallary/gal2.jpg".to_string(), "Two".to_string()),
        ];

        let PageView::Gallery(view) = PageView::build(Route::Gallery, &store(), &images, "/site/")
        else {
            panic!("expected gallery view");
        };

        assert!(!view.lightbox.is_open());
        assert_eq!(view.lightbox.slides(), 2);
        assert_eq!(view.images[0].src, "/site/gallary/gal1.jpg");
    }

    #[test]
    fn contact_view_uses_campus_coordinates() {
        let PageView::Contact(view) = PageView::build(Route::Contact, &store(), &[], "/") else {
            panic!("expected contact view");
        };

        assert_eq!(
            view.map.google_url,
            "https://www.google.com/maps?q=26.834968056242143,93.29706413922847"
        );
        assert_eq!(view.info.len(), 4);
        assert!(view.info.iter().all(|info| info.icon.is_some()));
    }

    #[test]
    fn about_facts_cover_school_info() {
        let PageView::About(view) = PageView::build(Route::About, &store(), &[], "/") else {
            panic!("expected about view");
        };
        let labels: Vec<&str> = view.facts.iter().map(|f| f.label.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "Location",
                "Classes",
                "Affiliation",
                "School Type",
                "Established",
                "UDISE Code",
                "Management"
            ]
        );
        assert_eq!(view.mission_vision.len(), 2);
    }
}
