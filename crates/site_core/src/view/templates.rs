//! Askama template structs for the nav bar, the three pages and the document.

use askama::Template;
use shared::domain::{
    Badge, Benefit, Course, Feature, LearningStep, NavLink, PartnerCard, Program, Stat,
    Testimonial,
};

use crate::content::Footer;

#[derive(Template)]
#[template(path = "nav.html")]
pub struct NavTemplate {
    pub brand_name: &'static str,
    pub brand_tagline: &'static str,
    pub links: &'static [NavLink],
    pub treatment: &'static str,
    pub bar_class: String,
    pub menu_open: bool,
}

/// Home page. `highlight` selects the feature pill carrying `data-active`.
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub features: &'static [Feature],
    pub highlight: usize,
    pub stats: &'static [Stat],
    pub partners: &'static [PartnerCard],
    pub footer: &'static Footer,
}

#[derive(Template)]
#[template(path = "pages/platform.html")]
pub struct PlatformTemplate {
    pub badges: &'static [Badge],
    pub benefits: &'static [Benefit],
    pub courses: &'static [Course],
    pub testimonials: &'static [Testimonial],
    pub footer: &'static Footer,
}

#[derive(Template)]
#[template(path = "pages/programs.html")]
pub struct ProgramsTemplate {
    pub programs: &'static [Program],
    pub learning_path: &'static [LearningStep],
    pub footer: &'static Footer,
}

/// Full document. The slot bodies arrive pre-rendered from the templates above.
#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate<'a> {
    pub site_title: &'a str,
    pub global_styles: &'static str,
    pub nav_slot_id: &'static str,
    pub page_slot_id: &'static str,
    pub nav_html: String,
    pub page_html: String,
}
