//! Pure rendering: explicit inputs in, HTML out through askama templates.

pub mod styles;
mod templates;

use askama::Template;
use serde::Serialize;
use shared::{
    domain::{PageId, RouteMatch},
    error::SiteError,
};

use crate::{
    config::SiteSettings,
    content,
    highlight::FEATURE_COUNT,
    nav::{BarTreatment, NavState, NAV_LINKS},
    router::{entry_fragment, Router},
};
use templates::{DocumentTemplate, HomeTemplate, NavTemplate, PlatformTemplate, ProgramsTemplate};

pub const NAV_SLOT_ID: &str = "site-nav";
pub const PAGE_SLOT_ID: &str = "site-page";

/// Carried by each home feature pill, valued with its index.
pub const FEATURE_ATTR: &str = "data-feature";
/// Marks the highlighted feature pill. Pill styling keys off this attribute.
pub const ACTIVE_ATTR: &str = "data-active";
/// Carried by the `<nav>` element, valued with [`BarTreatment::as_str`].
pub const TREATMENT_ATTR: &str = "data-treatment";

const BAR_BASE: &str = "fixed w-full top-0 z-50 transition-all duration-500";
const BAR_SOLID: &str = "bg-slate-950/95 backdrop-blur-xl shadow-2xl";
const BAR_TRANSPARENT: &str = "bg-transparent";

pub fn bar_class(treatment: BarTreatment) -> String {
    let variant = match treatment {
        BarTreatment::Solid => BAR_SOLID,
        BarTreatment::Transparent => BAR_TRANSPARENT,
    };
    format!("{BAR_BASE} {variant}")
}

/// Everything a frame depends on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub route: RouteMatch,
    pub nav: NavState,
    pub highlight: usize,
    pub site_title: String,
}

impl ViewModel {
    pub fn from_inputs(
        fragment: &str,
        scroll_y: f64,
        menu_open: bool,
        highlight: usize,
        settings: &SiteSettings,
    ) -> Self {
        let router = Router::new(entry_fragment(fragment, &settings.default_path));
        let mut nav = NavState {
            menu_open,
            ..NavState::default()
        };
        nav.apply_scroll(scroll_y, settings.scroll_threshold_px);
        Self {
            route: router.active(),
            nav,
            highlight: highlight % FEATURE_COUNT,
            site_title: settings.site_title.clone(),
        }
    }
}

fn render(template: &impl Template) -> Result<String, SiteError> {
    template.render().map_err(|err| SiteError::Render(err.to_string()))
}

pub fn render_nav(view: &ViewModel) -> Result<String, SiteError> {
    let treatment = view.nav.treatment();
    render(&NavTemplate {
        brand_name: content::BRAND_NAME,
        brand_tagline: content::BRAND_TAGLINE,
        links: &NAV_LINKS,
        treatment: treatment.as_str(),
        bar_class: bar_class(treatment),
        menu_open: view.nav.menu_open,
    })
}

/// The active page block, or an empty string when the path matched no route.
pub fn render_page(view: &ViewModel) -> Result<String, SiteError> {
    match view.route.page() {
        None => Ok(String::new()),
        Some(PageId::Home) => render(&HomeTemplate {
            features: &content::FEATURES,
            highlight: view.highlight,
            stats: &content::STATS,
            partners: &content::PARTNERS,
            footer: &content::HOME_FOOTER,
        }),
        Some(PageId::Platform) => render(&PlatformTemplate {
            badges: &content::PLATFORM_BADGES,
            benefits: &content::BENEFITS,
            courses: &content::COURSES,
            testimonials: &content::TESTIMONIALS,
            footer: &content::PLATFORM_FOOTER,
        }),
        Some(PageId::Programs) => render(&ProgramsTemplate {
            programs: &content::PROGRAMS,
            learning_path: &content::LEARNING_PATH,
            footer: &content::PROGRAMS_FOOTER,
        }),
    }
}

pub fn render_document(view: &ViewModel) -> Result<String, SiteError> {
    render(&DocumentTemplate {
        site_title: &view.site_title,
        global_styles: styles::GLOBAL_STYLES,
        nav_slot_id: NAV_SLOT_ID,
        page_slot_id: PAGE_SLOT_ID,
        nav_html: render_nav(view)?,
        page_html: render_page(view)?,
    })
}

#[cfg(test)]
#[path = "../tests/view_tests.rs"]
mod tests;
