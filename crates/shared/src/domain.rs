use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(SubscriptionId);
id_newtype!(TimerId);

pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Platform,
    Programs,
}

impl PageId {
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Platform => "platform",
            PageId::Programs => "programs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
}

/// Declared routes, matched by exact path equality.
pub const ROUTES: [Route; 3] = [
    Route {
        path: "/",
        page: PageId::Home,
    },
    Route {
        path: "/guvi",
        page: PageId::Platform,
    },
    Route {
        path: "/programs",
        page: PageId::Programs,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Fragment {
    Path(String),
    Anchor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMatch {
    Page(PageId),
    Unmatched(String),
}

impl RouteMatch {
    pub fn page(&self) -> Option<PageId> {
        match self {
            RouteMatch::Page(page) => Some(*page),
            RouteMatch::Unmatched(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    HashChange,
    Scroll,
    Click,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 3] = [
        ListenerKind::HashChange,
        ListenerKind::Scroll,
        ListenerKind::Click,
    ];

    /// DOM event type name.
    pub fn event_type(self) -> &'static str {
        match self {
            ListenerKind::HashChange => "hashchange",
            ListenerKind::Scroll => "scroll",
            ListenerKind::Click => "click",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Award,
    ArrowRight,
    Briefcase,
    CheckCircle,
    Clock,
    Code,
    Globe,
    GraduationCap,
    Layers,
    Menu,
    PlayCircle,
    Rocket,
    Star,
    Target,
    TrendingUp,
    Users,
    X,
    Zap,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::ArrowRight => "arrow-right",
            Icon::Briefcase => "briefcase",
            Icon::CheckCircle => "check-circle",
            Icon::Clock => "clock",
            Icon::Code => "code",
            Icon::Globe => "globe",
            Icon::GraduationCap => "graduation-cap",
            Icon::Layers => "layers",
            Icon::Menu => "menu",
            Icon::PlayCircle => "play-circle",
            Icon::Rocket => "rocket",
            Icon::Star => "star",
            Icon::Target => "target",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::X => "x",
            Icon::Zap => "zap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub call_to_action: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub icon: Icon,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartnerCard {
    pub title: &'static str,
    pub icon: Icon,
    pub body: &'static str,
    pub points: &'static [&'static str],
    pub accent: &'static str,
    pub accent_pair: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub icon: Icon,
    pub duration: &'static str,
    pub level: &'static str,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Program {
    pub title: &'static str,
    pub duration: &'static str,
    pub kind: &'static str,
    pub icon: Icon,
    pub highlights: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningStep {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}
