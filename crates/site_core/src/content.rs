//! Literal page content. Created at startup, never mutated.

use shared::domain::{
    Badge, Benefit, Course, Feature, Icon, LearningStep, PartnerCard, Program, Stat, Testimonial,
};

pub const BRAND_NAME: &str = "Kongu V GUVI";
pub const BRAND_TAGLINE: &str = "Learn. Build. Excel.";

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::GraduationCap,
        title: "Kongu Excellence",
        desc: "75+ years of educational leadership",
    },
    Feature {
        icon: Icon::Code,
        title: "GUVI Learning",
        desc: "Industry-relevant tech skills",
    },
    Feature {
        icon: Icon::Rocket,
        title: "Career Launch",
        desc: "100% placement support",
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        number: "75+",
        label: "Years Legacy",
        icon: Icon::Award,
    },
    Stat {
        number: "15K+",
        label: "Students Trained",
        icon: Icon::Users,
    },
    Stat {
        number: "500+",
        label: "Industry Partners",
        icon: Icon::Briefcase,
    },
    Stat {
        number: "95%",
        label: "Placement Rate",
        icon: Icon::TrendingUp,
    },
];

pub const PARTNERS: [PartnerCard; 2] = [
    PartnerCard {
        title: "Kongu Engineering College",
        icon: Icon::GraduationCap,
        body: "Established in 1984, Kongu Engineering College stands as a beacon of excellence in engineering education. With NAAC A++ accreditation and autonomous status, we provide world-class infrastructure and experienced faculty to shape future engineers.",
        points: &[
            "NAAC A++ Accredited & Autonomous",
            "State-of-the-art Labs & Infrastructure",
            "Industry-Academia Collaboration",
        ],
        accent: "blue",
        accent_pair: "purple",
    },
    PartnerCard {
        title: "GUVI Learning Platform",
        icon: Icon::Code,
        body: "An IIT-M & IIM-A incubated EdTech platform revolutionizing tech education in vernacular languages. With 2.5M+ learners globally, GUVI delivers industry-relevant courses in programming, data science, AI/ML, and full-stack development.",
        points: &[
            "IIT-M & IIM-A Incubated",
            "2.5M+ Global Learners",
            "Industry-Recognized Certifications",
        ],
        accent: "orange",
        accent_pair: "pink",
    },
];

pub const COURSES: [Course; 4] = [
    Course {
        title: "Full Stack Development",
        icon: Icon::Layers,
        duration: "6 months",
        level: "Beginner to Advanced",
        skills: &["React", "Node.js", "MongoDB", "Express"],
        color: "from-blue-500 to-cyan-500",
    },
    Course {
        title: "Data Science & AI",
        icon: Icon::Target,
        duration: "8 months",
        level: "Intermediate",
        skills: &["Python", "Machine Learning", "Deep Learning", "NLP"],
        color: "from-purple-500 to-pink-500",
    },
    Course {
        title: "Cloud Computing",
        icon: Icon::Globe,
        duration: "5 months",
        level: "Intermediate",
        skills: &["AWS", "Azure", "DevOps", "Kubernetes"],
        color: "from-orange-500 to-red-500",
    },
    Course {
        title: "Mobile App Development",
        icon: Icon::Zap,
        duration: "6 months",
        level: "Beginner to Advanced",
        skills: &["React Native", "Flutter", "iOS", "Android"],
        color: "from-green-500 to-teal-500",
    },
];

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: Icon::PlayCircle,
        title: "Learn in Your Language",
        desc: "Content available in Tamil, Hindi, Telugu & more",
    },
    Benefit {
        icon: Icon::Award,
        title: "Industry Certifications",
        desc: "Recognized credentials from top companies",
    },
    Benefit {
        icon: Icon::Users,
        title: "Live Mentorship",
        desc: "Direct interaction with industry experts",
    },
    Benefit {
        icon: Icon::Briefcase,
        title: "100% Placement Support",
        desc: "Dedicated career services & job assistance",
    },
    Benefit {
        icon: Icon::Clock,
        title: "Self-Paced Learning",
        desc: "Study at your own convenience",
    },
    Benefit {
        icon: Icon::Star,
        title: "Hands-on Projects",
        desc: "Build real-world applications",
    },
];

pub const PLATFORM_BADGES: [Badge; 3] = [
    Badge {
        icon: Icon::Users,
        label: "2.5M+ Learners",
    },
    Badge {
        icon: Icon::Award,
        label: "500+ Industry Partners",
    },
    Badge {
        icon: Icon::Star,
        label: "4.8/5 Rating",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        role: "Software Engineer @ Google",
        content: "GUVI's practical approach helped me land my dream job. The projects and mentorship were invaluable.",
        rating: 5,
    },
    Testimonial {
        name: "Raj Kumar",
        role: "Data Scientist @ Amazon",
        content: "The Tamil content made learning complex concepts so much easier. Best investment in my career!",
        rating: 5,
    },
    Testimonial {
        name: "Aisha Patel",
        role: "Full Stack Developer @ Microsoft",
        content: "From zero coding knowledge to working at Microsoft - GUVI made it possible in just 8 months.",
        rating: 5,
    },
];

pub const PROGRAMS: [Program; 3] = [
    Program {
        title: "Integrated B.Tech + Tech Certification",
        duration: "4 Years",
        kind: "Degree Program",
        icon: Icon::GraduationCap,
        highlights: &[
            "B.Tech from Kongu Engineering College",
            "Industry certifications from GUVI",
            "6-month internship with top companies",
            "Guaranteed placement assistance",
        ],
        color: "from-blue-500 to-purple-500",
    },
    Program {
        title: "Professional Bootcamp Programs",
        duration: "3-6 Months",
        kind: "Intensive Training",
        icon: Icon::Rocket,
        highlights: &[
            "Full Stack, Data Science, Cloud tracks",
            "100% hands-on project-based learning",
            "Live sessions with industry mentors",
            "Job guarantee with partner companies",
        ],
        color: "from-orange-500 to-pink-500",
    },
    Program {
        title: "Weekend Upskilling Programs",
        duration: "3-4 Months",
        kind: "Part-time Learning",
        icon: Icon::Clock,
        highlights: &[
            "For working professionals",
            "Weekend live classes + self-paced content",
            "Industry-recognized certifications",
            "Career transition support",
        ],
        color: "from-green-500 to-teal-500",
    },
];

pub const LEARNING_PATH: [LearningStep; 5] = [
    LearningStep {
        step: "1",
        title: "Foundation",
        desc: "Master programming fundamentals",
    },
    LearningStep {
        step: "2",
        title: "Specialization",
        desc: "Choose your tech domain",
    },
    LearningStep {
        step: "3",
        title: "Projects",
        desc: "Build real-world applications",
    },
    LearningStep {
        step: "4",
        title: "Certification",
        desc: "Get industry credentials",
    },
    LearningStep {
        step: "5",
        title: "Placement",
        desc: "Land your dream job",
    },
];

pub struct Footer {
    pub notice: &'static str,
    pub tagline: &'static str,
}

pub const HOME_FOOTER: Footer = Footer {
    notice: "© 2024 Kongu Engineering College × GUVI. All rights reserved.",
    tagline: "Empowering the next generation of tech leaders",
};

pub const PLATFORM_FOOTER: Footer = Footer {
    notice: "© 2024 GUVI - An IIT Madras & IIM Ahmedabad Incubated Company",
    tagline: "Transforming lives through vernacular tech education",
};

pub const PROGRAMS_FOOTER: Footer = Footer {
    notice: "© 2024 Kongu Engineering College × GUVI. All rights reserved.",
    tagline: "Building tomorrow's tech leaders, today",
};
