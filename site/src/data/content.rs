//! Static copy and imagery for the presentational sections of each view.

use crate::state::nav::Page;

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub page: Page,
}

pub const PRIMARY_NAV: [NavItem; 3] = [
    NavItem { label: "Portfolio", page: Page::Work },
    NavItem { label: "Expertise", page: Page::Expertise },
    NavItem { label: "Contact", page: Page::Contact },
];

pub const FOOTER_NAV: [NavItem; 4] = [
    NavItem { label: "Work", page: Page::Work },
    NavItem { label: "Project", page: Page::Project },
    NavItem { label: "Expertise", page: Page::Expertise },
    NavItem { label: "Contact", page: Page::Contact },
];

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "X / Twitter", href: "https://twitter.com/RebirthCStudio" },
    SocialLink { label: "YouTube", href: "https://www.youtube.com/channel/UCA0tjWDRF0j2KMlzHp1xnkA" },
    SocialLink { label: "Instagram", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
];

// =============================================================================
// HOME
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Capability {
    pub id: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub desc: &'static str,
    pub img: &'static str,
}

pub const CAPABILITIES: [Capability; 3] = [
    Capability {
        id: "01",
        title: "Studio.",
        tag: "PRODUCTION",
        desc: "High-end content production designed for the digital-first era.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770130189/_K2A7045_xptwf1.jpg",
    },
    Capability {
        id: "02",
        title: "Talent.",
        tag: "MANAGEMENT",
        desc: "Nurturing the next generation of cultural influencers.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770130196/_W6A7297_rapyvy.jpg",
    },
    Capability {
        id: "03",
        title: "Strategy.",
        tag: "CONSULTANCY",
        desc: "Data-driven insights meet deep cultural intuition.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770130190/_K2A7094_mcqvli.jpg",
    },
];

/// Tile footprint in the client dossier grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSize {
    Large,
    Small,
    Tall,
    Wide,
}

impl TileSize {
    pub fn class(self) -> &'static str {
        match self {
            TileSize::Large => "partner--large",
            TileSize::Small => "partner--small",
            TileSize::Tall => "partner--tall",
            TileSize::Wide => "partner--wide",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Partner {
    pub id: &'static str,
    pub name: &'static str,
    pub img: &'static str,
    pub size: TileSize,
    /// Vertical stagger in rem applied on wide screens.
    pub offset_rem: i8,
}

pub const PARTNERS: [Partner; 5] = [
    Partner {
        id: "01",
        name: "Tech Innovators",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_800/v1770130192/_W6A7206_pino4p.jpg",
        size: TileSize::Large,
        offset_rem: 0,
    },
    Partner {
        id: "02",
        name: "Bloom Luxury",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_800/v1770206155/_K2A6866_nowpow.jpg",
        size: TileSize::Small,
        offset_rem: 5,
    },
    Partner {
        id: "03",
        name: "Urban Pulse",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_800/v1770206176/1Y3A6944_e6qsrj.jpg",
        size: TileSize::Tall,
        offset_rem: -2,
    },
    Partner {
        id: "04",
        name: "Ethereal Goods",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_800/v1770130176/1Y3A5491_xfiqac.jpg",
        size: TileSize::Small,
        offset_rem: 0,
    },
    Partner {
        id: "05",
        name: "Future Form",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_800/v1770130175/1Y3A4626_b0jeme.jpg",
        size: TileSize::Wide,
        offset_rem: -5,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Review {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const REVIEWS: [Review; 3] = [
    Review {
        quote: "Rebirth defines the cultural pulse of our brand. Their strategic approach is unlike anything we've seen.",
        author: "Marcus Chen",
        role: "Global Marketing Director, Tech Innovators",
    },
    Review {
        quote: "A masterclass in intentional creativity. They brought a depth that translated to record engagement.",
        author: "Sarah J. Boateng",
        role: "Founder, Bloom Luxury",
    },
    Review {
        quote: "They understood our community better than we did, bridging the gap between legacy and the next generation.",
        author: "David Olufemi",
        role: "Head of Strategy, Urban Pulse",
    },
];

pub const HERO_IMAGE: &str =
    "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1000/v1770130175/1Y3A4626_b0jeme.jpg";

// =============================================================================
// EXPERTISE
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Expertise {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub img: &'static str,
}

pub const EXPERTISE_MATRIX: [Expertise; 6] = [
    Expertise {
        id: "01",
        title: "Creative Studio Mgmt",
        desc: "Managing creative processes to deliver innovative and impactful brand solutions.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6866_nowpow.jpg",
    },
    Expertise {
        id: "02",
        title: "Influencer Strategy",
        desc: "Developing strategies to leverage influencers for authentic brand engagement.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6867_nowpow.jpg",
    },
    Expertise {
        id: "03",
        title: "Brand Campaigns",
        desc: "Designing and executing comprehensive campaigns that drive brand awareness and loyalty.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6868_nowpow.jpg",
    },
    Expertise {
        id: "04",
        title: "Events & Activation",
        desc: "Organizing and activating events to create memorable brand experiences.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6869_nowpow.jpg",
    },
    Expertise {
        id: "05",
        title: "Digital Community",
        desc: "Building and nurturing online communities to foster brand loyalty and interaction.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6873_nowpow.jpg",
    },
    Expertise {
        id: "06",
        title: "Workshops",
        desc: "Conducting interactive workshops to inspire creativity and strategic thinking.",
        img: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6884_nowpow.jpg",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct ProcessPhase {
    pub phase: &'static str,
    pub title: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub const PROCESS_PHASES: [ProcessPhase; 4] = [
    ProcessPhase {
        phase: "01",
        title: "Discovery",
        label: "AUDIT & RESEARCH",
        desc: "We dive deep into your brand\u{2019}s DNA, current cultural standing, and future aspirations to build a \
            solid strategic foundation.",
    },
    ProcessPhase {
        phase: "02",
        title: "Strategy",
        label: "NARRATIVE DESIGN",
        desc: "We define the voice, the angle, and the unique value proposition that will make your brand a cultural \
            leader.",
    },
    ProcessPhase {
        phase: "03",
        title: "Creation",
        label: "EXECUTION",
        desc: "Our studio brings the strategy to life through high-end production, design, and multi-channel content.",
    },
    ProcessPhase {
        phase: "04",
        title: "Growth",
        label: "EVALUATE & SCALE",
        desc: "We monitor impact, engage the community, and refine the approach for long-term legacy building.",
    },
];

// =============================================================================
// CONTACT
// =============================================================================

/// Services a visitor can tick on the inquiry form.
pub const CONTACT_SERVICES: [&str; 6] = [
    "Creative Studio Mgmt",
    "Influencer Strategy",
    "Brand Campaigns",
    "Events & Activation",
    "Digital Community",
    "Workshops",
];

/// Backdrops cycled by the form step in view.
pub const CONTACT_BACKGROUNDS: [&str; 4] = [
    "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770130192/_W6A7206_pino4p.jpg",
    "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770130190/_K2A7094_mcqvli.jpg",
    "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206155/_K2A6866_nowpow.jpg",
    "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770206160/_W6A6885_nghepk.jpg",
];
