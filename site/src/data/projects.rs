//! Compiled-in portfolio case studies.
//!
//! Records are `'static` and never created or destroyed at runtime. Lookups
//! return `Option` and callers that render a record use `resolve_project`,
//! which falls back to the default case study for unknown ids.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Project shown when nothing (or an unknown id) is selected.
pub const DEFAULT_PROJECT_ID: &str = "fix-the-country";

/// One credit line on a case study.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub role: &'static str,
    pub name: &'static str,
}

/// Grid width of a gallery fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    /// Full row.
    Full,
    /// Five of twelve columns on wide screens.
    Narrow,
    /// Seven of twelve columns on wide screens, dropped below its row neighbour.
    Wide,
}

impl Span {
    pub fn class(self) -> &'static str {
        match self {
            Span::Full => "fragment--full",
            Span::Narrow => "fragment--narrow",
            Span::Wide => "fragment--wide",
        }
    }
}

/// Frame ratio of a gallery fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    /// 21:9, relaxing to 16:9 on wide screens.
    Panorama,
    /// 3:4.
    Portrait,
    /// 4:3.
    Landscape,
}

impl Aspect {
    pub fn class(self) -> &'static str {
        match self {
            Aspect::Panorama => "fragment__frame--panorama",
            Aspect::Portrait => "fragment__frame--portrait",
            Aspect::Landscape => "fragment__frame--landscape",
        }
    }
}

/// One media item in a case study gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    pub url: &'static str,
    pub label: &'static str,
    pub meta: &'static str,
    pub span: Span,
    pub aspect: Aspect,
    /// Scroll parallax weight; the image travels `parallax * 100` percent of
    /// its height while its frame crosses the viewport. Negative moves up.
    pub parallax: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub year: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    pub services: &'static [&'static str],
    pub location: &'static str,
    pub description: &'static str,
    pub team: &'static [TeamMember],
    pub fragments: &'static [Fragment],
}

impl ProjectRecord {
    /// Archive code shown above the title, e.g. `UNIT_KALYS_HOUSE`.
    pub fn unit_code(&self) -> String {
        format!("UNIT_{}", self.id.replace('-', "_").to_uppercase())
    }
}

pub static PROJECTS: [ProjectRecord; 2] = [
    ProjectRecord {
        id: "fix-the-country",
        title: "Fix The Country",
        client: "Grassroots Movement",
        year: "2021-2024",
        category: "Digital Strategy",
        image_url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770130192/_W6A7206_pino4p.jpg",
        services: &["Creative Strategy", "Digital Activism", "Visual Identity"],
        location: "Accra / Global",
        description: "A revolutionary digital campaign that mobilized a nation. We developed a visual language \
            that spoke to the aspirations of a new generation, creating a brand that became synonymous with the \
            pursuit of accountability. This project redefined how movements are branded in the digital age.",
        team: &[
            TeamMember { role: "Director", name: "Rebirth Studio" },
            TeamMember { role: "Strategy", name: "David Olufemi" },
            TeamMember { role: "Digital Lead", name: "Marcus Chen" },
        ],
        fragments: &[
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1600/v1770130192/_W6A7206_pino4p.jpg",
                label: "ARCHIVE_01",
                meta: "PRIMARY_BANNER",
                span: Span::Full,
                aspect: Aspect::Panorama,
                parallax: 0.05,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1000/v1770130189/_K2A7045_xptwf1.jpg",
                label: "ARCHIVE_02",
                meta: "DETAIL_VIEW_01",
                span: Span::Narrow,
                aspect: Aspect::Portrait,
                parallax: 0.12,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770206155/1Y3A6629_ozf2mz.jpg",
                label: "ARCHIVE_03",
                meta: "STREET_ACTIVATION",
                span: Span::Wide,
                aspect: Aspect::Landscape,
                parallax: -0.08,
            },
        ],
    },
    ProjectRecord {
        id: "kalys-house",
        title: "Kaly's House",
        client: "Kalyjay / Digital Series",
        year: "2024",
        category: "Content Production",
        image_url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770206155/1Y3A4697_x5zbwu.jpg",
        services: &["Content Production", "Talent Management", "Creative Direction"],
        location: "Ghana / Accra / Global",
        description: "An immersive 24-hour documentary series capturing the authentic life of digital influencer \
            Kalyjay. We crafted a narrative that showcased the raw energy of contemporary African youth culture, \
            blending street photography with intimate storytelling.",
        team: &[
            TeamMember { role: "Producer", name: "Sarah Boateng" },
            TeamMember { role: "Editor", name: "Marcus Chen" },
            TeamMember { role: "Creative Director", name: "David Olufemi" },
        ],
        fragments: &[
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,dpr_auto,w_1200/v1770130189/_K2A6899_xtowwf.jpg",
                label: "ARCHIVE_01",
                meta: "PRIMARY_BANNER",
                span: Span::Full,
                aspect: Aspect::Panorama,
                parallax: 0.05,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1000/v1770130189/_K2A7045_xptwf1.jpg",
                label: "ARCHIVE_02",
                meta: "DETAIL_VIEW_01",
                span: Span::Narrow,
                aspect: Aspect::Portrait,
                parallax: 0.12,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770206155/1Y3A4697_x5zbwu.jpg",
                label: "ARCHIVE_03",
                meta: "STREET_ACTIVATION",
                span: Span::Wide,
                aspect: Aspect::Landscape,
                parallax: -0.08,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770206176/1Y3A6944_e6qsrj.jpg",
                label: "ARCHIVE_04",
                meta: "STREET_ACTIVATION",
                span: Span::Wide,
                aspect: Aspect::Landscape,
                parallax: -0.08,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770206157/_K2A6888_p8zcd7.jpg",
                label: "ARCHIVE_05",
                meta: "STREET_ACTIVATION",
                span: Span::Wide,
                aspect: Aspect::Landscape,
                parallax: -0.08,
            },
            Fragment {
                url: "https://res.cloudinary.com/dnz71cs9x/image/upload/f_auto,q_auto,w_1200/v1770206155/_K2A6866_nowpow.jpg",
                label: "ARCHIVE_06",
                meta: "STREET_ACTIVATION",
                span: Span::Wide,
                aspect: Aspect::Landscape,
                parallax: -0.08,
            },
        ],
    },
];

/// Look up a case study by id. Unknown ids yield `None`.
pub fn get_project_by_id(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// The record to render for `id`, falling back to the default case study.
pub fn resolve_project(id: &str) -> &'static ProjectRecord {
    get_project_by_id(id)
        .or_else(|| get_project_by_id(DEFAULT_PROJECT_ID))
        .unwrap_or(&PROJECTS[0])
}

/// The case study after `id` in listing order, wrapping to the first.
pub fn next_project(id: &str) -> &'static ProjectRecord {
    let current = resolve_project(id);
    let idx = PROJECTS.iter().position(|p| p.id == current.id).unwrap_or(0);
    &PROJECTS[(idx + 1) % PROJECTS.len()]
}
