//! Built-in compatibility recommendations.
//!
//! The API's detail payload may carry a compatibility map; when it does not,
//! the matrix falls back to this curated per-stack table. Rules are keyed by
//! (category, stack name) in one place so adding a stack means adding a row,
//! not another branch in the view.

use crate::api::types::StackCategory;

/// Compatibility verdict for one peer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatStatus {
    Compatible,
    Incompatible,
    Warning,
    Unknown,
}

impl CompatStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Compatible => "compatible",
            Self::Incompatible => "incompatible",
            Self::Warning => "warning",
            Self::Unknown => "unknown",
        }
    }
}

/// One recommended-peer row in the matrix.
#[derive(Debug, Clone, Copy)]
pub struct CompatEntry {
    pub name: &'static str,
    pub versions: &'static [&'static str],
    pub status: CompatStatus,
    pub note: Option<&'static str>,
}

const fn entry(
    name: &'static str,
    versions: &'static [&'static str],
    status: CompatStatus,
) -> CompatEntry {
    CompatEntry {
        name,
        versions,
        status,
        note: None,
    }
}

const REACT_PEERS: &[CompatEntry] = &[
    entry("TypeScript", &["4.9+", "5.0+"], CompatStatus::Compatible),
    entry("Next.js", &["13.0+", "14.0+"], CompatStatus::Compatible),
    entry("Tailwind CSS", &["3.0+"], CompatStatus::Compatible),
    entry("Vite", &["4.0+", "5.0+"], CompatStatus::Compatible),
    entry("Webpack", &["5.0+"], CompatStatus::Compatible),
    entry("ESLint", &["8.0+"], CompatStatus::Compatible),
    entry("Jest", &["29.0+"], CompatStatus::Compatible),
    entry("React Router", &["6.0+"], CompatStatus::Compatible),
    CompatEntry {
        name: "Material-UI",
        versions: &["5.0+"],
        status: CompatStatus::Warning,
        note: Some("Some breaking changes"),
    },
    entry("Styled Components", &["5.0+", "6.0+"], CompatStatus::Compatible),
];

const VUE_PEERS: &[CompatEntry] = &[
    entry("TypeScript", &["4.9+", "5.0+"], CompatStatus::Compatible),
    entry("Nuxt.js", &["3.0+"], CompatStatus::Compatible),
    entry("Vite", &["4.0+", "5.0+"], CompatStatus::Compatible),
    entry("Vue Router", &["4.0+"], CompatStatus::Compatible),
    entry("Pinia", &["2.0+"], CompatStatus::Compatible),
    entry("Vuetify", &["3.0+"], CompatStatus::Compatible),
    entry("Tailwind CSS", &["3.0+"], CompatStatus::Compatible),
];

const ANGULAR_PEERS: &[CompatEntry] = &[
    entry("TypeScript", &["4.9+", "5.0+"], CompatStatus::Compatible),
    entry("RxJS", &["7.0+"], CompatStatus::Compatible),
    entry("Angular Material", &["17.0+"], CompatStatus::Compatible),
    entry("NgRx", &["17.0+"], CompatStatus::Compatible),
    entry("Jasmine", &["4.0+"], CompatStatus::Compatible),
    CompatEntry {
        name: "Karma",
        versions: &["6.0+"],
        status: CompatStatus::Warning,
        note: Some("Consider migrating to Jest"),
    },
];

const EXPRESS_PEERS: &[CompatEntry] = &[
    entry("Node.js", &["16+", "18+", "20+"], CompatStatus::Compatible),
    entry("TypeScript", &["4.9+", "5.0+"], CompatStatus::Compatible),
    entry("MongoDB", &["5.0+", "6.0+"], CompatStatus::Compatible),
    entry("PostgreSQL", &["13+", "14+", "15+"], CompatStatus::Compatible),
    entry("Redis", &["6.0+", "7.0+"], CompatStatus::Compatible),
    entry("Jest", &["29.0+"], CompatStatus::Compatible),
    entry("Passport.js", &["0.6+"], CompatStatus::Compatible),
];

const FASTAPI_PEERS: &[CompatEntry] = &[
    entry("Python", &["3.8+", "3.9+", "3.10+", "3.11+"], CompatStatus::Compatible),
    entry("Pydantic", &["2.0+"], CompatStatus::Compatible),
    entry("SQLAlchemy", &["1.4+", "2.0+"], CompatStatus::Compatible),
    entry("PostgreSQL", &["13+", "14+", "15+"], CompatStatus::Compatible),
    entry("Redis", &["6.0+", "7.0+"], CompatStatus::Compatible),
    entry("Pytest", &["7.0+"], CompatStatus::Compatible),
];

const TAILWIND_PEERS: &[CompatEntry] = &[
    entry("React", &["17+", "18+"], CompatStatus::Compatible),
    entry("Vue", &["3.0+"], CompatStatus::Compatible),
    entry("Angular", &["15+", "16+", "17+"], CompatStatus::Compatible),
    entry("Next.js", &["13+", "14+"], CompatStatus::Compatible),
    entry("Nuxt.js", &["3.0+"], CompatStatus::Compatible),
    entry("Vite", &["4.0+", "5.0+"], CompatStatus::Compatible),
    entry("PostCSS", &["8.0+"], CompatStatus::Compatible),
    entry("Autoprefixer", &["10.0+"], CompatStatus::Compatible),
];

const POSTGRESQL_PEERS: &[CompatEntry] = &[
    entry("Node.js", &["16+", "18+", "20+"], CompatStatus::Compatible),
    entry("Python", &["3.8+", "3.9+", "3.10+", "3.11+"], CompatStatus::Compatible),
    entry("Prisma", &["4.0+", "5.0+"], CompatStatus::Compatible),
    entry("SQLAlchemy", &["1.4+", "2.0+"], CompatStatus::Compatible),
    entry("TypeORM", &["0.3+"], CompatStatus::Compatible),
    entry("Sequelize", &["6.0+"], CompatStatus::Compatible),
];

/// Fallback rows for categories without curated rules.
const GENERIC_PEERS: &[CompatEntry] = &[
    entry("Node.js", &["16+", "18+", "20+"], CompatStatus::Compatible),
    entry("TypeScript", &["4.9+", "5.0+"], CompatStatus::Compatible),
    entry("ESLint", &["8.0+"], CompatStatus::Compatible),
    entry("Prettier", &["2.0+", "3.0+"], CompatStatus::Compatible),
];

/// Look up the curated recommendations for a stack.
///
/// Categories with curated coverage (frontend, backend, styling, database)
/// return an empty slice for stacks missing from the table; every other
/// category gets the generic toolchain rows.
pub fn recommendations(name: &str, category: StackCategory) -> &'static [CompatEntry] {
    use StackCategory::{Backend, Database, Frontend, Styling};

    let key = name.to_lowercase();
    match (category, key.as_str()) {
        (Frontend, "react") => REACT_PEERS,
        (Frontend, "vue") => VUE_PEERS,
        (Frontend, "angular") => ANGULAR_PEERS,
        (Backend, "express") => EXPRESS_PEERS,
        (Backend, "fastapi") => FASTAPI_PEERS,
        (Styling, "tailwind css") => TAILWIND_PEERS,
        (Database, "postgresql") => POSTGRESQL_PEERS,
        (Frontend | Backend | Styling | Database, _) => &[],
        _ => GENERIC_PEERS,
    }
}
