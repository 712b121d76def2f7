//! Debounced incremental search.
//!
//! [`Debouncer`] and [`SearchSession`] are the pure timing and ordering
//! pieces; [`LiveSearch`] wires them to the terminal for the interactive
//! `search` screen.

pub mod debounce;
pub mod live;

pub use debounce::{Debouncer, Generation, SearchSession, DEBOUNCE};
pub use live::LiveSearch;

/// Search terms suggested while the query is empty.
pub const POPULAR_SEARCHES: &[&str] = &[
    "React",
    "Vue",
    "Angular",
    "Next.js",
    "TypeScript",
    "Tailwind",
    "FastAPI",
    "Django",
    "Express",
    "Prisma",
    "Vite",
    "Jest",
];
