pub mod core;
pub mod engine;
pub mod export;
pub mod i18n;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod vocabulary;

pub use crate::core::{
    CardDirection,
    Category,
    Outcome,
    TangoError,
    TargetLanguage,
    Word,
};
pub use engine::{
    Command,
    Engine,
    LoadState,
};
pub use session::{
    CardView,
    Progress,
    Session,
    StatsReport,
};
pub use vocabulary::WordSource;
