pub mod errors;
pub mod models;
pub mod scheduler;
pub mod utils;

pub use errors::FolioError;
pub use models::{
    FilterButton,
    ProjectCard,
    SectionInfo,
    SkillInfo,
    StatInfo,
};
pub use scheduler::{
    Clock,
    ManualClock,
    SystemClock,
    TimerQueue,
};
