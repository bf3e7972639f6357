mod language;
mod summary_length;
mod team;

pub use language::Language;
pub use summary_length::SummaryLength;
pub use team::{Team, TeamLogos, TEAMS};
