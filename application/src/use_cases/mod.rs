//! Application use cases

pub mod bootstrap;
pub mod dispatch;
pub mod generate_title;
pub mod run_council;

pub use bootstrap::{BootstrapCouncilUseCase, MemberStatus};
pub use dispatch::dispatch;
pub use generate_title::GenerateTitleUseCase;
pub use run_council::{RunCouncilError, RunCouncilInput, RunCouncilUseCase};
