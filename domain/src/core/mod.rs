//! Core domain concepts: models, roster, questions, messages

pub mod error;
pub mod member;
pub mod message;
pub mod model;
pub mod question;

pub use error::DomainError;
pub use member::{Chairman, CouncilMember, Roster};
pub use message::{build_messages, Message, Role};
pub use model::Model;
pub use question::Question;
