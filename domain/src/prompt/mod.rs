//! Prompt text registry

pub mod template;

pub use template::{
    PromptTemplate, COUNCIL_FAILURE_MESSAGE, DEFAULT_TITLE, SYNTHESIS_FAILURE_MESSAGE,
};
