//! Council run orchestration types

pub mod entities;
pub mod value_objects;

pub use entities::Stage;
pub use value_objects::{
    CouncilMetadata, CouncilVerdict, StageOneResponse, StageTwoRanking, SynthesisResult,
};
