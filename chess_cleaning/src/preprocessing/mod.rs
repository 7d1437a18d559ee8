pub mod pipeline;
pub mod validator;

pub use pipeline::{
    clean_chess_games, CleaningOutcome, CleaningPipeline, CleaningStage, StageSummary,
};
pub use validator::{
    check_ids_are_unique, frames_equal, report_frames_match, CleanedDataValidator, IdUniqueness,
    ValidationResult, ValidationStats,
};
