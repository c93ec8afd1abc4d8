pub mod classifier;
pub mod normalizer;
pub mod unified;

pub use classifier::Classifier;
pub use normalizer::{
    CLEANING_STAGES, CleaningStage, Normalizer, RECOGNITION_STAGES, RecognitionStage,
};
pub use unified::{
    NumberParser, classify, default_parser, is_fc2, is_special, is_uncensored, parse,
    require_face_detection, trim, try_parse,
};
