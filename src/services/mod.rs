pub mod advice;
pub mod catalog;
pub mod occasion;
pub mod outfit;
pub mod palette;
pub mod providers;
pub mod scoring;
pub mod tagging;

pub use outfit::{OutfitEngine, OutfitStrategy};
pub use tagging::AutoTagger;
