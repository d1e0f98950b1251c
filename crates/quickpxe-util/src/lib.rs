pub mod matching;
pub mod split;
