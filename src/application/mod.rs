pub mod confidence;
pub mod translate;
