pub mod chapter_writer;
pub mod client;
pub mod composer;
pub mod transcriber;
pub mod transcript_analyzer;
