pub mod streams;

pub use streams::RandomStreams;
