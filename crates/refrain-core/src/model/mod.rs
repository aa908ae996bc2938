pub mod corpus;
pub mod song;

pub use corpus::Corpus;
pub use song::Song;
