pub mod ids;
pub mod metadata;
pub mod options;
pub mod types;

pub use metadata::{
    CastMember, Certification, MediaArtwork, MediaMetadata, MediaSearchResult, MediaTrailer,
};
pub use options::{MediaScrapeOptions, MediaSearchOptions};
pub use types::{ArtworkType, CastType, Genre, MediaType};
