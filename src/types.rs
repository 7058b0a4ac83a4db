use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub type PlaylistId = String;
pub type ArtistId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub genres: Vec<String>,
}

/// One playlist entry, reduced to the artists credited on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub artist_ids: Vec<ArtistId>,
}

impl Track {
    pub fn new<I, S>(artist_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ArtistId>,
    {
        Track {
            artist_ids: artist_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let artist_ids = track
            .artists
            .into_iter()
            .filter_map(|artist| match artist.id {
                Some(id) => Some(id),
                None => {
                    // local files carry artists without a catalog id
                    tracing::debug!(artist = %artist.name, "skipping artist without catalog id");
                    None
                }
            })
            .collect();

        Track { artist_ids }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    pub tracks: PlaylistTracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// `null` for tracks that were removed from the catalog.
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    /// Podcast episodes have no `artists` field.
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<ArtistId>,
    #[serde(default)]
    pub name: String,
}

/// A genre with its share of all genre hits in the playlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGenre {
    pub genre: String,
    pub count: u64,
    pub percentage: f64,
}

/// Everything the shell needs to render a playlist breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreReport {
    pub playlist_id: PlaylistId,
    pub total: u64,
    pub occurrences: usize,
    pub skipped: u64,
    pub genres: Vec<RankedGenre>,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub count: u64,
    pub percentage: String,
}

impl From<&RankedGenre> for GenreTableRow {
    fn from(ranked: &RankedGenre) -> Self {
        GenreTableRow {
            genre: ranked.genre.clone(),
            count: ranked.count,
            percentage: format!("{:.2}%", ranked.percentage),
        }
    }
}
