use crate::{
    error::{GenreError, Resource},
    spotify::SpotifyClient,
    types::Artist,
};

/// Retrieves the metadata of a single artist from the Spotify Web API.
///
/// The returned [`Artist`] carries the genre tags Spotify associates with the
/// artist; the list may be empty.
///
/// # Errors
///
/// Same taxonomy as playlist lookups, scoped to [`Resource::Artist`].
///
/// # Example
///
/// ```
/// let artist = get_artist(&client, "4NHQUGzhtTLFvgF5SZesLK").await?;
/// println!("{} plays {}", artist.name, artist.genres.join(", "));
/// ```
pub async fn get_artist(client: &SpotifyClient, artist_id: &str) -> Result<Artist, GenreError> {
    let resource = Resource::Artist(artist_id.to_string());
    let url = client.endpoint(&["artists", artist_id])?;

    client.get_json(url.as_str(), &resource).await
}
