use reqwest::Url;

use crate::{
    error::{GenreError, Resource},
    spotify::SpotifyClient,
    types::{PlaylistResponse, PlaylistTracksPage, Track},
};

const PLAYLIST_FIELDS: &str = "id,tracks(items(track(artists(id,name))),next,total)";

/// Retrieves the complete track listing of a playlist from the Spotify Web API.
///
/// Fetches the playlist object, then follows the `tracks.next` links until the
/// last page, so playlists longer than a single page (100 items) are returned
/// in full. Items whose track is `null` (removed from the catalog) are dropped;
/// every other item becomes one [`Track`] in playlist order.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `playlist_id` - Spotify ID of the playlist
///
/// # Errors
///
/// - [`GenreError::NotFound`] if the playlist does not exist or is private
/// - [`GenreError::Auth`] if the credential is rejected
/// - [`GenreError::Transient`] on network errors, rate limiting and 5xx
/// - [`GenreError::MalformedResponse`] if a page does not match the schema
/// - [`GenreError::ForeignLink`] if a `next` link leaves the API origin
///
/// # Example
///
/// ```
/// let client = SpotifyClient::from_env(token)?;
/// let tracks = get_playlist_tracks(&client, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("Playlist has {} tracks", tracks.len());
/// ```
pub async fn get_playlist_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
) -> Result<Vec<Track>, GenreError> {
    let resource = Resource::Playlist(playlist_id.to_string());

    let mut url = client.endpoint(&["playlists", playlist_id])?;
    url.query_pairs_mut().append_pair("fields", PLAYLIST_FIELDS);

    let playlist: PlaylistResponse = client.get_json(url.as_str(), &resource).await?;
    tracing::debug!(
        playlist_id = %playlist.id,
        total = ?playlist.tracks.total,
        "fetched playlist"
    );

    let mut tracks = Vec::new();
    let mut page = playlist.tracks;

    loop {
        let next = page.next.take();
        collect_tracks(page, &mut tracks);

        match next {
            Some(next_url) => {
                let next_url = same_origin(&url, &next_url).ok_or_else(|| {
                    GenreError::ForeignLink {
                        resource: resource.clone(),
                        url: next_url.clone(),
                    }
                })?;
                page = client
                    .get_json::<PlaylistTracksPage>(next_url.as_str(), &resource)
                    .await?;
            }
            None => break,
        }
    }

    Ok(tracks)
}

// The bearer credential is only ever sent to the API origin.
fn same_origin(base: &Url, link: &str) -> Option<Url> {
    let link = Url::parse(link).ok()?;
    (link.origin() == base.origin()).then_some(link)
}

fn collect_tracks(page: PlaylistTracksPage, tracks: &mut Vec<Track>) {
    for item in page.items {
        match item.track {
            Some(track) => tracks.push(Track::from(track)),
            None => tracing::debug!("skipping unavailable playlist item"),
        }
    }
}
