use spogenre::error::GenreError;
use spogenre::utils::*;

fn assert_invalid(reference: &str) {
    match resolve_playlist_id(reference) {
        Err(GenreError::InvalidReference(_)) => {}
        other => panic!("expected InvalidReference for {:?}, got {:?}", reference, other),
    }
}

#[test]
fn test_resolve_playlist_url() {
    let id = resolve_playlist_id("https://open.spotify.com/playlist/ABC123").unwrap();
    assert_eq!(id, "ABC123");

    // plain http works the same
    let id = resolve_playlist_id("http://open.spotify.com/playlist/ABC123").unwrap();
    assert_eq!(id, "ABC123");
}

#[test]
fn test_resolve_playlist_url_drops_query_and_trailing_segments() {
    let id =
        resolve_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=a1b2c3")
            .unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");

    let id = resolve_playlist_id("https://open.spotify.com/playlist/ABC123/").unwrap();
    assert_eq!(id, "ABC123");
}

#[test]
fn test_resolve_playlist_url_with_locale_segment() {
    let id = resolve_playlist_id("https://open.spotify.com/intl-de/playlist/ABC123").unwrap();
    assert_eq!(id, "ABC123");
}

#[test]
fn test_resolve_keeps_full_id_after_prefix() {
    // the id starts right after "/playlist/", nothing is cut off
    let id = resolve_playlist_id("https://open.spotify.com/playlist/X").unwrap();
    assert_eq!(id, "X");
    assert_eq!(PLAYLIST_PATH_PREFIX.len(), 10);
}

#[test]
fn test_resolve_bare_id() {
    assert_eq!(resolve_playlist_id("XYZ789").unwrap(), "XYZ789");
    assert_eq!(
        resolve_playlist_id("37i9dQZF1DXcBWIGoYBM5M").unwrap(),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_resolve_trims_whitespace() {
    assert_eq!(resolve_playlist_id("  XYZ789\n").unwrap(), "XYZ789");
    assert_eq!(
        resolve_playlist_id(" https://open.spotify.com/playlist/ABC123 ").unwrap(),
        "ABC123"
    );
}

#[test]
fn test_resolve_spotify_uri() {
    assert_eq!(
        resolve_playlist_id("spotify:playlist:ABC123").unwrap(),
        "ABC123"
    );
    assert_eq!(
        resolve_playlist_id("spotify:user:someone:playlist:ABC123").unwrap(),
        "ABC123"
    );
}

#[test]
fn test_resolve_rejects_foreign_host() {
    assert_invalid("https://example.com/playlist/ABC123");
    assert_invalid("https://spotify.com/playlist/ABC123");
}

#[test]
fn test_resolve_rejects_links_without_playlist_id() {
    assert_invalid("https://open.spotify.com/");
    assert_invalid("https://open.spotify.com/playlist/");
    assert_invalid("https://open.spotify.com/album/ABC123");
    assert_invalid("https://open.spotify.com/intl-de");
}

#[test]
fn test_resolve_rejects_other_spotify_uris() {
    assert_invalid("spotify:album:ABC123");
    assert_invalid("spotify:playlist:");
}

#[test]
fn test_resolve_rejects_empty_input() {
    assert_invalid("");
    assert_invalid("   ");
}
