use std::env;

use serde_json::json;
use spogenre::aggregate;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

// Single test: the API location comes from the process environment.
#[tokio::test]
async fn test_aggregate_uses_configured_api_and_credential() {
    let server = MockServer::start().await;

    unsafe {
        env::set_var("SPOTIFY_API_URL", format!("{}/", server.uri()));
        env::remove_var("SPOGENRE_MAX_IN_FLIGHT");
        env::remove_var("SPOGENRE_REQUEST_TIMEOUT_SECS");
    }

    Mock::given(method("GET"))
        .and(path("/playlists/P1"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "P1",
            "tracks": {
                "items": [
                    { "track": { "artists": [
                        { "id": "A", "name": "Alpha" },
                        { "id": "B", "name": "Beta" }
                    ] } },
                    { "track": { "artists": [{ "id": "A", "name": "Alpha" }] } }
                ],
                "next": null,
                "total": 2
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    for (id, genres) in [("A", vec!["pop", "rock"]), ("B", vec!["pop"])] {
        Mock::given(method("GET"))
            .and(path(format!("/artists/{}", id)))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "name": format!("Artist {}", id),
                "genres": genres
            })))
            .mount(&server)
            .await;
    }

    let report = aggregate("https://open.spotify.com/playlist/P1", "tok")
        .await
        .unwrap();

    assert_eq!(report.playlist_id, "P1");
    assert_eq!(report.total, 5);
    assert_eq!(report.genres.len(), 2);
    assert_eq!(report.genres[0].genre, "pop");
    assert_eq!(report.genres[0].percentage, 60.0);
    assert_eq!(report.genres[1].genre, "rock");
    assert_eq!(report.genres[1].percentage, 40.0);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
    for request in &requests {
        assert_eq!(
            request.headers.get("authorization").unwrap(),
            "Bearer tok"
        );
    }
}
