// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::SpotifyClient;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const IMAGINE_TRACK_ID: &str = "0GjEhVFGZW8afUYGChu3Rr";

    fn track_response() -> serde_json::Value {
        serde_json::json!({
            "id": IMAGINE_TRACK_ID,
            "name": "Imagine",
            "artists": [{ "name": "John Lennon" }],
            "album": {
                "name": "Imagine",
                "images": [{ "url": "https://i.scdn.co/image/front" }]
            },
            "preview_url": "https://p.scdn.co/mp3-preview/abc",
            "external_urls": {
                "spotify": "https://open.spotify.com/track/0GjEhVFGZW8afUYGChu3Rr"
            }
        })
    }

    fn search_response() -> serde_json::Value {
        serde_json::json!({
            "tracks": {
                "items": [
                    track_response(),
                    {
                        "id": "1JO1xLtVc8mWhIoE3YaCL0",
                        "name": "Imagine",
                        "artists": [{ "name": "John Lennon" }],
                        "album": { "name": "The John Lennon Collection", "images": [] },
                        "external_urls": {}
                    }
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_lookup_track() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/tracks/{}", IMAGINE_TRACK_ID)))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(track_response()))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .access_token("test-token")
            .build()
            .unwrap();

        let track = client.lookup_track(IMAGINE_TRACK_ID).await.unwrap();

        assert_eq!(track.id, IMAGINE_TRACK_ID);
        assert_eq!(track.name, "Imagine");
        assert_eq!(track.artists[0].name, "John Lennon");
    }

    #[tokio::test]
    async fn test_search_tracks() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "John Lennon Imagine"))
            .and(query_param("type", "track"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_response()))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap();

        let tracks = client.search_tracks("John Lennon Imagine", 5).await.unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].album.as_ref().unwrap().name, "The John Lennon Collection");
    }

    #[tokio::test]
    async fn test_search_without_tracks_key_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap();

        let tracks = client.search_tracks("anything", 5).await.unwrap();
        assert!(tracks.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/tracks/{}", IMAGINE_TRACK_ID)))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap();

        let result = client.lookup_track(IMAGINE_TRACK_ID).await;
        assert!(matches!(
            result.unwrap_err(),
            crate::SpotifyError::Unauthorized
        ));
    }

    #[tokio::test]
    async fn test_not_found_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tracks/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap();

        let result = client.lookup_track("missing").await;
        assert!(matches!(
            result.unwrap_err(),
            crate::SpotifyError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap();

        let result = client.search_tracks("anything", 5).await;
        assert!(matches!(
            result.unwrap_err(),
            crate::SpotifyError::RateLimitExceeded
        ));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/tracks/{}", IMAGINE_TRACK_ID)))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::builder()
            .base_url(mock_server.uri())
            .build()
            .unwrap();

        let result = client.lookup_track(IMAGINE_TRACK_ID).await;
        match result.unwrap_err() {
            crate::SpotifyError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream broke");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
