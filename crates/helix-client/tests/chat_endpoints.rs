use helix_client::api::{
    AnnouncementColor, GetChannelChatBadgesParams, GetChannelEmotesParams, GetChatSettingsParams,
    GetEmoteSetsParams, GetUserChatColorParams, GetUserEmotesParams, SendChatAnnouncementParams,
    SendChatMessageParams, SendShoutoutParams, UpdateChatSettingsParams, UpdateUserChatColorParams,
};
use helix_client::{ClientConfig, HelixClient, Token};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HelixClient {
    let config = ClientConfig::new("test-client").with_base_url(&server.uri());
    HelixClient::with_config(config).unwrap()
}

fn token() -> Token {
    Token::new("test-token")
}

#[tokio::test]
async fn channel_badges() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/badges"))
        .and(query_param("broadcaster_id", "135093069"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "set_id": "subscriber",
                "versions": [{
                    "id": "0",
                    "image_url_1x": "https://static-cdn.jtvnw.net/badges/v1/x/1",
                    "image_url_2x": "https://static-cdn.jtvnw.net/badges/v1/x/2",
                    "image_url_4x": "https://static-cdn.jtvnw.net/badges/v1/x/3",
                    "title": "Subscriber",
                    "description": "Subscriber",
                    "click_action": "subscribe_to_channel",
                    "click_url": null
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = GetChannelChatBadgesParams {
        broadcaster_id: "135093069".into(),
    };
    let resp = client_for(&server)
        .get_channel_chat_badges(&token(), &params)
        .await
        .unwrap();

    assert_eq!(resp.data.badges.len(), 1);
    assert_eq!(resp.data.badges[0].set_id, "subscriber");
    assert_eq!(resp.data.badges[0].versions[0].click_url, None);
}

#[tokio::test]
async fn channel_emotes_keep_template() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/emotes"))
        .and(query_param("broadcaster_id", "141981764"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "304456832",
                "name": "twitchdevPitchfork",
                "images": {
                    "url_1x": "https://static-cdn.jtvnw.net/emoticons/v2/304456832/static/light/1.0",
                    "url_2x": "https://static-cdn.jtvnw.net/emoticons/v2/304456832/static/light/2.0",
                    "url_4x": "https://static-cdn.jtvnw.net/emoticons/v2/304456832/static/light/3.0"
                },
                "tier": "1000",
                "emote_type": "subscriptions",
                "emote_set_id": "301590448",
                "format": ["static"],
                "scale": ["1.0", "2.0", "3.0"],
                "theme_mode": ["light", "dark"]
            }],
            "template": "https://static-cdn.jtvnw.net/emoticons/v2/{{id}}/{{format}}/{{theme_mode}}/{{scale}}"
        })))
        .mount(&server)
        .await;

    let params = GetChannelEmotesParams {
        broadcaster_id: "141981764".into(),
    };
    let resp = client_for(&server)
        .get_channel_emotes(&token(), &params)
        .await
        .unwrap();

    let emote = &resp.data.emotes[0];
    assert_eq!(emote.tier, "1000");
    assert_eq!(
        resp.data.image_url(&emote.id, "static", "light", "1.0"),
        emote.images.url_1x
    );
}

#[tokio::test]
async fn emote_sets_send_repeated_ids_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/emotes/set"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "template": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = GetEmoteSetsParams {
        emote_set_ids: vec!["300".into(), "100".into(), "200".into()],
    };
    client_for(&server)
        .get_emote_sets(&token(), &params)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("emote_set_id".to_string(), "300".to_string()),
            ("emote_set_id".to_string(), "100".to_string()),
            ("emote_set_id".to_string(), "200".to_string()),
        ]
    );
}

#[tokio::test]
async fn user_emotes_page_through_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/emotes/user"))
        .and(query_param("user_id", "42"))
        .and(query_param("after", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "1",
                "name": "Kappa",
                "emote_type": "globals",
                "emote_set_id": "0",
                "owner_id": "0",
                "format": ["static"],
                "scale": ["1.0"],
                "theme_mode": ["dark"]
            }],
            "template": "https://static-cdn.jtvnw.net/emoticons/v2/{{id}}/{{format}}/{{theme_mode}}/{{scale}}",
            "pagination": { "cursor": "page-3" }
        })))
        .mount(&server)
        .await;

    let params = GetUserEmotesParams {
        user_id: "42".into(),
        after: Some("page-2".into()),
        broadcaster_id: None,
    };
    let resp = client_for(&server)
        .get_user_emotes(&token(), &params)
        .await
        .unwrap();

    assert_eq!(resp.data.emotes[0].emote.name, "Kappa");
    assert_eq!(resp.cursor(), Some("page-3"));
}

#[tokio::test]
async fn announcement_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/announcements"))
        .and(query_param("broadcaster_id", "11111"))
        .and(query_param("moderator_id", "44444"))
        .and(body_json(json!({
            "message": "Hello chat!",
            "color": "purple"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let params = SendChatAnnouncementParams {
        broadcaster_id: "11111".into(),
        moderator_id: "44444".into(),
        message: "Hello chat!".into(),
        color: Some(AnnouncementColor::Purple),
    };
    let resp = client_for(&server)
        .send_chat_announcement(&token(), &params)
        .await
        .unwrap();

    assert_eq!(resp.envelope.status, 204);
    assert!(resp.is_success());
}

#[tokio::test]
async fn chat_message_returns_send_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/messages"))
        .and(body_json(json!({
            "broadcaster_id": "12826",
            "sender_id": "141981764",
            "message": "Hello, world! twitchdevHype"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "message_id": "abc-123-def", "is_sent": true }]
        })))
        .mount(&server)
        .await;

    let params = SendChatMessageParams {
        broadcaster_id: "12826".into(),
        sender_id: "141981764".into(),
        message: "Hello, world! twitchdevHype".into(),
        reply_parent_message_id: None,
    };
    let resp = client_for(&server)
        .send_chat_message(&token(), &params)
        .await
        .unwrap();

    assert!(resp.data.messages[0].is_sent);
    assert_eq!(resp.data.messages[0].message_id, "abc-123-def");
}

#[tokio::test]
async fn shoutout_uses_query_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/shoutouts"))
        .and(query_param("from_broadcaster_id", "1"))
        .and(query_param("to_broadcaster_id", "2"))
        .and(query_param("moderator_id", "1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let params = SendShoutoutParams {
        from_broadcaster_id: "1".into(),
        to_broadcaster_id: "2".into(),
        moderator_id: "1".into(),
    };
    client_for(&server)
        .send_shoutout(&token(), &params)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn chat_settings_with_moderator_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/settings"))
        .and(query_param("broadcaster_id", "1234"))
        .and(query_param("moderator_id", "5678"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "broadcaster_id": "1234",
                "slow_mode": true,
                "slow_mode_wait_time": 5,
                "follower_mode": false,
                "follower_mode_duration": null,
                "subscriber_mode": false,
                "emote_mode": false,
                "unique_chat_mode": false,
                "moderator_id": "5678",
                "non_moderator_chat_delay": true,
                "non_moderator_chat_delay_duration": 4
            }]
        })))
        .mount(&server)
        .await;

    let params = GetChatSettingsParams {
        broadcaster_id: "1234".into(),
        moderator_id: Some("5678".into()),
    };
    let resp = client_for(&server)
        .get_chat_settings(&token(), &params)
        .await
        .unwrap();

    let settings = resp.data.first().unwrap();
    assert_eq!(settings.slow_mode_wait_time, Some(5));
    assert_eq!(settings.non_moderator_chat_delay, Some(true));
    assert_eq!(settings.non_moderator_chat_delay_duration, Some(4));
    assert_eq!(settings.moderator_id.as_deref(), Some("5678"));
}

#[tokio::test]
async fn update_chat_settings_patches_changed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/chat/settings"))
        .and(query_param("broadcaster_id", "1234"))
        .and(query_param("moderator_id", "5678"))
        .and(body_json(json!({ "emote_mode": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "broadcaster_id": "1234",
                "slow_mode": false,
                "slow_mode_wait_time": null,
                "follower_mode": false,
                "follower_mode_duration": null,
                "subscriber_mode": false,
                "emote_mode": true,
                "unique_chat_mode": false,
                "moderator_id": "5678",
                "non_moderator_chat_delay": false,
                "non_moderator_chat_delay_duration": null
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = UpdateChatSettingsParams {
        broadcaster_id: "1234".into(),
        moderator_id: "5678".into(),
        emote_mode: Some(true),
        ..Default::default()
    };
    let resp = client_for(&server)
        .update_chat_settings(&token(), &params)
        .await
        .unwrap();

    assert!(resp.data.first().unwrap().emote_mode);
}

#[tokio::test]
async fn chat_colors_lookup_and_update() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/color"))
        .and(query_param("user_id", "11111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "user_id": "11111",
                "user_name": "SpeedySpeedster1",
                "user_login": "speedyspeedster1",
                "color": "#9146FF"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/chat/color"))
        .and(query_param("user_id", "11111"))
        .and(query_param("color", "#9146FF"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let lookup = GetUserChatColorParams {
        user_ids: vec!["11111".into()],
    };
    let resp = client.get_user_chat_color(&token(), &lookup).await.unwrap();
    assert_eq!(resp.data.colors[0].color, "#9146FF");

    let update = UpdateUserChatColorParams {
        user_id: "11111".into(),
        color: "#9146FF".into(),
    };
    let resp = client.update_user_chat_color(&token(), &update).await.unwrap();
    assert_eq!(resp.envelope.status, 204);
}
