//! End-to-end pagination through the client and the HTTP transport.

use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tether::client::ConnectWiseClient;
use tether::config::Config;
use tether::models::{BoardTeam, Count};
use tether::pagination::Continuation;
use tether::transport::QueryParams;

const TEAMS: &str = "/v4_6_release/apis/3.0/service/boards/3/teams";

async fn manage_client(server: &MockServer) -> ConnectWiseClient {
    let config = Config::manage(server.uri(), "client-1", "acme", "pub123", "priv456")
        .unwrap()
        .with_max_retries(0);
    ConnectWiseClient::connect(&config).await.unwrap()
}

fn teams(first_id: i64, count: i64) -> serde_json::Value {
    (first_id..first_id + count)
        .map(|id| json!({"id": id, "name": format!("Team {}", id), "boardId": 3}))
        .collect()
}

fn link(server: &MockServer, pages: &[(u32, &str)]) -> String {
    pages
        .iter()
        .map(|(page, rel)| {
            format!(
                "<{}{}?page={}&pageSize=2>; rel=\"{}\"",
                server.uri(),
                TEAMS,
                page,
                rel
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[tokio::test]
async fn follows_link_headers_to_the_last_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEAMS))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(teams(1, 2))
                .insert_header("Link", link(&server, &[(2, "next"), (3, "last")]).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TEAMS))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(teams(3, 2))
                .insert_header(
                    "Link",
                    link(&server, &[(1, "first"), (1, "prev"), (3, "next"), (3, "last")]).as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;
    // A short page that still advertises nothing further.
    Mock::given(method("GET"))
        .and(path(TEAMS))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(teams(5, 1))
                .insert_header("Link", link(&server, &[(1, "first"), (2, "prev")]).as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server).await;
    let endpoint = client
        .endpoint("service/boards")
        .unwrap()
        .with_id(3)
        .child("teams")
        .unwrap();

    let first = endpoint.paginated::<BoardTeam>(1, 2, None).await.unwrap();
    assert_eq!(first.continuation(), Continuation::Explicit);
    assert_eq!(first.last_page(), Some(3));

    let names: Vec<String> = first
        .iterate_all()
        .map(|team| team.unwrap().name)
        .collect()
        .await;
    assert_eq!(names, vec!["Team 1", "Team 2", "Team 3", "Team 4", "Team 5"]);
}

#[tokio::test]
async fn falls_back_to_page_size_without_link_headers() {
    let server = MockServer::start().await;
    for (page, first_id, count) in [("1", 1, 2), ("2", 3, 2), ("3", 5, 0)] {
        Mock::given(method("GET"))
            .and(path(TEAMS))
            .and(query_param("page", page))
            .and(query_param("conditions", "boardId=3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(teams(first_id, count)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = manage_client(&server).await;
    let mut filters = QueryParams::new();
    filters.insert("conditions".to_string(), "boardId=3".into());

    let first = client
        .endpoint("service/boards/3/teams")
        .unwrap()
        .paginated::<BoardTeam>(1, 2, Some(&filters))
        .await
        .unwrap();
    assert_eq!(first.continuation(), Continuation::Heuristic);

    let all = first.collect_all().await.unwrap();
    let ids: Vec<Option<i64>> = all.iter().map(|team| team.id).collect();
    assert_eq!(ids, vec![Some(1), Some(2), Some(3), Some(4)]);
}

#[tokio::test]
async fn count_route_returns_a_single_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/count", TEAMS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let client = manage_client(&server).await;
    let count: Count = client
        .endpoint("service/boards/3/teams/count")
        .unwrap()
        .get(None)
        .await
        .unwrap()
        .into_one()
        .unwrap();
    assert_eq!(count.count, 5);
}
