use httpmock::prelude::*;
use vacancy_salaries::config::{HeadHunterConfig, SearchSettings};
use vacancy_salaries::core::VacancyProvider;
use vacancy_salaries::{HeadHunterClient, SalaryError, SalaryPipeline};

fn client_for(server: &MockServer) -> HeadHunterClient {
    let config = HeadHunterConfig {
        base_url: server.base_url(),
        profession: String::new(),
        ..HeadHunterConfig::default()
    };
    HeadHunterClient::new(&config).unwrap()
}

fn settings(languages: &[&str]) -> SearchSettings {
    SearchSettings {
        area: "Moscow".to_string(),
        period_days: 30,
        languages: languages.iter().map(|l| l.to_string()).collect(),
        max_items: 2000,
        page_size: 100,
    }
}

#[tokio::test]
async fn test_resolve_area_takes_first_suggestion() {
    let server = MockServer::start_async().await;
    let areas_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/suggests/areas")
                .query_param("text", "Moscow");
            then.status(200).json_body(serde_json::json!({
                "items": [
                    {"id": "1", "text": "Москва"},
                    {"id": "2019", "text": "Московская область"}
                ]
            }));
        })
        .await;

    let area = client_for(&server).resolve_area("Moscow").await.unwrap();

    areas_mock.assert_async().await;
    assert_eq!(area, "1");
}

#[tokio::test]
async fn test_unknown_area_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/suggests/areas");
            then.status(200).json_body(serde_json::json!({"items": []}));
        })
        .await;

    let result = client_for(&server).resolve_area("Atlantis").await;
    assert!(matches!(result, Err(SalaryError::AreaNotFound { .. })));
}

#[tokio::test]
async fn test_pipeline_paginates_and_aggregates() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/suggests/areas");
            then.status(200)
                .json_body(serde_json::json!({"items": [{"id": "1", "text": "Москва"}]}));
        })
        .await;

    let count_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("text", "Python")
                .query_param("area", "1")
                .query_param("per_page", "1");
            then.status(200)
                .json_body(serde_json::json!({"found": 812, "page": 0, "pages": 812, "items": []}));
        })
        .await;

    let page_0 = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("text", "Python")
                .query_param("per_page", "100")
                .query_param("only_with_salary", "true")
                .query_param("page", "0");
            then.status(200).json_body(serde_json::json!({
                "found": 3,
                "page": 0,
                "pages": 2,
                "items": [
                    {"salary": {"from": 100000, "to": 150000, "currency": "RUR"}},
                    {"salary": {"from": 3000, "to": null, "currency": "USD"}}
                ]
            }));
        })
        .await;

    let page_1 = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("text", "Python")
                .query_param("per_page", "100")
                .query_param("page", "1");
            then.status(200).json_body(serde_json::json!({
                "found": 3,
                "page": 1,
                "pages": 2,
                "items": [
                    {"salary": {"from": null, "to": 150000, "currency": "RUR"}}
                ]
            }));
        })
        .await;

    let pipeline = SalaryPipeline::new(client_for(&server), settings(&["Python"]), "HeadHunter Moscow");
    let report = pipeline.build_report().await.unwrap();

    count_mock.assert_async().await;
    page_0.assert_async().await;
    page_1.assert_async().await;

    let stats = report.get("Python").unwrap();
    assert_eq!(stats.vacancies_found, 812);
    assert_eq!(stats.vacancies_processed, 2);
    // (125000 + 120000) / 2
    assert_eq!(stats.average_salary, Some(122500));
}

#[tokio::test]
async fn test_http_error_aborts_run() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/suggests/areas");
            then.status(200)
                .json_body(serde_json::json!({"items": [{"id": "1", "text": "Москва"}]}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/vacancies");
            then.status(500);
        })
        .await;

    let pipeline = SalaryPipeline::new(client_for(&server), settings(&["Python", "Go"]), "t");
    let result = pipeline.build_report().await;

    match result {
        Err(SalaryError::ApiError(e)) => {
            assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
