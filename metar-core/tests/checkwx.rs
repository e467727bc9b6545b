//! Integration tests for CheckWxProvider using wiremock.

use chrono::NaiveDateTime;
use metar_core::{
    CheckWxProvider, Icao, MetarProvider, WeatherError, fetch_report, parse,
    report::assemble_at,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn heathrow() -> serde_json::Value {
    serde_json::json!({
        "icao": "EGLL",
        "station": { "location": "London, England", "name": "London Heathrow Airport" },
        "elevation": { "feet": 83, "meters": 25 },
        "observed": "2023-05-14T11:50:00",
        "wind": { "degrees": 240, "speed_kts": 12, "speed_mps": 6 },
        "visibility": { "miles": "10", "meters": "16,093" },
        "ceiling": { "code": "BKN", "text": "Broken", "base_feet_agl": 2500, "base_meters_agl": 762, "feet": 2500, "meters": 762 },
        "clouds": [
            { "code": "FEW", "text": "Few", "base_feet_agl": 1500, "base_meters_agl": 457, "feet": 1500, "meters": 457 },
            { "code": "BKN", "text": "Broken", "base_feet_agl": 2500, "base_meters_agl": 762, "feet": 2500, "meters": 762 }
        ],
        "temperature": { "celsius": 18, "fahrenheit": 64 },
        "dewpoint": { "celsius": 9, "fahrenheit": 48 },
        "barometer": { "hg": 29.97, "hpa": 1015, "kpa": 101.5, "mb": 1015 },
        "raw_text": "EGLL 141150Z AUTO 24012KT 9999 FEW015 BKN025 18/09 Q1015 NOSIG"
    })
}

fn noon() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2023-05-14T12:00:00", "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[tokio::test]
async fn test_decoded_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metar/EGLL/decoded"))
        .and(query_param("x-api-key", "KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": 1,
            "data": [heathrow()]
        })))
        .mount(&mock_server)
        .await;

    let provider = CheckWxProvider::with_base_url("KEY".into(), mock_server.uri());
    let icao = Icao::try_from("egll").unwrap();

    let envelope = provider.decoded(&icao).await.unwrap();
    let observation = parse(envelope).unwrap();
    let report = assemble_at(&observation, noon()).unwrap();

    assert_eq!(report.title, "Current weather at London Heathrow Airport");
    assert_eq!(
        report.titles(),
        [
            "Location",
            "Observed at",
            "Wind",
            "Visibility",
            "Ceiling",
            "Clouds",
            "Temperature",
            "Barometer",
            "Report info",
        ]
    );
    assert_eq!(
        report.section("Location").unwrap().body,
        "Location: London, England\nElevation: 83 ft [25 m]"
    );
    assert_eq!(
        report.section("Observed at").unwrap().body,
        "2023-05-14T11:50:00 [10 m, 0 s back]"
    );
    assert_eq!(
        report.section("Visibility").unwrap().body,
        "10 miles [16,093 m]"
    );
    assert_eq!(report.section("Ceiling").unwrap().body, "Broken at 2500 ft [762 m]");
    assert_eq!(
        report.section("Clouds").unwrap().body,
        "Few at 1500 ft [457 m]\nBroken at 2500 ft [762 m]"
    );
    assert_eq!(
        report.section("Temperature").unwrap().body,
        "Temperature 18℃, dewpoint 9℃"
    );
    assert_eq!(report.section("Barometer").unwrap().body, "29.97 inHg [1015 hPa]");
    assert_eq!(report.section("Report info").unwrap().body, "Fully Automated Report");
    assert_eq!(
        report.footer.as_deref(),
        Some("No significant change is expected to reported conditions within the next 2 hours")
    );
}

#[tokio::test]
async fn test_decoded_empty_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metar/ZZZZ/decoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": 0,
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let provider = CheckWxProvider::with_base_url("KEY".into(), mock_server.uri());
    let icao = Icao::try_from("ZZZZ").unwrap();

    let err = fetch_report(&provider, &icao).await.unwrap_err();
    assert!(matches!(err, WeatherError::NoData));
    assert_eq!(err.to_string(), "server has not returned any data");
}

#[tokio::test]
async fn test_decoded_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metar/EGLL/decoded"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let provider = CheckWxProvider::with_base_url("BAD".into(), mock_server.uri());
    let icao = Icao::try_from("EGLL").unwrap();

    let err = provider.decoded(&icao).await.unwrap_err();
    match err {
        WeatherError::ProviderHttp { status, ref body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_decoded_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metar/EGLL/decoded"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = CheckWxProvider::with_base_url("KEY".into(), mock_server.uri());
    let icao = Icao::try_from("EGLL").unwrap();

    let err = provider.decoded(&icao).await.unwrap_err();
    assert!(matches!(err, WeatherError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    // Nothing listens on port 9 locally.
    let provider = CheckWxProvider::with_base_url("KEY".into(), "http://127.0.0.1:9");
    let icao = Icao::try_from("EGLL").unwrap();

    let err = provider.decoded(&icao).await.unwrap_err();
    assert!(matches!(err, WeatherError::Fetch(_)));
    assert_eq!(err.to_string(), "Error: Not connected");
}

#[tokio::test]
async fn test_wrongly_typed_field_is_render_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/metar/EGLL/decoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": 1,
            "data": [{ "icao": "EGLL", "observed": 12345, "raw_text": null }]
        })))
        .mount(&mock_server)
        .await;

    let provider = CheckWxProvider::with_base_url("KEY".into(), mock_server.uri());
    let icao = Icao::try_from("EGLL").unwrap();

    let err = fetch_report(&provider, &icao).await.unwrap_err();
    match err {
        WeatherError::Render(ref e) => assert_eq!(e.field, "observed"),
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.action(), "Weather rendering");
}
