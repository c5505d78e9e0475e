use crate::airport::Airport;
use crate::airport::client::{AirportClient, rapid_api_headers};
use crate::airport::config::LookupConfig;
use crate::airport::error::LookupError;
use log::{debug, info};
use reqwest::Url;
use unicase::UniCase;

pub struct AirportLookupService {
    client: AirportClient,
    config: LookupConfig,
}

impl AirportLookupService {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        Self::with_client_builder(config, reqwest::ClientBuilder::new())
    }

    /// Like [`new`](Self::new), on top of a caller-prepared client builder (proxy, TLS).
    pub fn with_client_builder(
        config: LookupConfig,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, LookupError> {
        let api_key = config.api_key.as_deref().ok_or(LookupError::MissingApiKey)?;
        search_url(&config, "")?;
        let headers = rapid_api_headers(api_key, &config.host)?;
        info!(
            "Airport lookup via {} (country {})",
            config.endpoint, config.country
        );
        Ok(Self {
            client: AirportClient::new(builder, config.timeout, headers)?,
            config,
        })
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Airport>, LookupError> {
        let url = search_url(&self.config, query)?;
        let airports: Vec<Airport> = self.client.get(url).await?;
        debug!("{} airport(s) match {query:?}", airports.len());
        Ok(airports)
    }

    /// Searches and picks a single airport, preferring an exact IATA/ICAO code match.
    pub async fn find(&self, query: &str) -> Result<Airport, LookupError> {
        let airports = self.search(query).await?;
        best_match(query, airports).ok_or_else(|| LookupError::NoResults(query.to_string()))
    }
}

/// Three characters are looked up as an IATA code, anything else by name.
pub fn search_field(query: &str) -> &'static str {
    if query.chars().count() == 3 {
        "iata"
    } else {
        "name"
    }
}

pub fn search_url(config: &LookupConfig, query: &str) -> Result<Url, LookupError> {
    let query = query.trim();
    let mut url = Url::parse(&config.endpoint)
        .map_err(|_| LookupError::InvalidEndpoint(config.endpoint.clone()))?;
    url.query_pairs_mut()
        .append_pair(search_field(query), query)
        .append_pair("country", &config.country);
    Ok(url)
}

pub fn best_match(query: &str, mut airports: Vec<Airport>) -> Option<Airport> {
    let query = UniCase::new(query.trim());
    let exact = airports.iter().position(|airport| {
        UniCase::new(airport.iata.as_str()) == query || UniCase::new(airport.icao.as_str()) == query
    });
    match exact {
        Some(index) => Some(airports.swap_remove(index)),
        None => airports.into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Answers a single HTTP request with `status` and `body`, handing back the raw
    /// request head so the test can inspect what was sent.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (sender, receiver) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let _ = sender.send(String::from_utf8_lossy(&request).into_owned());
        });
        (format!("http://{addr}/v1/airports"), receiver)
    }

    fn local_service(endpoint: String) -> AirportLookupService {
        let config = LookupConfig {
            endpoint,
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        AirportLookupService::with_client_builder(config, reqwest::ClientBuilder::new().no_proxy())
            .unwrap()
    }

    const CHICAGO_JSON: &str = r#"[
        {"icao": "KORD", "iata": "ORD", "name": "Chicago O'Hare International Airport",
         "city": "Chicago", "country": "US", "latitude": "41.9786", "longitude": "-87.9048"},
        {"icao": "KMDW", "iata": "MDW", "name": "Chicago Midway International Airport",
         "city": "Chicago", "country": "US", "latitude": 41.7860, "longitude": -87.7524}
    ]"#;

    fn airport(iata: &str, icao: &str, name: &str) -> Airport {
        Airport {
            iata: iata.to_string(),
            icao: icao.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn query_pairs(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn three_letters_search_by_iata() {
        assert_eq!(search_field("JFK"), "iata");
        assert_eq!(search_field("lax"), "iata");
        assert_eq!(search_field("KJFK"), "name");
        assert_eq!(search_field("Heathrow"), "name");
        assert_eq!(search_field(""), "name");
    }

    #[test]
    fn url_carries_query_and_country() {
        let config = LookupConfig::default();
        let url = search_url(&config, " JFK ").unwrap();
        assert_eq!(url.host_str(), Some("airports-by-api-ninjas.p.rapidapi.com"));
        assert_eq!(url.path(), "/v1/airports");
        let pairs = query_pairs(&url);
        assert_eq!(pairs.get("iata").map(String::as_str), Some("JFK"));
        assert_eq!(pairs.get("country").map(String::as_str), Some("US"));
        assert!(!pairs.contains_key("name"));
    }

    #[test]
    fn name_queries_use_the_name_field() {
        let config = LookupConfig {
            country: "CA".to_string(),
            ..Default::default()
        };
        let pairs = query_pairs(&search_url(&config, "Pearson").unwrap());
        assert_eq!(pairs.get("name").map(String::as_str), Some("Pearson"));
        assert_eq!(pairs.get("country").map(String::as_str), Some("CA"));
    }

    #[test]
    fn bad_endpoint_is_reported() {
        let config = LookupConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            search_url(&config, "JFK"),
            Err(LookupError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn service_needs_an_api_key() {
        let result = AirportLookupService::new(LookupConfig::default());
        assert!(matches!(result, Err(LookupError::MissingApiKey)));
    }

    #[test]
    fn service_builds_with_key() {
        let config = LookupConfig {
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(AirportLookupService::new(config).is_ok());
    }

    #[test]
    fn exact_code_beats_result_order() {
        let airports = vec![
            airport("JFA", "KJFA", "Some Field"),
            airport("JFK", "KJFK", "John F Kennedy International Airport"),
        ];
        let found = best_match("jfk", airports).unwrap();
        assert_eq!(found.iata, "JFK");
    }

    #[test]
    fn icao_matches_too() {
        let airports = vec![
            airport("ORD", "KORD", "Chicago O'Hare International Airport"),
            airport("MDW", "KMDW", "Chicago Midway International Airport"),
        ];
        assert_eq!(best_match("kmdw", airports).unwrap().iata, "MDW");
    }

    #[test]
    fn falls_back_to_first_result() {
        let airports = vec![
            airport("ORD", "KORD", "Chicago O'Hare International Airport"),
            airport("MDW", "KMDW", "Chicago Midway International Airport"),
        ];
        assert_eq!(best_match("Chicago", airports).unwrap().iata, "ORD");
        assert!(best_match("Chicago", Vec::new()).is_none());
    }

    #[test]
    fn reserved_characters_in_names_are_escaped() {
        let config = LookupConfig::default();
        for name in ["A&B Field", "St. Mary's #2", "Wilkes+Barre", "Name=Value"] {
            let url = search_url(&config, name).unwrap();
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            assert_eq!(
                pairs,
                vec![
                    ("name".to_string(), name.to_string()),
                    ("country".to_string(), "US".to_string()),
                ],
                "{url}"
            );
            assert!(url.fragment().is_none());
        }
    }

    #[test]
    fn endpoint_query_is_kept() {
        let config = LookupConfig {
            endpoint: "https://airports.example/v1/airports?format=json".to_string(),
            ..Default::default()
        };
        let pairs = query_pairs(&search_url(&config, "LAX").unwrap());
        assert_eq!(pairs.get("format").map(String::as_str), Some("json"));
        assert_eq!(pairs.get("iata").map(String::as_str), Some("LAX"));
    }

    #[tokio::test]
    async fn search_decodes_airports_and_sends_credentials() {
        let (endpoint, request) = serve_once("200 OK", CHICAGO_JSON).await;
        let service = local_service(endpoint);

        let airports = service.search("Chicago").await.unwrap();
        assert_eq!(airports.len(), 2);
        assert_eq!(airports[1].iata, "MDW");
        assert_eq!(
            airports[1].coordinate().unwrap(),
            crate::lat_long::LatitudeLongitude(41.786, -87.7524)
        );

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /v1/airports?name=chicago&country=us "), "{request}");
        assert!(request.contains("x-rapidapi-key: abc123"), "{request}");
        assert!(
            request.contains("x-rapidapi-host: airports-by-api-ninjas.p.rapidapi.com"),
            "{request}"
        );
    }

    #[tokio::test]
    async fn find_prefers_the_exact_code() {
        let (endpoint, _request) = serve_once("200 OK", CHICAGO_JSON).await;
        let airport = local_service(endpoint).find("mdw").await.unwrap();
        assert_eq!(airport.icao, "KMDW");
        assert_eq!(
            airport.label(),
            "Chicago Midway International Airport (MDW) - Chicago"
        );
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (endpoint, _request) = serve_once("403 Forbidden", r#"{"message": "no"}"#).await;
        let result = local_service(endpoint).search("JFK").await;
        match result {
            Err(LookupError::Status(status)) => assert_eq!(status.as_u16(), 403),
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_result_is_no_results() {
        let (endpoint, _request) = serve_once("200 OK", "[]").await;
        let result = local_service(endpoint).find("Nowhere Intl").await;
        assert!(matches!(result, Err(LookupError::NoResults(query)) if query == "Nowhere Intl"));
    }

    #[tokio::test]
    async fn record_without_name_still_decodes() {
        let (endpoint, _request) = serve_once(
            "200 OK",
            r#"[{"iata": "XXA", "latitude": "1.5", "longitude": "2.5"}]"#,
        )
        .await;
        let airports = local_service(endpoint).search("XXA").await.unwrap();
        assert_eq!(airports.len(), 1);
        assert!(airports[0].name.is_empty());
    }
}
