//! Typed and raw request operations.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientResult;
use crate::http::{HttpBackend, HttpRequest};
use crate::json;
use crate::route::{HttpMethod, RouteParams, ServiceRequest};
use crate::url::{build_route_url, resolve_url};

use super::JsonServiceClient;
use super::response::decode_response;

impl<B: HttpBackend> JsonServiceClient<B> {
    /// Send a request with its route's declared verb.
    pub async fn send<R: ServiceRequest>(&self, request: &R) -> ClientResult<R::Response> {
        self.send_as(R::ROUTE.method, request, &RouteParams::new())
            .await
    }

    /// GET a typed request.
    ///
    /// Route placeholders are filled from the request; its other populated
    /// fields become query-string parameters.
    pub async fn get<R: ServiceRequest>(&self, request: &R) -> ClientResult<R::Response> {
        self.send_as(HttpMethod::Get, request, &RouteParams::new())
            .await
    }

    /// GET a typed request with extra free-form query parameters.
    ///
    /// The extra pairs are appended after the request's own fields.
    pub async fn get_with_args<R, K, V, I>(&self, request: &R, args: I) -> ClientResult<R::Response>
    where
        R: ServiceRequest,
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        let extra: RouteParams = args.into_iter().collect();
        self.send_as(HttpMethod::Get, request, &extra).await
    }

    /// POST a typed request as a JSON body.
    pub async fn post<R: ServiceRequest>(&self, request: &R) -> ClientResult<R::Response> {
        self.send_as(HttpMethod::Post, request, &RouteParams::new())
            .await
    }

    /// Send a typed request with an explicit verb.
    ///
    /// Body-carrying verbs serialize the request as JSON and send only
    /// `extra` in the query string.
    pub async fn send_as<R: ServiceRequest>(
        &self,
        method: HttpMethod,
        request: &R,
        extra: &RouteParams,
    ) -> ClientResult<R::Response> {
        let url = build_route_url(
            &self.base_url,
            &R::ROUTE,
            &request.params(),
            extra,
            !method.has_body(),
        )?;
        let body = if method.has_body() {
            Some(json::to_json(request)?)
        } else {
            None
        };

        self.execute(HttpRequest { method, url, body }).await
    }

    /// GET a raw relative path or absolute URL, decoding the JSON into `T`.
    pub async fn get_url<T: DeserializeOwned>(&self, path_or_url: &str) -> ClientResult<T> {
        let url = resolve_url(&self.base_url, path_or_url)?;
        self.execute(HttpRequest {
            method: HttpMethod::Get,
            url,
            body: None,
        })
        .await
    }

    /// POST `body` as JSON to a raw relative path or absolute URL.
    pub async fn post_url<T, Body>(&self, path_or_url: &str, body: &Body) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Body: Serialize + ?Sized,
    {
        let url = resolve_url(&self.base_url, path_or_url)?;
        self.execute(HttpRequest {
            method: HttpMethod::Post,
            url,
            body: Some(json::to_json(body)?),
        })
        .await
    }

    /// Serialize a DTO with the client's JSON conventions.
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> ClientResult<String> {
        json::to_json(value)
    }

    /// Deserialize a DTO with the client's JSON conventions.
    pub fn from_json<T: DeserializeOwned>(&self, text: &str) -> ClientResult<T> {
        json::from_json(text)
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> ClientResult<T> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(method = %method, url = %url, "Sending request");

        let response = self.backend.execute(request).await?;
        let status = response.status;

        decode_response(response).inspect_err(|e| {
            tracing::warn!(method = %method, url = %url, status, error = %e, "Request failed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{answering, base_url};
    use crate::http::{HttpResponse, MockHttpBackend};
    use crate::route::Route;
    use crate::ClientError;
    use serde::Deserialize;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct GetThing {
        slug: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        reload: Option<bool>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        name: String,
    }

    impl ServiceRequest for GetThing {
        type Response = Thing;
        const ROUTE: Route = Route::get("/things/{Slug}");

        fn params(&self) -> RouteParams {
            RouteParams::new()
                .with("Slug", &self.slug)
                .with_opt("Reload", self.reload)
        }
    }

    fn get_thing(reload: Option<bool>) -> GetThing {
        GetThing {
            slug: "redis".to_string(),
            reload,
        }
    }

    fn expecting(
        method: HttpMethod,
        url: &'static str,
        body: Option<&'static str>,
        status: u16,
        response: &'static str,
    ) -> MockHttpBackend {
        let mut backend = MockHttpBackend::new();
        backend
            .expect_execute()
            .withf(move |req| {
                req.method == method && req.url.as_str() == url && req.body.as_deref() == body
            })
            .times(1)
            .returning(move |_| {
                Ok(HttpResponse {
                    status,
                    body: response.to_string(),
                })
            });
        backend
    }

    #[tokio::test]
    async fn test_get_uses_route_template() {
        let backend = expecting(
            HttpMethod::Get,
            "http://techstacks.io/things/redis",
            None,
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);

        let thing = client.get(&get_thing(None)).await.unwrap();
        assert_eq!(thing.name, "Redis");
    }

    #[tokio::test]
    async fn test_get_sends_remaining_fields_as_query() {
        let backend = expecting(
            HttpMethod::Get,
            "http://techstacks.io/things/redis?Reload=true",
            None,
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);

        client.get(&get_thing(Some(true))).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_with_args_merges_extra_params() {
        let backend = expecting(
            HttpMethod::Get,
            "http://techstacks.io/things/redis?Reload=false&DescriptionContains=framework",
            None,
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);

        client
            .get_with_args(&get_thing(Some(false)), [("DescriptionContains", "framework")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_post_sends_request_as_json_body() {
        let backend = expecting(
            HttpMethod::Post,
            "http://techstacks.io/things/redis",
            Some(r#"{"Slug":"redis","Reload":true}"#),
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);

        client.post(&get_thing(Some(true))).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_uses_declared_verb() {
        let backend = expecting(
            HttpMethod::Get,
            "http://techstacks.io/things/redis",
            None,
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);

        client.send(&get_thing(None)).await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_post_surfaces_web_service_error() {
        let client = JsonServiceClient::with_backend(base_url(), answering(401, ""));

        let err = client.post(&get_thing(None)).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(
            err.as_web_service().map(|e| e.status_description.as_str()),
            Some("Unauthorized")
        );
    }

    #[tokio::test]
    async fn test_server_error_passes_status_through() {
        let client = JsonServiceClient::with_backend(
            base_url(),
            answering(503, r#"{"responseStatus":{"errorCode":"Maintenance"}}"#),
        );

        match client.get(&get_thing(None)).await {
            Err(ClientError::WebService(web)) => {
                assert_eq!(web.status_code, 503);
                assert_eq!(web.status_description, "Service Unavailable");
                assert_eq!(web.error_code(), Some("Maintenance"));
            }
            other => panic!("expected WebService error, got {other:?}"),
        }
    }

    /// A request whose route needs a `Slug` it never supplies.
    #[derive(Serialize)]
    struct NoSlug;

    impl ServiceRequest for NoSlug {
        type Response = Thing;
        const ROUTE: Route = Route::get("/things/{Slug}");
    }

    #[tokio::test]
    async fn test_missing_placeholder_never_reaches_backend() {
        let mut backend = MockHttpBackend::new();
        backend.expect_execute().never();
        let client = JsonServiceClient::with_backend(base_url(), backend);

        let err = client.get(&NoSlug).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRoute { .. }));
    }

    #[tokio::test]
    async fn test_get_url_relative_and_absolute() {
        let backend = expecting(
            HttpMethod::Get,
            "http://techstacks.io/things/redis",
            None,
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);
        let thing: Thing = client.get_url("/things/redis").await.unwrap();
        assert_eq!(thing.name, "Redis");

        let backend = expecting(
            HttpMethod::Get,
            "https://mirror.example/things/redis",
            None,
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);
        let thing: Thing = client
            .get_url("https://mirror.example/things/redis")
            .await
            .unwrap();
        assert_eq!(thing.name, "Redis");
    }

    #[tokio::test]
    async fn test_post_url_serializes_body() {
        let backend = expecting(
            HttpMethod::Post,
            "http://techstacks.io/things",
            Some(r#"{"name":"Redis"}"#),
            200,
            r#"{"name":"Redis"}"#,
        );
        let client = JsonServiceClient::with_backend(base_url(), backend);

        let thing: Thing = client
            .post_url("things", &serde_json::json!({"name": "Redis"}))
            .await
            .unwrap();
        assert_eq!(thing.name, "Redis");
    }

    #[test]
    fn test_json_helpers_round_trip() {
        let client = JsonServiceClient::with_backend(base_url(), MockHttpBackend::new());
        let json = client.to_json(&get_thing(None)).unwrap();
        assert_eq!(json, r#"{"Slug":"redis"}"#);

        let thing: Thing = client.from_json(r#"{"name":"Memcached"}"#).unwrap();
        assert_eq!(thing.name, "Memcached");
    }
}
