use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use gloo::net::http::Request;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use shared::{
    ApiEnvelope, Balance, EntityId, Expense, ExpensePayload, LoginRequest, LoginResponse, Material,
    MaterialPayload, Product, RegisterRequest, ResetPasswordRequest, Sale, SalePayload,
    ValidationFailure,
};

use super::config::AppConfig;
use super::errors::ApiError;
use super::session::Session;
use super::upload::{Multipart, ProductSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON text
    pub body: Option<String>,
    /// `multipart/form-data`; the browser writes its own content type
    pub form: Option<Multipart>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// One round trip to the backend. Errors are transport failures only; any
/// HTTP status comes back as a response.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// `fetch` through gloo
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match (request.body, request.form) {
            (_, Some(form)) => builder.body(form_data(&form)?),
            (Some(body), None) => builder.body(body),
            (None, None) => builder.build(),
        }
        .map_err(|e| e.to_string())?;

        let response = prepared.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, body })
    }
}

fn form_data(form: &Multipart) -> Result<web_sys::FormData, String> {
    let data = web_sys::FormData::new().map_err(|e| format!("{:?}", e))?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value).map_err(|e| format!("{:?}", e))?;
    }
    for (name, upload) in &form.files {
        if let Some(file) = upload.browser_file() {
            data.append_with_blob_and_filename(name, file, upload.file_name())
                .map_err(|e| format!("{:?}", e))?;
        }
    }
    Ok(data)
}

/// A backend collection the list pages and modals work against
pub trait Resource: Clone + PartialEq + DeserializeOwned + 'static {
    type Payload: Serialize;

    const PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;

    fn id(&self) -> &EntityId;

    /// Display order for a freshly fetched collection; backend order by default
    fn arrange(_items: &mut [Self]) {}

    /// Form body to send instead of JSON, when the payload carries a file
    fn multipart(_payload: &Self::Payload) -> Option<Multipart> {
        None
    }
}

impl Resource for Product {
    type Payload = ProductSubmission;
    const PATH: &'static str = "/products";
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn multipart(payload: &ProductSubmission) -> Option<Multipart> {
        payload.multipart()
    }
}

impl Resource for Material {
    type Payload = MaterialPayload;
    const PATH: &'static str = "/materials";
    const SINGULAR: &'static str = "material";
    const PLURAL: &'static str = "materials";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Resource for Expense {
    type Payload = ExpensePayload;
    const PATH: &'static str = "/expenses";
    const SINGULAR: &'static str = "expense";
    const PLURAL: &'static str = "expenses";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Resource for Sale {
    type Payload = SalePayload;
    const PATH: &'static str = "/sales";
    const SINGULAR: &'static str = "sale";
    const PLURAL: &'static str = "sales";

    fn id(&self) -> &EntityId {
        &self.id
    }

    /// Newest first
    fn arrange(items: &mut [Self]) {
        items.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

enum Outgoing {
    Empty,
    Json(String),
    Form(Multipart),
}

/// Whether a 401 on this call means the stored token went bad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Session,
    /// Login and friends: 401 is a wrong password, not an expired session
    Anonymous,
}

/// API client for communicating with the backend server.
///
/// Every request carries the JSON headers and, when signed in, the bearer
/// token. A 401 on an authenticated call ends the session before the error
/// reaches the caller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
    session: Session,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.transport, &other.transport)
            && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self::with_transport(&config.api_base_url, Rc::new(BrowserTransport), session)
    }

    pub fn with_transport(base_url: &str, transport: Rc<dyn Transport>, session: Session) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let mut items: Vec<R> = self.fetch_data(R::PATH).await?;
        R::arrange(&mut items);
        log::debug!("fetched {} {}", items.len(), R::PLURAL);
        Ok(items)
    }

    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<(), ApiError> {
        let outgoing = match R::multipart(payload) {
            Some(form) => Outgoing::Form(form),
            None => Outgoing::Json(encode(payload)?),
        };
        self.mutate(Method::Post, R::PATH, outgoing).await?;
        log::info!("created {}", R::SINGULAR);
        Ok(())
    }

    /// PUT as JSON. A multipart update goes out as POST with `_method=PUT`,
    /// since the backend only reads form files on POST.
    pub async fn update<R: Resource>(&self, id: &EntityId, payload: &R::Payload) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::PATH, id);
        match R::multipart(payload) {
            Some(form) => {
                self.mutate(Method::Post, &path, Outgoing::Form(form.text("_method", "PUT")))
                    .await?
            }
            None => self.mutate(Method::Put, &path, Outgoing::Json(encode(payload)?)).await?,
        }
        log::info!("updated {} {}", R::SINGULAR, id);
        Ok(())
    }

    pub async fn delete<R: Resource>(&self, id: &EntityId) -> Result<(), ApiError> {
        self.mutate(Method::Delete, &format!("{}/{}", R::PATH, id), Outgoing::Empty).await?;
        log::info!("deleted {} {}", R::SINGULAR, id);
        Ok(())
    }

    pub async fn get_balance(&self) -> Result<Balance, ApiError> {
        self.fetch_data("/balance").await
    }

    /// Overwrite the stored balance; answers with the stored value
    pub async fn update_balance(&self, amount: f64) -> Result<Balance, ApiError> {
        let body = Balance { balance: amount };
        let response = self.execute(Method::Put, "/balance", Outgoing::Json(encode(&body)?), Auth::Session).await?;
        let envelope: ApiEnvelope<Balance> = decode_envelope(&response.body)?;
        Ok(envelope.data.unwrap_or(body))
    }

    /// Exchange credentials for a token and start the session with it
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let response = self.execute(Method::Post, "/login", Outgoing::Json(encode(request)?), Auth::Anonymous).await?;
        let answer: LoginResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        match answer.token.filter(|token| !token.is_empty()) {
            Some(token) => {
                self.session.begin(token);
                Ok(())
            }
            None => Err(ApiError::Rejected(answer.message)),
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        self.submit_anonymous("/register", request).await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Option<String>, ApiError> {
        self.submit_anonymous("/reset-password", request).await
    }

    async fn submit_anonymous<B: Serialize>(&self, path: &str, body: &B) -> Result<Option<String>, ApiError> {
        let response = self.execute(Method::Post, path, Outgoing::Json(encode(body)?), Auth::Anonymous).await?;
        let envelope: ApiEnvelope<IgnoredAny> = decode_envelope(&response.body)?;
        Ok(envelope.message)
    }

    async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::Get, path, Outgoing::Empty, Auth::Session).await?;
        let envelope: ApiEnvelope<T> = decode_envelope(&response.body)?;
        envelope
            .data
            .ok_or_else(|| ApiError::Decode(format!("{} answered without data", path)))
    }

    async fn mutate(&self, method: Method, path: &str, outgoing: Outgoing) -> Result<(), ApiError> {
        let response = self.execute(method, path, outgoing, Auth::Session).await?;
        decode_envelope::<IgnoredAny>(&response.body)?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        outgoing: Outgoing,
        auth: Auth,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![
            ("Accept", "application/json".to_string()),
            ("X-Requested-With", "XMLHttpRequest".to_string()),
        ];
        let (body, form) = match outgoing {
            Outgoing::Empty => (None, None),
            Outgoing::Json(body) => {
                headers.push(("Content-Type", "application/json".to_string()));
                (Some(body), None)
            }
            Outgoing::Form(form) => (None, Some(form)),
        };
        if let Some(token) = self.session.token() {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
            form,
        };
        log::debug!("{} {}", method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, path, e);
            ApiError::Network(e)
        })?;

        if (200..300).contains(&response.status) {
            return Ok(response);
        }
        log::warn!("{} {} answered {}", method, path, response.status);
        Err(self.classify_failure(&response, auth))
    }

    fn classify_failure(&self, response: &HttpResponse, auth: Auth) -> ApiError {
        let message = serde_json::from_str::<ApiEnvelope<IgnoredAny>>(&response.body)
            .ok()
            .and_then(|envelope| envelope.message);

        match response.status {
            401 if auth == Auth::Session => {
                self.session.expire();
                ApiError::Unauthorized
            }
            422 => {
                let joined = serde_json::from_str::<ValidationFailure>(&response.body)
                    .ok()
                    .and_then(|failure| failure.joined());
                ApiError::Validation(
                    joined
                        .or(message)
                        .unwrap_or_else(|| "The given data was invalid.".to_string()),
                )
            }
            status => ApiError::Server { status, message },
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Read a 2xx body. An empty body counts as success with no data, and an
/// envelope that says `success: false` becomes [`ApiError::Rejected`].
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(ApiEnvelope { success: true, data: None, message: None });
    }
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected(envelope.message));
    }
    Ok(envelope)
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    use super::*;

    pub const BASE_URL: &str = "http://api.test";

    /// Scripted backend: answers by method and path, and keeps every request.
    ///
    /// Each route replays its queued responses in order; the last one repeats.
    #[derive(Default)]
    pub struct FakeTransport {
        routes: RefCell<HashMap<(Method, String), VecDeque<HttpResponse>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
            self.routes
                .borrow_mut()
                .entry((method, path.to_string()))
                .or_default()
                .push_back(HttpResponse { status, body: body.to_string() });
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn count(&self, method: Method, path: &str) -> usize {
            let url = format!("{}{}", BASE_URL, path);
            self.requests
                .borrow()
                .iter()
                .filter(|request| request.method == method && request.url == url)
                .count()
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
            let path = request.url.trim_start_matches(BASE_URL).to_string();
            let key = (request.method, path);
            self.requests.borrow_mut().push(request);

            let mut routes = self.routes.borrow_mut();
            let queue = routes
                .get_mut(&key)
                .ok_or_else(|| format!("no route for {} {}", key.0, key.1))?;
            let response = if queue.len() > 1 { queue.pop_front() } else { queue.front().cloned() };
            response.ok_or_else(|| format!("no response left for {} {}", key.0, key.1))
        }
    }

    pub fn client(transport: &Rc<FakeTransport>, session: Session) -> ApiClient {
        ApiClient::with_transport(BASE_URL, transport.clone() as Rc<dyn Transport>, session)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{client, FakeTransport};
    use super::*;
    use crate::services::session::testing::{record_events, MemoryTokenStore};
    use crate::services::session::SessionEvent;
    use crate::services::upload::Upload;
    use serde_json::json;
    use shared::{ProductMaterialPayload, ProductPayload, WeightUnit};

    fn signed_in() -> Session {
        Session::restore(MemoryTokenStore::with_token("secret"))
    }

    #[tokio::test]
    async fn test_requests_carry_token_and_json_headers() {
        let transport = FakeTransport::new();
        transport.respond(Method::Get, "/materials", 200, json!({"success": true, "data": []}));
        let api = client(&transport, signed_in());

        let materials = api.list::<Material>().await.unwrap();
        assert!(materials.is_empty());

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://api.test/materials");
        assert_eq!(request.header("authorization"), Some("Bearer secret"));
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("X-Requested-With"), Some("XMLHttpRequest"));
        assert_eq!(request.header("Content-Type"), None);
    }

    #[tokio::test]
    async fn test_anonymous_requests_have_no_bearer() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/register", 200, json!({"success": true, "message": "Registered"}));
        let api = client(&transport, Session::restore(MemoryTokenStore::default()));

        let message = api
            .register(&RegisterRequest {
                username: "toko".into(),
                email: "toko@example.com".into(),
                password: "hunter22".into(),
            })
            .await
            .unwrap();

        assert_eq!(message.as_deref(), Some("Registered"));
        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_unauthorized_expires_session() {
        let transport = FakeTransport::new();
        transport.respond(Method::Get, "/expenses", 401, json!({"message": "Unauthenticated."}));
        let session = signed_in();
        let events = record_events(&session);
        let api = client(&transport, session.clone());

        let err = api.list::<Expense>().await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert!(!session.is_authenticated());
        assert_eq!(*events.borrow(), vec![SessionEvent::Expired]);
    }

    #[tokio::test]
    async fn test_bad_login_does_not_expire_session() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/login", 401, json!({"message": "Invalid credentials"}));
        let session = Session::restore(MemoryTokenStore::default());
        let events = record_events(&session);
        let api = client(&transport, session);

        let err = api
            .login(&LoginRequest { username: "toko".into(), password: "nope".into() })
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert!(events.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_login_starts_session() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/login", 200, json!({"token": "t0k3n"}));
        let store = MemoryTokenStore::default();
        let api = client(&transport, Session::restore(store.clone()));

        api.login(&LoginRequest { username: "toko".into(), password: "pw".into() })
            .await
            .unwrap();

        assert_eq!(store.saved.borrow().as_deref(), Some("t0k3n"));
        let body: serde_json::Value = serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "toko", "password": "pw"}));
    }

    #[tokio::test]
    async fn test_login_without_token_is_rejected() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/login", 200, json!({"message": "Account locked"}));
        let api = client(&transport, Session::restore(MemoryTokenStore::default()));

        let err = api
            .login(&LoginRequest { username: "toko".into(), password: "pw".into() })
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected(Some("Account locked".into())));
    }

    #[tokio::test]
    async fn test_validation_errors_are_joined() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Post,
            "/materials",
            422,
            json!({
                "message": "The given data was invalid.",
                "errors": {
                    "material_name": ["The material name field is required."],
                    "weight": ["The weight must be at least 1."]
                }
            }),
        );
        let api = client(&transport, signed_in());

        let err = api
            .create::<Material>(&MaterialPayload {
                material_name: String::new(),
                price_per_unit: 10.0,
                weight: 0.0,
                weight_unit: shared::WeightUnit::Kg,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Validation(
                "The material name field is required., The weight must be at least 1.".into()
            )
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_paths() {
        let transport = FakeTransport::new();
        transport.respond(Method::Put, "/materials/7", 200, json!({"success": true, "data": {}}));
        transport.respond(Method::Delete, "/materials/7", 200, json!({"success": true, "message": "Material deleted"}));
        let api = client(&transport, signed_in());
        let payload = MaterialPayload {
            material_name: "Flour".into(),
            price_per_unit: 12000.0,
            weight: 1.0,
            weight_unit: shared::WeightUnit::Kg,
        };

        api.update::<Material>(&EntityId::from(7), &payload).await.unwrap();
        api.delete::<Material>(&EntityId::from(7)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert!(requests[1].body.is_none());
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_rejected() {
        let transport = FakeTransport::new();
        transport.respond(Method::Delete, "/products/3", 200, json!({"success": false, "message": "Product has sales"}));
        let api = client(&transport, signed_in());

        let err = api.delete::<Product>(&EntityId::from(3)).await.unwrap_err();
        assert_eq!(err.user_message("Failed to delete product"), "Product has sales");
    }

    #[tokio::test]
    async fn test_server_error_keeps_message() {
        let transport = FakeTransport::new();
        transport.respond(Method::Get, "/balance", 500, json!({"message": "Database unavailable"}));
        let api = client(&transport, signed_in());

        let err = api.get_balance().await.unwrap_err();
        assert_eq!(err, ApiError::Server { status: 500, message: Some("Database unavailable".into()) });
    }

    #[tokio::test]
    async fn test_network_failure() {
        let transport = FakeTransport::new();
        let api = client(&transport, signed_in());
        let err = api.list::<Product>().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_sales_arrive_newest_first() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Get,
            "/sales",
            200,
            json!({"data": [
                {"id": 1, "product_id": 2, "quantity": 1, "date": "2025-01-05"},
                {"id": 2, "product_id": 2, "quantity": 3, "date": "2025-03-01"},
                {"id": 3, "product_id": 2, "quantity": 2, "date": "12/02/25"}
            ]}),
        );
        let api = client(&transport, signed_in());

        let sales = api.list::<Sale>().await.unwrap();
        let ids: Vec<String> = sales.iter().map(|sale| sale.id.to_string()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[tokio::test]
    async fn test_update_balance_falls_back_to_sent_value() {
        let transport = FakeTransport::new();
        transport.respond(Method::Put, "/balance", 200, json!({"success": true}));
        let api = client(&transport, signed_in());

        let balance = api.update_balance(250000.0).await.unwrap();
        assert_eq!(balance.balance, 250000.0);
        let body: serde_json::Value = serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"balance": 250000.0}));
    }

    fn bread(image: Option<Upload>) -> ProductSubmission {
        ProductSubmission {
            payload: ProductPayload {
                product_name: "Bread".into(),
                price: 15000.0,
                stock: 4,
                description: None,
                materials: vec![ProductMaterialPayload {
                    material_id: EntityId::from(1),
                    amount_per_product: 250.0,
                    weight_unit: WeightUnit::G,
                }],
            },
            image,
        }
    }

    #[tokio::test]
    async fn test_product_with_image_is_sent_as_form() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/products", 201, json!({"success": true, "data": {}}));
        let api = client(&transport, signed_in());

        api.create::<Product>(&bread(Some(Upload::detached("bread.png")))).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert!(request.body.is_none());
        assert_eq!(request.header("Content-Type"), None);
        assert_eq!(request.header("Authorization"), Some("Bearer secret"));
        let form = request.form.as_ref().unwrap();
        assert_eq!(form.field("product_name"), Some("Bread"));
        assert_eq!(form.field("stock"), Some("4"));
        assert_eq!(form.field("materials[0][material_id]"), Some("1"));
        assert_eq!(form.field("_method"), None);
        assert_eq!(form.files[0].0, "image");
        assert_eq!(form.files[0].1.file_name(), "bread.png");
    }

    #[tokio::test]
    async fn test_product_update_with_image_spoofs_put() {
        let transport = FakeTransport::new();
        transport.respond(Method::Post, "/products/12", 200, json!({"success": true, "data": {}}));
        let api = client(&transport, signed_in());

        api.update::<Product>(&EntityId::from(12), &bread(Some(Upload::detached("new.jpg"))))
            .await
            .unwrap();

        assert_eq!(transport.count(Method::Put, "/products/12"), 0);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        let form = request.form.as_ref().unwrap();
        assert_eq!(form.field("_method"), Some("PUT"));
        assert_eq!(form.files.len(), 1);
    }

    #[tokio::test]
    async fn test_product_update_without_image_stays_json() {
        let transport = FakeTransport::new();
        transport.respond(Method::Put, "/products/12", 200, json!({"success": true, "data": {}}));
        let api = client(&transport, signed_in());

        api.update::<Product>(&EntityId::from(12), &bread(None)).await.unwrap();

        let request = &transport.requests()[0];
        assert!(request.form.is_none());
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["product_name"], "Bread");
        assert!(body.get("image").is_none());
    }
}
