//! Request execution with validation on both sides of the transport.
//!
//! [`ClientCore`] is what every generated resource client calls into. It
//! checks the caller's query and body against their strict schemas before
//! anything is sent, hands the request to the [`Transport`], and checks the
//! response against its schema before decoding it.

use std::sync::Arc;

use schematic_define::{RestMethod, Schema};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::query::encode_query;
use crate::error::{ApiError, Stage, ValidationError};
use crate::schema_type::SchemaType;
use crate::transport::{Transport, TransportRequest};
use crate::validate::{validate, validate_as, ValidateOptions};

/// A JSON payload paired with the schema it must satisfy.
#[derive(Debug, Clone)]
pub struct Payload {
    pub schema: &'static Schema,
    pub value: Value,
}

impl Payload {
    /// Encodes a generated type, pairing it with that type's schema.
    ///
    /// ## Errors
    ///
    /// Returns the serde error if `value` cannot be represented as JSON.
    pub fn typed<T: SchemaType>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            schema: T::schema(),
            value: serde_json::to_value(value)?,
        })
    }

    /// Pairs an untyped value with `schema`.
    pub fn raw(schema: &'static Schema, value: Value) -> Self {
        Self { schema, value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Everything the core needs to perform one call.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use schematic::{Payload, RequestParts};
/// use schematic_define::{ObjectSchema, RestMethod, Schema};
/// use std::sync::LazyLock;
///
/// static BODY: LazyLock<Schema> = LazyLock::new(|| {
///     ObjectSchema::named("CreateThingBody").required("name", Schema::string()).into()
/// });
///
/// let parts = RequestParts::new("things.create", RestMethod::Post, "/things")
///     .with_body(Payload::raw(&BODY, json!({"name": "a"})));
/// assert!(parts.query.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RequestParts {
    /// Label carried by every validation error, e.g. `firewalls.create`.
    pub context: String,
    pub method: RestMethod,
    /// Path with parameters already substituted.
    pub path: String,
    pub query: Option<Payload>,
    pub body: Option<Payload>,
}

impl RequestParts {
    pub fn new(context: impl Into<String>, method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn with_query(mut self, query: Payload) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = Some(body);
        self
    }
}

/// Shared client core.
///
/// Cheap to clone; all clones share one transport. Calls carry no state
/// between them and may run concurrently.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use schematic::{ClientConfig, ClientCore, HttpTransport, RequestParts};
/// use schematic_define::RestMethod;
///
/// let config = ClientConfig::new("https://api.hetzner.cloud/v1")?.with_token(token);
/// let core = ClientCore::new(Arc::new(HttpTransport::new(&config)?));
///
/// let parts = RequestParts::new("firewalls.get", RestMethod::Get, "/firewalls/1");
/// let firewall: GetFirewallResponse = core.execute(parts).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ClientCore {
    transport: Arc<dyn Transport>,
}

impl ClientCore {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Returns the transport requests are sent through.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Performs a call whose response body decodes into `R`.
    ///
    /// ## Errors
    ///
    /// - [`ApiError::InvalidRequest`] if the query or body does not match its
    ///   schema; no request is sent
    /// - [`ApiError::Client`] with the transport's error, unchanged
    /// - [`ApiError::InvalidResponse`] if the response does not match `R`'s
    ///   schema; for non-safe methods the call may already have taken effect
    #[instrument(name = "api_call", skip(self, parts), fields(context = %parts.context, method = %parts.method))]
    pub async fn execute<R: SchemaType>(&self, parts: RequestParts) -> Result<R, ApiError> {
        let context = parts.context.clone();
        let method = parts.method;
        let request = prepare(parts)?;

        let value = self.transport.request(request).await?;

        debug!(context = %context, "validating response");
        let options = ValidateOptions::new(context)
            .with_details(true)
            .at(Stage::Response);
        validate_as::<R>(value, &options).map_err(|source| rejected(method, source))
    }

    /// Performs a call that expects no response body.
    ///
    /// Any body the server does return is ignored.
    ///
    /// ## Errors
    ///
    /// As [`ClientCore::execute`], without response validation.
    #[instrument(name = "api_call", skip(self, parts), fields(context = %parts.context, method = %parts.method))]
    pub async fn execute_empty(&self, parts: RequestParts) -> Result<(), ApiError> {
        let request = prepare(parts)?;
        let value = self.transport.request(request).await?;
        if !value.is_null() {
            debug!("ignoring body of an empty response");
        }
        Ok(())
    }
}

/// Validates the outgoing payloads and builds the transport request.
fn prepare(parts: RequestParts) -> Result<TransportRequest, ApiError> {
    let RequestParts {
        context,
        method,
        path,
        query,
        body,
    } = parts;

    let mut request = TransportRequest::new(method, path);

    if let Some(query) = query {
        debug!(context = %context, "validating query");
        let value = check(&context, Stage::Query, &query)?;
        request.query = encode_query(&value);
    }

    if let Some(body) = body {
        debug!(context = %context, "validating request body");
        request.body = Some(check(&context, Stage::RequestBody, &body)?);
    }

    Ok(request)
}

fn check(context: &str, stage: Stage, payload: &Payload) -> Result<Value, ApiError> {
    let options = ValidateOptions::new(context).with_details(true).at(stage);
    validate(payload.schema, &payload.value, &options).map_err(ApiError::InvalidRequest)
}

fn rejected(method: RestMethod, source: ValidationError) -> ApiError {
    warn!(
        context = %source.context,
        issues = source.issues.len(),
        may_have_applied = !method.is_safe(),
        "response rejected"
    );
    ApiError::InvalidResponse { method, source }
}

#[cfg(test)]
mod tests {
    use std::sync::{LazyLock, Mutex};

    use schematic_define::ObjectSchema;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::error::{ClientError, IssueKind};
    use crate::transport::BoxFuture;

    static QUERY: LazyLock<Schema> = LazyLock::new(|| {
        ObjectSchema::named("ListThingsQuery")
            .optional("name", Schema::string())
            .optional("status", Schema::array(Schema::enumeration(&["on", "off"])))
            .into()
    });

    static BODY: LazyLock<Schema> = LazyLock::new(|| {
        ObjectSchema::named("CreateThingBody")
            .required("name", Schema::string())
            .into()
    });

    static THING: LazyLock<Schema> = LazyLock::new(|| {
        ObjectSchema::named("Thing")
            .required("id", Schema::integer())
            .required("name", Schema::string())
            .passthrough()
            .into()
    });

    #[derive(Debug, Serialize, Deserialize)]
    struct Thing {
        id: i64,
        name: String,
    }

    impl SchemaType for Thing {
        fn schema() -> &'static Schema {
            &THING
        }
    }

    /// Records requests and answers with a fixed result.
    #[derive(Debug)]
    struct Canned {
        reply: Mutex<Option<Result<Value, ClientError>>>,
        seen: Mutex<Vec<TransportRequest>>,
    }

    impl Canned {
        fn new(reply: Result<Value, ClientError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<TransportRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for Canned {
        fn request(&self, request: TransportRequest) -> BoxFuture<'_, Result<Value, ClientError>> {
            self.seen.lock().unwrap().push(request);
            let reply = self
                .reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(Value::Null));
            Box::pin(async move { reply })
        }
    }

    #[tokio::test]
    async fn invalid_body_is_rejected_before_sending() {
        let transport = Canned::new(Ok(json!({"id": 1, "name": "a"})));
        let core = ClientCore::new(transport.clone());

        let parts = RequestParts::new("things.create", RestMethod::Post, "/things")
            .with_body(Payload::raw(&BODY, json!({"name": "a", "color": "red"})));
        let err = core.execute::<Thing>(parts).await.unwrap_err();

        let ApiError::InvalidRequest(validation) = &err else {
            panic!("expected InvalidRequest, got {err:?}");
        };
        assert_eq!(validation.stage, Stage::RequestBody);
        assert_eq!(validation.paths(), vec!["color"]);
        assert!(transport.seen().is_empty());
        assert!(!err.may_have_applied());
    }

    #[tokio::test]
    async fn invalid_query_is_rejected_before_sending() {
        let transport = Canned::new(Ok(json!({})));
        let core = ClientCore::new(transport.clone());

        let parts = RequestParts::new("things.list", RestMethod::Get, "/things")
            .with_query(Payload::raw(&QUERY, json!({"status": ["on", "broken"]})));
        let err = core.execute_empty(parts).await.unwrap_err();

        let validation = err.validation().unwrap();
        assert_eq!(validation.stage, Stage::Query);
        assert_eq!(validation.paths(), vec!["status[1]"]);
        assert!(transport.seen().is_empty());
    }

    #[tokio::test]
    async fn valid_call_is_sent_and_decoded() {
        let transport = Canned::new(Ok(json!({"id": 7, "name": "a", "extra": true})));
        let core = ClientCore::new(transport.clone());

        let parts = RequestParts::new("things.create", RestMethod::Post, "/things")
            .with_query(Payload::raw(&QUERY, json!({"status": ["on", "off"]})))
            .with_body(Payload::raw(&BODY, json!({"name": "a"})));
        let thing: Thing = core.execute(parts).await.unwrap();
        assert_eq!(thing.id, 7);

        let seen = transport.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "/things");
        assert_eq!(
            seen[0].query,
            vec![
                ("status".to_string(), "on".to_string()),
                ("status".to_string(), "off".to_string()),
            ]
        );
        assert_eq!(seen[0].body, Some(json!({"name": "a"})));
    }

    #[tokio::test]
    async fn bad_response_to_mutation_may_have_applied() {
        let transport = Canned::new(Ok(json!({"id": "seven"})));
        let core = ClientCore::new(transport);

        let parts = RequestParts::new("things.create", RestMethod::Post, "/things")
            .with_body(Payload::raw(&BODY, json!({"name": "a"})));
        let err = core.execute::<Thing>(parts).await.unwrap_err();

        assert!(err.may_have_applied());
        let validation = err.validation().unwrap();
        assert_eq!(validation.stage, Stage::Response);
        assert_eq!(validation.paths(), vec!["id", "name"]);
        assert_eq!(validation.missing(), vec!["name"]);
    }

    #[tokio::test]
    async fn bad_response_to_read_has_not_applied() {
        let transport = Canned::new(Ok(json!({"id": 1})));
        let core = ClientCore::new(transport);

        let parts = RequestParts::new("things.get", RestMethod::Get, "/things/1");
        let err = core.execute::<Thing>(parts).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse { .. }));
        assert!(!err.may_have_applied());
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn rejected_response_is_logged() {
        let core = ClientCore::new(Canned::new(Ok(json!({"id": 1}))));
        let parts = RequestParts::new("things.update", RestMethod::Put, "/things/1");
        let _ = core.execute::<Thing>(parts).await;

        assert!(logs_contain("response rejected"));
        assert!(logs_contain("may_have_applied=true"));
        assert!(logs_contain("things.update"));
    }

    #[tokio::test]
    async fn transport_errors_pass_through_unchanged() {
        let transport = Canned::new(Err(ClientError::HttpStatus {
            status: 404,
            code: Some("not_found".to_string()),
            message: "thing not found".to_string(),
        }));
        let core = ClientCore::new(transport);

        let parts = RequestParts::new("things.get", RestMethod::Get, "/things/9");
        let err = core.execute::<Thing>(parts).await.unwrap_err();

        match err {
            ApiError::Client(ClientError::HttpStatus { status, code, .. }) => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("not_found"));
            }
            other => panic!("expected the transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_call_ignores_body() {
        let transport = Canned::new(Ok(json!({"unexpected": 1})));
        let core = ClientCore::new(transport.clone());

        let parts = RequestParts::new("things.delete", RestMethod::Delete, "/things/1");
        core.execute_empty(parts).await.unwrap();
        assert_eq!(transport.seen()[0].method, RestMethod::Delete);
    }

    #[tokio::test]
    async fn undecodable_response_is_reported_at_root() {
        static LOOSE: LazyLock<Schema> =
            LazyLock::new(|| ObjectSchema::named("Loose").passthrough().into());

        #[derive(Debug, Serialize, Deserialize)]
        struct Loose {
            id: i64,
        }

        impl SchemaType for Loose {
            fn schema() -> &'static Schema {
                &LOOSE
            }
        }

        let core = ClientCore::new(Canned::new(Ok(json!({}))));
        let parts = RequestParts::new("loose.get", RestMethod::Get, "/loose");
        let err = core.execute::<Loose>(parts).await.unwrap_err();

        let validation = err.validation().unwrap();
        assert!(matches!(
            validation.issues[0].kind,
            IssueKind::Deserialize(_)
        ));
        assert_eq!(validation.paths(), vec!["$"]);
    }

    #[test]
    fn typed_payload_uses_the_type_schema() {
        let payload = Payload::typed(&Thing {
            id: 1,
            name: "a".to_string(),
        })
        .unwrap();
        assert!(std::ptr::eq(payload.schema, Thing::schema()));
        assert_eq!(payload.value(), &json!({"id": 1, "name": "a"}));
    }
}
