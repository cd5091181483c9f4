use crate::core::field_map::{map_payload, FieldCorrespondence, VIACEP_FIELDS};
use crate::domain::model::{AddressRecord, NormalizedPostalCode};
use crate::domain::ports::AddressResolver;
use crate::utils::error::LookupError;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Drives one postal code lookup from raw input to an [`AddressRecord`].
pub struct LookupService<R: AddressResolver> {
    resolver: R,
    field_map: &'static [FieldCorrespondence],
}

impl<R: AddressResolver> LookupService<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_field_map(resolver, VIACEP_FIELDS)
    }

    pub fn with_field_map(resolver: R, field_map: &'static [FieldCorrespondence]) -> Self {
        Self {
            resolver,
            field_map,
        }
    }

    pub async fn lookup(&self, raw: &str) -> std::result::Result<AddressRecord, LookupError> {
        let code = NormalizedPostalCode::parse(raw).inspect_err(|_| {
            tracing::debug!("Rejected malformed postal code {:?}", raw);
        })?;

        let outcome = AssertUnwindSafe(self.resolve_and_map(&code))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                Err(LookupError::Internal {
                    message: panic_message(panic.as_ref()),
                })
            });

        match &outcome {
            Ok(_) => tracing::debug!("Resolved postal code {}", code),
            Err(LookupError::NotFound { .. }) => {
                tracing::debug!("Postal code {} not found in directory", code)
            }
            Err(e @ LookupError::UpstreamUnavailable { .. }) => {
                tracing::warn!("Lookup of {} failed upstream: {}", code, e)
            }
            Err(e) => tracing::error!("Lookup of {} failed: {}", code, e),
        }

        outcome
    }

    async fn resolve_and_map(
        &self,
        code: &NormalizedPostalCode,
    ) -> std::result::Result<AddressRecord, LookupError> {
        tracing::debug!("Resolving postal code {}", code);
        let payload = self.resolver.resolve(code).await?;

        if payload.is_not_found() {
            return Err(LookupError::NotFound {
                cep: code.to_string(),
            });
        }

        map_payload(&payload, self.field_map)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("panic during lookup: {}", detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DirectoryPayload;
    use crate::utils::error::ResolverError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum Reply {
        Payload(Value),
        Fail(fn() -> ResolverError),
        Panic,
    }

    struct StubResolver {
        reply: Reply,
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl StubResolver {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AddressResolver for StubResolver {
        async fn resolve(
            &self,
            code: &NormalizedPostalCode,
        ) -> std::result::Result<DirectoryPayload, ResolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(code.to_string());
            match &self.reply {
                Reply::Payload(value) => DirectoryPayload::try_from(value.clone()),
                Reply::Fail(make) => Err(make()),
                Reply::Panic => panic!("resolver exploded"),
            }
        }
    }

    fn paulista() -> Value {
        json!({
            "cep": "01310-100",
            "logradouro": "Av Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        })
    }

    #[tokio::test]
    async fn test_successful_lookup() {
        let service = LookupService::new(StubResolver::new(Reply::Payload(paulista())));

        let record = service.lookup("01310-100").await.unwrap();

        assert_eq!(record.cep, "01310-100");
        assert_eq!(record.address.as_deref(), Some("Av Paulista"));
        assert_eq!(record.state.as_deref(), Some("SP"));
        assert_eq!(service.resolver.seen.lock().unwrap().as_slice(), ["01310100"]);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_resolver() {
        let service = LookupService::new(StubResolver::new(Reply::Payload(paulista())));

        let err = service.lookup("0131-100").await.unwrap_err();

        assert!(matches!(err, LookupError::InvalidInput { .. }));
        assert_eq!(service.resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_not_found_marker_wins_over_other_fields() {
        let mut value = paulista();
        value["erro"] = json!(true);
        let service = LookupService::new(StubResolver::new(Reply::Payload(value)));

        let err = service.lookup("01310100").await.unwrap_err();

        assert_eq!(
            err,
            LookupError::NotFound {
                cep: "01310100".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_string_not_found_marker() {
        let service =
            LookupService::new(StubResolver::new(Reply::Payload(json!({"erro": "true"}))));

        let err = service.lookup("99999-999").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_is_upstream_unavailable() {
        let service = LookupService::new(StubResolver::new(Reply::Fail(|| {
            ResolverError::Transport("connection reset".to_string())
        })));

        let err = service.lookup("01310100").await.unwrap_err();
        assert!(matches!(err, LookupError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_unavailable() {
        let service =
            LookupService::new(StubResolver::new(Reply::Fail(|| ResolverError::Status(502))));

        let err = service.lookup("01310100").await.unwrap_err();
        assert!(matches!(err, LookupError::UpstreamUnavailable { .. }));
        assert_eq!(service.resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_internal() {
        let value = json!(["not", "an", "object"]);
        let service = LookupService::new(StubResolver::new(Reply::Payload(value)));

        let err = service.lookup("01310100").await.unwrap_err();
        assert!(matches!(err, LookupError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_payload_without_cep_is_internal() {
        let service =
            LookupService::new(StubResolver::new(Reply::Payload(json!({"uf": "SP"}))));

        let err = service.lookup("01310100").await.unwrap_err();
        assert!(matches!(err, LookupError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolver_panic_is_internal() {
        let service = LookupService::new(StubResolver::new(Reply::Panic));

        let err = service.lookup("01310100").await.unwrap_err();

        match err {
            LookupError::Internal { message } => assert!(message.contains("resolver exploded")),
            other => panic!("expected internal error, got {other:?}"),
        }
    }
}
