//! Shared configuration and resource lifecycle for one API surface.
//!
//! # Responsibilities
//! - Own the base host, the three formatters and the transport handler
//! - Build the transport lazily, at most one published instance per config
//! - Release the transport exactly once, on `dispose()` or on drop
//!
//! # Design Decisions
//! - Every accessor takes `&self` so the config can live in an `Arc` shared by
//!   concurrent calls
//! - Transport publication is a compare-and-swap: racing first accesses may
//!   each build a transport, the losers are closed and the winner is returned
//! - Replacing the handler after the transport exists does not rebuild it
//! - Disposing while calls are in flight is the caller's responsibility; those
//!   calls fail with `ApiError::Disposed`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::RwLock;
use url::Url;

use crate::config::schema::ClientSettings;
use crate::error::{ApiError, ApiResult};
use crate::format::{FormatterRegistry, KeyValueFormatter, StringFormatter};
use crate::transport::{DefaultHttpHandler, HttpClient, HttpHandler};

#[derive(Debug, Default)]
struct FormatterSlots {
    xml: Option<Arc<dyn StringFormatter>>,
    json: Option<Arc<dyn StringFormatter>>,
    key_value: Option<Arc<dyn KeyValueFormatter>>,
}

/// Configuration shared by every call of an API surface.
#[derive(Debug)]
pub struct HttpApiConfig {
    http_host: RwLock<Option<Url>>,
    formatters: RwLock<FormatterSlots>,
    handler: RwLock<Option<Arc<dyn HttpHandler>>>,
    http_client: ArcSwapOption<HttpClient>,
    disposed: AtomicBool,
}

impl HttpApiConfig {
    /// A configuration using the process-wide default formatters.
    pub fn new() -> Self {
        Self::with_formatters(FormatterRegistry::shared())
    }

    /// A configuration starting from the given formatters.
    pub fn with_formatters(registry: &FormatterRegistry) -> Self {
        Self {
            http_host: RwLock::new(None),
            formatters: RwLock::new(FormatterSlots {
                xml: Some(registry.xml.clone()),
                json: Some(registry.json.clone()),
                key_value: Some(registry.key_value.clone()),
            }),
            handler: RwLock::new(None),
            http_client: ArcSwapOption::empty(),
            disposed: AtomicBool::new(false),
        }
    }

    /// A configuration with host and transport settings from a settings file.
    pub fn from_settings(settings: &ClientSettings) -> ApiResult<Self> {
        let config = Self::new();
        if let Some(host) = &settings.http_host {
            let url = Url::parse(host).map_err(|source| ApiError::InvalidUrl {
                url: host.clone(),
                source,
            })?;
            config.set_http_host(Some(url));
        }
        config.set_handler(Arc::new(DefaultHttpHandler::new(settings.transport.clone())));
        Ok(config)
    }

    /// Base host; wins over the host declared on an action.
    pub fn http_host(&self) -> Option<Url> {
        self.http_host.read().clone()
    }

    pub fn set_http_host(&self, host: Option<Url>) {
        *self.http_host.write() = host;
    }

    pub fn xml_formatter(&self) -> ApiResult<Arc<dyn StringFormatter>> {
        self.formatters.read().xml.clone().ok_or(ApiError::Disposed)
    }

    pub fn set_xml_formatter(&self, formatter: Arc<dyn StringFormatter>) {
        self.formatters.write().xml = Some(formatter);
    }

    pub fn json_formatter(&self) -> ApiResult<Arc<dyn StringFormatter>> {
        self.formatters.read().json.clone().ok_or(ApiError::Disposed)
    }

    pub fn set_json_formatter(&self, formatter: Arc<dyn StringFormatter>) {
        self.formatters.write().json = Some(formatter);
    }

    pub fn key_value_formatter(&self) -> ApiResult<Arc<dyn KeyValueFormatter>> {
        self.formatters.read().key_value.clone().ok_or(ApiError::Disposed)
    }

    pub fn set_key_value_formatter(&self, formatter: Arc<dyn KeyValueFormatter>) {
        self.formatters.write().key_value = Some(formatter);
    }

    /// Handler backing the transport, defaulting to [`DefaultHttpHandler`].
    pub fn handler(&self) -> ApiResult<Arc<dyn HttpHandler>> {
        if self.is_disposed() {
            return Err(ApiError::Disposed);
        }
        let mut slot = self.handler.write();
        let handler = slot
            .get_or_insert_with(|| Arc::new(DefaultHttpHandler::default()) as Arc<dyn HttpHandler>);
        Ok(handler.clone())
    }

    /// Replace the handler.
    ///
    /// Only effective before the first call to [`transport`](Self::transport):
    /// an existing transport is kept as is.
    pub fn set_handler(&self, handler: Arc<dyn HttpHandler>) {
        if self.http_client.load().is_some() {
            tracing::warn!(
                "Transport handler replaced after the transport was built; \
                 existing transport is kept"
            );
        }
        *self.handler.write() = Some(handler);
    }

    /// The shared transport handle, built on first access.
    pub fn transport(&self) -> ApiResult<Arc<HttpClient>> {
        if self.is_disposed() {
            return Err(ApiError::Disposed);
        }
        if let Some(client) = self.http_client.load_full() {
            return Ok(client);
        }

        let created = Arc::new(HttpClient::new(self.handler()?.create_transport()?));
        let previous = self
            .http_client
            .compare_and_swap(&None::<Arc<HttpClient>>, Some(created.clone()));

        match &*previous {
            Some(winner) => {
                // Another caller published first.
                created.close();
                Ok(winner.clone())
            }
            None if self.is_disposed() => {
                // dispose() ran while the transport was being built.
                self.release_transport();
                Err(ApiError::Disposed)
            }
            None => {
                tracing::debug!("Shared HTTP transport published");
                Ok(created)
            }
        }
    }

    /// Replace the transport handle outright.
    pub fn set_transport(&self, client: Arc<HttpClient>) {
        self.http_client.store(Some(client));
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Release the transport and drop all held references.
    ///
    /// Calling this more than once is a no-op.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.release_transport();

        *self.formatters.write() = FormatterSlots::default();
        *self.handler.write() = None;
        *self.http_host.write() = None;
        tracing::debug!("HTTP API configuration disposed");
    }

    fn release_transport(&self) {
        if let Some(client) = self.http_client.swap(None) {
            client.close();
        }
    }
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HttpApiConfig {
    fn drop(&mut self) {
        if !*self.disposed.get_mut() {
            self.release_transport();
        }
    }
}
