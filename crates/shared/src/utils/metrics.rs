use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    /// Registers both families under `{prefix}_requests` and
    /// `{prefix}_request_duration_seconds`.
    pub fn register(&self, prefix: &str, registry: &mut Registry) {
        registry.register(
            format!("{prefix}_requests"),
            "Total requests handled, by method and outcome",
            self.request_counter.clone(),
        );

        registry.register(
            format!("{prefix}_request_duration_seconds"),
            "Request handling latency in seconds",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}
