use crate::utils::metrics::{Method, Metrics, Status};
use anyhow::{Context as _, Result};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use opentelemetry_otlp::{LogExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, logs::SdkLoggerProvider, trace::SdkTracerProvider};
use tokio::time::Instant;
use tracing::{error, info};

/// OTLP providers for one service; dropped providers stop exporting, so keep
/// this alive until [`Telemetry::shutdown`].
pub struct Telemetry {
    tracer_provider: SdkTracerProvider,
    logger_provider: SdkLoggerProvider,
}

impl Telemetry {
    pub fn init(service_name: &str, otel_endpoint: &str) -> Result<Self> {
        let resource = Resource::builder()
            .with_service_name(service_name.to_string())
            .build();

        let span_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(otel_endpoint.to_string())
            .build()
            .context("Failed to create span exporter")?;

        let tracer_provider = SdkTracerProvider::builder()
            .with_resource(resource.clone())
            .with_batch_exporter(span_exporter)
            .build();

        global::set_tracer_provider(tracer_provider.clone());

        let log_exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(otel_endpoint.to_string())
            .build()
            .context("Failed to create log exporter")?;

        let logger_provider = SdkLoggerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(log_exporter)
            .build();

        Ok(Self {
            tracer_provider,
            logger_provider,
        })
    }

    pub fn logger_provider(&self) -> &SdkLoggerProvider {
        &self.logger_provider
    }

    pub fn shutdown(self) -> Result<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.tracer_provider.shutdown() {
            errors.push(format!("tracer provider: {e}"));
        }
        if let Err(e) = self.logger_provider.shutdown() {
            errors.push(format!("logger provider: {e}"));
        }

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        Ok(())
    }
}

pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

/// Span and metrics bookkeeping shared by every service operation.
#[derive(Clone)]
pub struct OperationTracer {
    tracer_name: &'static str,
    metrics: Metrics,
}

impl OperationTracer {
    pub fn new(tracer_name: &'static str, metrics: Metrics) -> Self {
        Self {
            tracer_name,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name)
    }

    pub fn start(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    pub fn success(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, true, message);
    }

    pub fn failure(&self, tracing_ctx: &TracingContext, method: Method, message: &str) {
        self.complete(tracing_ctx, method, false, message);
    }

    fn complete(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let (status_str, status) = if is_success {
            ("SUCCESS", Status::Success)
        } else {
            ("ERROR", Status::Error)
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}
