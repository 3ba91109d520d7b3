mod logs;
mod metrics;
mod otel;
mod service_address;
mod shutdown;

pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::otel::{OperationTracer, Telemetry, TracingContext};
pub use self::service_address::ServiceAddress;
pub use self::shutdown::shutdown_signal;
