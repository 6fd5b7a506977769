use tracing::Level;

#[derive(Debug, Clone)]
pub struct ServiceContext {
    pub service_name: String,
    pub environment: String,
    pub component: String,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub service_context: ServiceContext,
    /// Used when `RUST_LOG` is absent or unparsable.
    pub default_level: Level,
}

impl ObservabilityConfig {
    pub fn new(service_name: &str, environment: &str, component: &str) -> Self {
        let component = component.trim().to_string();
        let service_name = Some(service_name.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| component.clone());
        let environment = Some(environment.trim())
            .filter(|v| !v.is_empty())
            .unwrap_or("unknown")
            .to_string();

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
            default_level: Level::INFO,
        }
    }

    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }
}

pub fn parse_level(input: &str) -> Option<Level> {
    match input.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
