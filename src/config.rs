use tracing::Level;

/// Start-up options for [`init_with()`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Most verbose level forwarded to the browser console.
    pub max_level: Level,

    /// Whether to route panics to `console.error`.
    pub panic_hook: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
            panic_hook: true,
        }
    }
}

/// Install the panic hook and console logging described by `config`. Calling it more than once
/// keeps the first subscriber.
pub fn init_with(config: &Config) {
    if config.panic_hook {
        // Configure the panic hook to log to console.error
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    }

    #[cfg(target_arch = "wasm32")]
    {
        use tracing_subscriber::{layer::SubscriberExt, Registry};

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(config.max_level)
                .build(),
        );

        if tracing::subscriber::set_global_default(Registry::default().with(wasm_layer)).is_err() {
            tracing::debug!("console subscriber already installed");
        }
    }

    tracing::debug!(max_level = %config.max_level, "wquery initialised");
}
