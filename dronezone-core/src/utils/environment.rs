use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which swallows all log messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")))
    }
}
