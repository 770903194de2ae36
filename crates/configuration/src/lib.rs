use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisOptions, BonusSettings};

/// Environment variable prefix for overrides, e.g. `SALES_REPORT__BONUS__MAX_BONUS=6000`.
pub const ENV_PREFIX: &str = "SALES_REPORT";

/// Loads report options from a TOML file, then applies environment overrides.
///
/// The file must exist. Any section it omits keeps its default value. The
/// merged result is validated before it is returned.
pub fn load_options(path: &Path) -> Result<AnalysisOptions, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let options = builder.try_deserialize::<AnalysisOptions>()?;
    options.validate()?;

    tracing::debug!(
        path = %path.display(),
        max_bonus = %options.bonus.max_bonus,
        min_bonus = %options.bonus.min_bonus,
        "Loaded analysis options."
    );

    Ok(options)
}
