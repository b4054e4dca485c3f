use axum::Router;

/// A service module that contributes HTTP routes.
///
/// Each business module implements this trait to register its
/// endpoints. The binary entry point collects all modules and merges
/// their routes into a single Router; each module owns the paths it
/// returns (the catalog module serves top-level `/categories` and
/// `/products` pages).
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Return the module's routes.
    fn routes(&self) -> Router;
}
