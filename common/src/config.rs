/// Settings for a single diagnostic run.
///
/// Passed explicitly into the orchestrator so tests can substitute
/// arbitrary values; there is no global fallback state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface probed when route discovery cannot name one.
    pub fallback_interface: String,
    /// Well-known external address used to resolve the outbound route.
    pub route_target: String,
    /// Hostname looked up to confirm name resolution works.
    pub lookup_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_interface: String::from("eth0"),
            route_target: String::from("8.8.8.8"),
            lookup_host: String::from("google.com"),
        }
    }
}
