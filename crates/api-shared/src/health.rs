use crate::wire::HealthRes;

/// Simple health service shared by every API surface.
///
/// This service provides a standardised way to check the health status of
/// the EMCode system.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    ///
    /// The service is stateless, so health is unconditional: if the process
    /// answers, it is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "EMCode is alive".into(),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
