use serde::Deserialize;

/// Argon2id cost parameters.
///
/// Defaults follow the OWASP baseline (19 MiB, 2 passes, 1 lane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes over memory
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}
