#[derive(thiserror::Error, Debug, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Fact lookup timed out after {0} ms")]
    FactTimeout(u128),

    #[error("Fact provider returned HTTP {0}")]
    FactStatus(u16),

    #[error("Fact provider returned an unexpected body: {0}")]
    FactMalformed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Classification task failed: {0}")]
    Compute(String),
}
