use thiserror::Error;

#[derive(Error, Debug)]
pub enum NatalError {
    #[error(
        "Kepler equation did not converge after {iterations} iterations (M = {mean_anomaly}, e = {eccentricity})"
    )]
    KeplerNotConverged {
        iterations: usize,
        mean_anomaly: f64,
        eccentricity: f64,
    },

    #[error("Eccentricity out of the elliptic range |e| < 1: {0}")]
    InvalidEccentricity(f64),

    #[error("Non finite input: {0}")]
    NonFiniteInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Hifitime error: {0}")]
    HifitimeError(#[from] hifitime::HifitimeError),
}

impl PartialEq for NatalError {
    fn eq(&self, other: &Self) -> bool {
        use NatalError::*;
        match (self, other) {
            (
                KeplerNotConverged {
                    iterations: a,
                    mean_anomaly: ma,
                    eccentricity: ea,
                },
                KeplerNotConverged {
                    iterations: b,
                    mean_anomaly: mb,
                    eccentricity: eb,
                },
            ) => a == b && ma == mb && ea == eb,
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (NonFiniteInput(a), NonFiniteInput(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,

            // hifitime errors are not comparable: same variant is enough
            (HifitimeError(_), HifitimeError(_)) => true,

            _ => false,
        }
    }
}
