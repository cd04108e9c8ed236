//! Numeric kernels: the gaussian rate bump, Bernoulli log-loss, and smoothing.

pub mod gaussian;
pub mod loglik;
pub mod smooth;

pub use gaussian::*;
pub use loglik::*;
pub use smooth::*;
