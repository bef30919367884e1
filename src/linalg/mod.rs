//! Pivoted LU factorization and the log-domain determinant it yields.

pub(crate) mod logdet;
pub(crate) mod lu;

pub use logdet::{LogDet, Sign};
pub use lu::{slogdet_in_place, DynLu};
