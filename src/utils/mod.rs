mod argmin;

/// Module containing mathematical utilities.
pub mod math {
    pub use super::argmin::*;
}
