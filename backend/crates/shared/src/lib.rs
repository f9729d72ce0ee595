//! Shared Kernel
//!
//! The small vocabulary `auth` and `todo` both speak: typed ids and the
//! error type every response is rendered from.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
