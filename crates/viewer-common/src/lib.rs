//! Common types shared by the slice viewer compositor and its services.

pub mod error;
pub mod mode;
pub mod slice;

pub use error::{ViewerError, ViewerResult};
pub use mode::{InteractionMode, MaskFormat, MaskType, ViewportRole};
pub use slice::{RepresentationVisibility, SliceIdentity, SliceProperties};
