//! Property and visibility broadcasts over the slice representation
//! collection.

use std::collections::HashSet;

use tracing::trace;
use viewer_common::{
    InteractionMode, RepresentationVisibility, SliceIdentity, SliceProperties, ViewerError,
    ViewerResult,
};

/// One copy of the window/opacity settings per slice, in input order.
pub fn broadcast_properties(
    color_level: f64,
    color_window: f64,
    opacity: f64,
    identities: &[SliceIdentity],
) -> Vec<SliceProperties> {
    let properties = SliceProperties::new(color_level, color_window, opacity);
    trace!(count = identities.len(), "Broadcasting slice properties");
    vec![properties; identities.len()]
}

/// One visibility flag per slice, in input order.
///
/// Macro mode shows everything. Micro mode shows only the slice equal to
/// `active`; with no active slice, or one not in the sequence, nothing is
/// shown.
pub fn resolve_visibility(
    active: Option<&SliceIdentity>,
    mode: InteractionMode,
    identities: &[SliceIdentity],
) -> Vec<bool> {
    match mode {
        InteractionMode::Macro => vec![true; identities.len()],
        InteractionMode::Micro => identities
            .iter()
            .map(|identity| active == Some(identity))
            .collect(),
    }
}

/// [`resolve_visibility`] in the form slice representations consume.
pub fn resolve_representation_visibility(
    active: Option<&SliceIdentity>,
    mode: InteractionMode,
    identities: &[SliceIdentity],
) -> Vec<RepresentationVisibility> {
    resolve_visibility(active, mode, identities)
        .into_iter()
        .map(RepresentationVisibility::from)
        .collect()
}

/// Reject a sequence in which some identity appears twice.
pub fn ensure_unique_identities(identities: &[SliceIdentity]) -> ViewerResult<()> {
    let mut seen = HashSet::with_capacity(identities.len());
    for identity in identities {
        if !seen.insert(identity) {
            return Err(ViewerError::DuplicateSliceIdentity(identity.to_string()));
        }
    }
    Ok(())
}
