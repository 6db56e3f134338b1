//! Reduction of tilings to one representative per symmetry class
//!
//! The square has eight symmetries: four rotations, each optionally combined
//! with a mirror image. Two tilings are considered the same puzzle when one is
//! mapped onto the other by any of them.

use log::{debug, info};
use std::collections::HashSet;

use crate::io::error::{Result, computation_error};
use crate::spatial::Tiling;

/// Signatures of all eight symmetric images of a tiling
///
/// Walks the four rotations of the tiling and the four rotations of its
/// mirror image, then mirrors back and checks that the walk returned to the
/// starting tiling.
///
/// # Errors
///
/// Returns a computation error if the transformed tiling does not equal the
/// original after the full walk, which means a coordinate transform is wrong
pub fn orbit_signatures(tiling: &Tiling) -> Result<Vec<String>> {
    let mut worker = tiling.clone();
    let mut signatures = Vec::with_capacity(8);
    for _ in 0..2 {
        for _ in 0..4 {
            signatures.push(worker.signature());
            worker.rotate_90();
        }
        worker.flip_horizontal();
    }

    let mut expected = tiling.placements().to_vec();
    expected.sort_unstable();
    if worker.placements() != expected.as_slice() {
        return Err(computation_error(
            "orbit_signatures",
            &format!(
                "symmetry walk did not return to the original tiling:\n{tiling}\nended at:\n{worker}"
            ),
        ));
    }
    Ok(signatures)
}

/// Test if two tilings are images of each other under a square symmetry
///
/// # Errors
///
/// Same as `orbit_signatures`
pub fn is_isomorphic(first: &Tiling, second: &Tiling) -> Result<bool> {
    if first.board_size() != second.board_size() {
        return Ok(false);
    }
    let signature = second.signature();
    Ok(orbit_signatures(first)?.contains(&signature))
}

/// Keep the first tiling of every symmetry class, in input order
///
/// # Errors
///
/// Same as `orbit_signatures`
pub fn unify(tilings: &[Tiling]) -> Result<Vec<Tiling>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for tiling in tilings {
        if seen.contains(&tiling.signature()) {
            continue;
        }
        seen.extend(orbit_signatures(tiling)?);
        unique.push(tiling.clone());
    }

    debug!(
        "Symmetry reduction kept {} orbits covering {} distinct signatures",
        unique.len(),
        seen.len()
    );
    info!(
        "{} of {} tilings are unique up to symmetry",
        unique.len(),
        tilings.len()
    );
    Ok(unique)
}
