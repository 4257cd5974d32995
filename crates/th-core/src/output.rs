//! Primary output lines.
//!
//! The layout is fixed so runs can be diffed against reference output:
//! offset `%17.8f`, position `%16.8f` x3, velocity `%14.9f` x3, one space
//! between fields.

use crate::propagate::StateVector;

/// Header line opening each record's block.
pub fn render_header(catalog_number: u32) -> String {
    format!("  {}  xx", catalog_number)
}

/// One sample line.
pub fn render_sample(offset: f64, state: &StateVector) -> String {
    let [px, py, pz] = state.position;
    let [vx, vy, vz] = state.velocity;
    format!(
        "{:17.8} {:16.8} {:16.8} {:16.8} {:14.9} {:14.9} {:14.9}",
        offset, px, py, pz, vx, vy, vz,
    )
}
