//! Gallows figure for each drawing stage
//!
//! `STAGES[n]` is the figure shown with `n` lives left: stage 11 is an empty frame and
//! stage 0 is the complete hanged man.

use crate::core::MAX_LIVES;

/// Number of text rows in every figure
pub const FIGURE_HEIGHT: usize = 8;

pub type Figure = [&'static str; FIGURE_HEIGHT];

const BASE: &str = "       -------";
const POST: &str = "          |";
const BEAM: &str = "          ______";
const BRACE: &str = "          |/";
const ROPE: &str = "          |/   |";
const HEAD: &str = "          |    O";
const BODY: &str = "          |    |";
const ONE_ARM: &str = "          |   /|";
const ARMS: &str = "          |   /|\\";
const ONE_LEG: &str = "          |   /";
const LEGS: &str = "          |   / \\";

/// Lookup table from remaining lives to figure
pub static STAGES: [Figure; MAX_LIVES as usize + 1] = [
    [BEAM, ROPE, HEAD, ARMS, BODY, LEGS, POST, BASE],
    [BEAM, ROPE, HEAD, ARMS, BODY, ONE_LEG, POST, BASE],
    [BEAM, ROPE, HEAD, ARMS, BODY, POST, POST, BASE],
    [BEAM, ROPE, HEAD, ONE_ARM, BODY, POST, POST, BASE],
    [BEAM, ROPE, HEAD, BODY, BODY, POST, POST, BASE],
    [BEAM, ROPE, HEAD, POST, POST, POST, POST, BASE],
    [BEAM, ROPE, POST, POST, POST, POST, POST, BASE],
    [BEAM, BRACE, POST, POST, POST, POST, POST, BASE],
    [BEAM, POST, POST, POST, POST, POST, POST, BASE],
    ["", POST, POST, POST, POST, POST, POST, BASE],
    ["", "", "", "", "", "", "", BASE],
    ["", "", "", "", "", "", "", ""],
];

/// Figure rows for a drawing stage
///
/// Stages beyond the table show the empty frame.
#[must_use]
pub fn figure(stage: usize) -> &'static Figure {
    &STAGES[stage.min(STAGES.len() - 1)]
}
