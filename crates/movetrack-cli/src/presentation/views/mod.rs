//! Plain-text output. Each view model renders itself through `fmt::Display`.

mod check;
mod movement;
mod supplier;
