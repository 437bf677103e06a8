//! Game of Life core functionality

pub mod codec;
pub mod engine;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use codec::{decode, decode_str, encode, SaveRecord};
pub use engine::{GridEngine, DEFAULT_DENSITY};
pub use grid::Grid;
pub use io::{create_example_saves, load_record_from_file, save_record_to_file};
pub use patterns::{find_pattern, pattern_names, Pattern, PATTERNS};
pub use rules::GameOfLifeRules;
