//! Problem engine: operand draws, strategy dispatch and teaching text.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | `LevelConfig`, `Problem`, `Strategy`, `GenerateOptions` |
//! | `random`     | `RandomSource` trait, blanket impl for `rand::Rng`, `ScriptedSource` |
//! | `digits`     | Digit split and carry logic for the two-digit ×11 shortcut |
//! | `helpers`    | Shared builders: operand draw, question text, repeated addition |
//! | `generator`  | Entry points `generate()` and `generate_with_options()` |
//! | `strategies` | Basic multiplication and the two ×11 strategies |
//! | `error`      | `ConfigError` |

pub mod digits;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod random;
pub mod strategies;

pub use error::ConfigError;
pub use generator::{generate, generate_with_options};
pub use models::{GenerateOptions, LevelConfig, Problem, Strategy, ELEVEN};
pub use random::{RandomSource, ScriptedSource};
