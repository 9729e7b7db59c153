//! 단일 배관 수리 계산 모듈 모음.

pub mod calculator;
pub mod fittings;
pub mod friction;
pub mod geometry;
pub mod losses;

pub use calculator::{calculate, EquivalentLengths, PipeFlowInput, PipeFlowResult};
pub use fittings::{FittingCounts, FittingKind};
pub use friction::*;
