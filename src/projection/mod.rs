//! 구독형과 일회성 비용 전략을 비교하는 계산 모듈 모음.

pub mod assumptions;
pub mod break_even;
pub mod chart;
pub mod engine;
pub mod strategy;

pub use assumptions::*;
pub use break_even::*;
pub use engine::*;
pub use strategy::*;
