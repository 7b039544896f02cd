/// Procedural target patterns, color supply and piece placement
pub mod generation;
/// Chain push resolution with per-gesture move tracking
pub mod push;
/// Release-time snapping of displaced pieces
pub mod snap;
