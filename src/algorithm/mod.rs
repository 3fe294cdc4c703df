/// Reflection of a solved quadrant into the full matrix
pub mod assembly;
/// Compact tile set used for candidate tracking
pub mod bitset;
/// Generator entry points with fallback handling
pub mod executor;
/// Injectable choice sources for uniform tile selection
pub mod selection;
/// Quadrant constraint solver
pub mod solver;
