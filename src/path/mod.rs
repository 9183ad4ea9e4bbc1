mod generic_path;
pub use generic_path::*;

/// a Type to represent the Cost of traversing an Edge or a Path
pub type Cost = usize;
