// Boundary formatting. The arithmetic core never calls into this layer.

pub mod render;
