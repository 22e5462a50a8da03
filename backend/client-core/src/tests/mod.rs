mod error;
mod render;
mod sequence;
