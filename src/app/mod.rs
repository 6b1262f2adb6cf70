// Application layer: page drivers that tie loaders, state and renderers together.

pub mod pages;
