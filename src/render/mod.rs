pub mod backend;
pub mod cpu;
pub mod passes;
pub mod text;
