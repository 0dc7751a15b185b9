pub mod bell_gen;
pub mod canvas;
pub mod scene;
