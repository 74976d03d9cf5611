pub mod bbox;
pub mod crop;
pub mod mask;
pub mod pipeline;
pub mod save;
