pub mod edit;
pub mod init;
pub mod render;
pub mod sections;
pub mod variants;

pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use sections::sections;
pub use variants::{variants, VariantsArgs};
