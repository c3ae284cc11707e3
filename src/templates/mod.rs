pub mod components;
pub mod format;
pub mod forms;
pub mod layout;
pub mod pages;

pub use forms::*;
pub use layout::*;
pub use pages::*;
