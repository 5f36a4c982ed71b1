pub mod filters;
pub mod macros;
pub mod records;
pub mod time;

pub use filters::*;
pub use records::*;
pub use time::*;
