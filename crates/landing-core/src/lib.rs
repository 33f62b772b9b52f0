pub mod constants;
pub mod error;
pub mod orbit;
pub mod reveal;
pub mod showcase;
pub mod style;

pub use error::*;
pub use orbit::*;
pub use reveal::*;
pub use showcase::*;
pub use style::*;
