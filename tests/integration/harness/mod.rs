pub mod app;
pub mod assertions;
pub mod builders;

pub use app::*;
pub use assertions::*;
pub use builders::*;
pub use time::*;
