pub mod animator;
pub mod constants;
pub mod diagram;
pub mod hex;
pub mod line_search;
pub mod lipschitz;
pub mod plot;
pub mod surface;

pub use animator::*;
pub use diagram::*;
pub use hex::*;
pub use line_search::*;
pub use lipschitz::*;
pub use plot::*;
pub use surface::*;
