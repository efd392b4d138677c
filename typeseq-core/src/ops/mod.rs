
pub mod push;
pub mod reverse;
pub mod at;
pub mod filter;
pub mod transform;
pub mod slice;


pub use push::*;
pub use reverse::*;
pub use at::*;
pub use filter::*;
pub use transform::*;
pub use slice::*;
