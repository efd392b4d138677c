
pub mod macros;
pub mod tlist;
pub mod boolean;
pub mod nat;


pub use macros::Same;
pub use tlist::*;
pub use boolean::*;
pub use nat::*;
