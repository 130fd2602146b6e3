pub mod vec;

pub use vec::VecCursor;
