pub mod chaos;
pub mod cipher;
pub mod codec;

pub use chaos::*;
pub use cipher::*;
pub use codec::*;
