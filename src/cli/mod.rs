pub mod demo;
pub mod entropy;
pub mod keyspace;
pub mod timing;

pub use demo::*;
pub use entropy::*;
pub use keyspace::*;
pub use timing::*;
