//! Contains logic to read and write graphs in json format.

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;
