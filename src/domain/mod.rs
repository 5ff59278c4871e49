pub mod placemark;

pub use placemark::{HEADER, LocationRow, Placemark, map_rows};
