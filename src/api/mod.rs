pub mod suggest;

pub use suggest::{DEFAULT_BASE_URL, SuggestClient, build_url, parse_placemarks};
