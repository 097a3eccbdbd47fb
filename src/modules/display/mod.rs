pub mod layout;
pub mod plate_fit;

pub use layout::LayoutMode;
pub use plate_fit::{fit_plate_text, FontFitParams};
