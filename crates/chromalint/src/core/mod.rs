mod contrast;
mod conversion;
mod difference;
mod equality;
mod names;
mod string;

// contrast
pub use contrast::{contrast_ratio, relative_luminance};

// conversion
pub use conversion::{hsl_to_rgb, rgb_to_hsl, rgb_to_lab, D65};

// difference
pub use difference::{
    delta_e_cie76, delta_e_cie94, delta_e_ciede2000, DeltaE, DifferenceCategory,
};

// equality
pub use equality::{close_enough, DEFAULT_TOLERANCE};

// names
pub use names::named_color;

// string
pub(crate) use string::{parse, parse_hashed};
pub use string::parse_color;
