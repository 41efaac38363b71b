//! Field length limits, counted in UTF-16 code units (the length a browser reports).

pub const NAME_MAX_LEN: usize = 100;

pub const EMAIL_MAX_LEN: usize = 255;

pub const DETAILS_MAX_LEN: usize = 5000;
