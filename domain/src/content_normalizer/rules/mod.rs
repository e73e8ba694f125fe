//! Formatter tables. One table per content source; each maps a
//! classification to a pure function from payload to record.

pub mod cms;
pub mod legacy;
