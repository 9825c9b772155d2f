//! Tax computation modules

pub mod gst;
