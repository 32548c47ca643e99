mod gather;
mod journal;
mod links;
mod logging;
mod misc;
mod recent;
mod sanitize;
pub mod support;
