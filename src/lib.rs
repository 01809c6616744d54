use serde::{Serialize,Deserialize};

pub mod io;
pub mod parameters;
pub mod dataset;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/// Selects between the shipped dataset layout and the fileserver layout used
/// during development. Resolved once when the runtime conf is loaded, never
/// re-derived by probing the filesystem.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Production,
    Debug
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RuntimeConf {
    pub dataset_path: String,
    pub output_path: String,
    pub profile: Profile,
    /// Replace the bounding box loaded from disk with a fixed scene range.
    #[serde(default)]
    pub debug_bounding_box: bool
}

pub fn load_runtime_conf() -> RuntimeConf {
    let conf_path = std::env::var("RUNTIME_CONF").unwrap_or_else(|_| String::from("runtime_conf.yaml"));
    let file = std::fs::File::open(&conf_path).expect("loading runtime conf failed!");
    serde_yaml::from_reader(file).expect("parsing runtime conf failed!")
}
