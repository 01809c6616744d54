extern crate nalgebra as na;

use std::fmt;
use std::str::FromStr;
use na::Matrix3x2;

use crate::RuntimeConf;
use crate::parameters::PipelineParameters;

pub mod dtu;
pub mod middlebury;
pub mod error;

pub use error::DatasetError;

/// Axis-aligned scene bounds, one row per axis holding (min, max).
pub type BoundingBox = Matrix3x2<f32>;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum DatasetName {
    Dtu,
    Middlebury
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetName::Dtu => write!(f, "DTU"),
            DatasetName::Middlebury => write!(f, "Middlebury")
        }
    }
}

impl FromStr for DatasetName {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<DatasetName,DatasetError> {
        match s {
            "DTU" => Ok(DatasetName::Dtu),
            "Middlebury" => Ok(DatasetName::Middlebury),
            _ => Err(DatasetError::UnsupportedDataset(s.to_string()))
        }
    }
}

/// DTU identifies a model by scan number, Middlebury by object name.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum ModelId {
    Scan(usize),
    Name(String)
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelId::Scan(id) => write!(f, "{}", id),
            ModelId::Name(name) => write!(f, "{}", name)
        }
    }
}

/// Everything the reconstruction pipeline needs to know about one model.
/// Built once per (dataset, model) pair and not mutated afterwards.
#[derive(Debug,Clone)]
pub struct ReconstructionParams {
    pub dataset_folder: String,
    /// Image path pattern relative to `dataset_folder`; `#` is replaced with
    /// the zero-padded view index.
    pub img_name_pattern: String,
    pub pose_name_pattern: String,
    pub output_folder: String,
    /// Candidate counts of view pairs used during inference.
    pub n_view_pairs_for_inference: Vec<usize>,
    /// Distance between adjacent voxels.
    pub resol: f32,
    pub bounding_box: BoundingBox,
    /// Views used for reconstruction.
    pub view_list: Vec<usize>
}

/// Dataset-side parameters before the output folder is attached.
pub(crate) struct SceneParams {
    pub dataset_folder: String,
    pub img_name_pattern: String,
    pub pose_name_pattern: String,
    pub n_view_pairs_for_inference: Vec<usize>,
    pub resol: f32,
    pub bounding_box: BoundingBox,
    pub view_list: Vec<usize>
}

/// Resolves the parameters of one model of a dataset so the reconstruction
/// driver can loop over the models of a dataset with everything else fixed.
pub fn load_model_specific_params(dataset: DatasetName, model: &ModelId, conf: &RuntimeConf, parameters: &PipelineParameters) -> Result<ReconstructionParams,DatasetError> {
    let scene = match dataset {
        DatasetName::Dtu => dtu::load(model, conf)?,
        DatasetName::Middlebury => middlebury::load(model, conf)?
    };

    let output_folder = output_folder_for(&conf.output_path, dataset, model, &scene, parameters);

    Ok(ReconstructionParams {
        dataset_folder: scene.dataset_folder,
        img_name_pattern: scene.img_name_pattern,
        pose_name_pattern: scene.pose_name_pattern,
        output_folder,
        n_view_pairs_for_inference: scene.n_view_pairs_for_inference,
        resol: scene.resol,
        bounding_box: scene.bounding_box,
        view_list: scene.view_list
    })
}

fn output_folder_for(output_root: &str, dataset: DatasetName, model: &ModelId, scene: &SceneParams, parameters: &PipelineParameters) -> String {
    format!("{}/{}_{}/{}_{:?}_{}/", output_root, dataset, parameters.cube_size, model, scene.n_view_pairs_for_inference, format_significant(scene.resol, 3))
}

/// Formats a value with the given number of significant figures, trailing
/// zeros trimmed, e.g. 0.4 -> "0.4" and 0.00025 -> "0.00025".
fn format_significant(value: f32, figures: i32) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (figures - 1 - magnitude).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    match formatted.contains('.') {
        true => formatted.trim_end_matches('0').trim_end_matches('.').to_string(),
        false => formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_three_significant_figures() {
        assert_eq!(format_significant(0.4, 3), "0.4");
        assert_eq!(format_significant(0.00025, 3), "0.00025");
        assert_eq!(format_significant(580.0, 3), "580");
        assert_eq!(format_significant(0.0, 3), "0");
    }

    #[test]
    fn dataset_names_round_trip() {
        assert_eq!("DTU".parse::<DatasetName>().unwrap(), DatasetName::Dtu);
        assert_eq!("Middlebury".parse::<DatasetName>().unwrap(), DatasetName::Middlebury);
        assert_eq!(DatasetName::Dtu.to_string(), "DTU");
    }

    #[test]
    fn unknown_dataset_name_is_rejected() {
        let err = "Tanks_and_Temples".parse::<DatasetName>().unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedDataset(name) if name == "Tanks_and_Temples"));
    }
}
