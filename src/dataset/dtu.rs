use crate::{RuntimeConf,Profile};
use crate::io::octave_loader::{load_named_matrix,MatrixLoadError};
use super::{BoundingBox,DatasetName,DatasetError,ModelId,SceneParams};

const DATASET_SUBFOLDER: &str = "DTU_MVS";
const POSE_NAME_PATTERN: &str = "SampleSet/MVS Data/Calibration/cal18/pos_#.txt";
const BOUNDING_BOX_VARIABLE: &str = "BB";
const N_VIEW_PAIRS_FOR_INFERENCE: usize = 5;
const RESOL: f32 = 0.4;

/// Fixed scene range used instead of the ObsMask file when debugging.
fn debug_scene_range() -> BoundingBox {
    BoundingBox::new(
        0.0, 60.0,
        -150.0, -100.0,
        580.0, 630.0)
}

pub(crate) fn load(model: &ModelId, conf: &RuntimeConf) -> Result<SceneParams,DatasetError> {
    let scan = match model {
        ModelId::Scan(id) => *id,
        ModelId::Name(_) => return Err(DatasetError::UnsupportedModel { dataset: DatasetName::Dtu, model: model.clone() })
    };

    let dataset_folder = format!("{}/{}", conf.dataset_path, DATASET_SUBFOLDER);
    // The fileserver copy of the rectified images is png, the shipped one jpg.
    let img_extension = match conf.profile {
        Profile::Debug => "png",
        Profile::Production => "jpg"
    };
    let img_name_pattern = format!("Rectified/scan{}/rect_#_3_r5000.{}", scan, img_extension);

    let bounding_box = match conf.debug_bounding_box {
        true => debug_scene_range(),
        false => load_bounding_box(&format!("{}/SampleSet/MVS Data/ObsMask/ObsMask{}_10.mat", dataset_folder, scan))?
    };

    Ok(SceneParams {
        dataset_folder,
        img_name_pattern,
        pose_name_pattern: String::from(POSE_NAME_PATTERN),
        n_view_pairs_for_inference: vec![N_VIEW_PAIRS_FOR_INFERENCE],
        resol: RESOL,
        bounding_box,
        view_list: (1..50).collect()
    })
}

/// The ObsMask file stores `BB` as 2x3, one row each for the axis minima and
/// maxima. Transposed here to one row per axis.
fn load_bounding_box(path: &str) -> Result<BoundingBox,DatasetError> {
    log::debug!("loading bounding box from {}", path);
    let bb = load_named_matrix(path, BOUNDING_BOX_VARIABLE)
        .map_err(|source| DatasetError::BoundingBox { path: path.to_string(), source })?;
    if bb.nrows() != 2 || bb.ncols() != 3 {
        return Err(DatasetError::BoundingBox {
            path: path.to_string(),
            source: MatrixLoadError::UnexpectedShape { rows: bb.nrows(), columns: bb.ncols(), expected_rows: 2, expected_columns: 3 }
        });
    }
    Ok(BoundingBox::from_fn(|r,c| bb[(c,r)] as f32))
}
