use crate::RuntimeConf;
use super::{BoundingBox,DatasetName,DatasetError,ModelId,SceneParams};

const DATASET_SUBFOLDER: &str = "Middlebury";
const N_VIEW_PAIRS_FOR_INFERENCE: usize = 3;
const RESOL: f32 = 0.00025;

/// Published scene bounds of the dinoSparseRing object.
fn dino_sparse_ring_bounds() -> BoundingBox {
    BoundingBox::new(
        -0.061897, 0.010897,
        -0.018874, 0.068227,
        -0.057845, 0.015495)
}

pub(crate) fn load(model: &ModelId, conf: &RuntimeConf) -> Result<SceneParams,DatasetError> {
    let name = match model {
        ModelId::Name(name) => name.as_str(),
        ModelId::Scan(_) => return Err(DatasetError::UnsupportedModel { dataset: DatasetName::Middlebury, model: model.clone() })
    };

    match name {
        "dinoSparseRing" => Ok(SceneParams {
            dataset_folder: format!("{}/{}", conf.dataset_path, DATASET_SUBFOLDER),
            img_name_pattern: format!("{}/dinoSR0#.png", name),
            pose_name_pattern: format!("{}/dinoSR_par.txt", name),
            n_view_pairs_for_inference: vec![N_VIEW_PAIRS_FOR_INFERENCE],
            resol: RESOL,
            bounding_box: dino_sparse_ring_bounds(),
            view_list: (7..13).collect()
        }),
        _ => Err(DatasetError::UnsupportedModel { dataset: DatasetName::Middlebury, model: model.clone() })
    }
}
