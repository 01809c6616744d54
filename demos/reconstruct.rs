extern crate color_eyre;
extern crate surfacenet;

use color_eyre::eyre::Result;

use surfacenet::load_runtime_conf;
use surfacenet::parameters::{PipelineParameters,CubeSize};
use surfacenet::dataset::{load_model_specific_params,DatasetName,ModelId};
use surfacenet::io::substitute_view_index;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let runtime_conf = load_runtime_conf();
    let parameters = PipelineParameters::new(12, CubeSize::D64, &runtime_conf.dataset_path);

    let dataset = DatasetName::Middlebury;
    let models = vec![ModelId::Name(String::from("dinoSparseRing"))];
    // DTU instead:
    // let dataset = DatasetName::Dtu;
    // let models = vec![ModelId::Scan(9)];

    for model in &models {
        let params = match load_model_specific_params(dataset, model, &runtime_conf, &parameters) {
            Ok(params) => params,
            Err(e) => {
                log::error!("skipping model {}: {}", model, e);
                continue;
            }
        };

        log::info!("model {}: {} views, resol {}, output {}", model, params.view_list.len(), params.resol, params.output_folder);
        log::info!("bounding box:\n{}", params.bounding_box);
        let first_view = params.view_list[0];
        log::info!("first image: {}/{}", params.dataset_folder, substitute_view_index(&params.img_name_pattern, first_view));
    }

    Ok(())
}
